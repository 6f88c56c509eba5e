// src/infrastructure/security/claims.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::user::UserId;
use biscuit_auth::builder::{Fact, Predicate, Term};

/// Pull the subject out of the facts of an authorized token.
pub fn parse_subject(facts: Vec<Fact>) -> ApplicationResult<UserId> {
    let raw = facts
        .into_iter()
        .find_map(|fact| subject_id(&fact.predicate))
        .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;

    UserId::new(raw).map_err(|_| ApplicationError::unauthorized("invalid user id"))
}

fn subject_id(predicate: &Predicate) -> Option<i64> {
    if predicate.name != "user" || predicate.terms.len() != 2 {
        return None;
    }
    match predicate.terms[0] {
        Term::Integer(id) => Some(id),
        _ => None,
    }
}
