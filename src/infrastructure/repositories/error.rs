use crate::domain::errors::DomainError;

const CNT_FOLLOW_FOLLOWER: &str = "follows_follower_id_fkey";
const CNT_FOLLOW_FOLLOWEE: &str = "follows_followee_id_fkey";
const CNT_FOLLOW_SELF: &str = "follows_no_self_follow_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return map_constraint(constraint);
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_constraint(constraint: &str) -> DomainError {
    match constraint {
        CNT_FOLLOW_FOLLOWER | CNT_FOLLOW_FOLLOWEE => DomainError::NotFound("user not found".into()),
        CNT_FOLLOW_SELF => DomainError::Validation("users cannot follow themselves".into()),
        other => DomainError::Persistence(format!("database constraint violation: {other}")),
    }
}
