use crate::{application::error::ApplicationError, domain::errors::DomainError};
use async_graphql::ErrorExtensions;

pub const CODE_VALIDATION: &str = "VALIDATION";
pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_UNAUTHORIZED: &str = "UNAUTHORIZED";
pub const CODE_INTERNAL: &str = "INTERNAL";

/// Field-level error carrying a machine-readable `extensions.code`.
pub fn into_graphql(err: ApplicationError) -> async_graphql::Error {
    let code = error_code(&err);
    if code == CODE_INTERNAL {
        tracing::error!(error = %err, "field resolution failed");
    }

    async_graphql::Error::new(err.to_string()).extend_with(|_, ext| ext.set("code", code))
}

fn error_code(err: &ApplicationError) -> &'static str {
    match err {
        ApplicationError::Domain(DomainError::Validation(_)) => CODE_VALIDATION,
        ApplicationError::NotFound(_) | ApplicationError::Domain(DomainError::NotFound(_)) => {
            CODE_NOT_FOUND
        }
        ApplicationError::Unauthorized(_) => CODE_UNAUTHORIZED,
        ApplicationError::Infrastructure(_) | ApplicationError::Domain(DomainError::Persistence(_)) => {
            CODE_INTERNAL
        }
    }
}
