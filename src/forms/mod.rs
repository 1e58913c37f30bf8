//! Form definitions backing the dashboard routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod prediction;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid stop date")]
    InvalidDate,

    #[error("invalid stop time")]
    InvalidTime,

    #[error("driver age must be a whole number")]
    InvalidAge,

    #[error("{0}")]
    Constraint(#[from] TypeConstraintError),
}
