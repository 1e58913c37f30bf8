//! Service layer orchestrating repositories, forms and page data.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod api;
pub mod dashboard;
pub mod prediction;

/// Errors surfaced by services to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error("form error: {0}")]
    Form(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
