//! Service layer shared by the HTTP routes and library consumers.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod list;
pub mod main;

/// Errors surfaced by service calls.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found")]
    NotFound,

    #[error("form error: {0}")]
    Form(String),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
