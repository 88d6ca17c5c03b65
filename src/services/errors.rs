use thiserror::Error;

use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Page index or size rejected before touching storage.
    #[error("Invalid pagination request: {0}")]
    InvalidPagination(String),

    /// Storage failure, passed through as reported by the repository.
    #[error(transparent)]
    Storage(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
