use bauhub_core::error::CoreError;
use bauhub_db::StoreError;

/// Failure of a service operation.
///
/// Domain failures (validation, not-found on update) arrive as
/// [`ServiceError::Core`]; anything the store reports is passed through
/// unchanged as [`ServiceError::Store`].
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ServiceError::Core(errors.into())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
