use complaint_desk_db::models::complaint::InvalidStatusError;
use complaint_desk_db::repository::error::RepositoryError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeskError {
    #[error("Validation error: {}", .fields.join(", "))]
    ValidationError { fields: Vec<String> },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DeskError {
    pub fn validation(fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut fields: Vec<String> = fields.into_iter().map(Into::into).collect();
        fields.sort();
        fields.dedup();
        DeskError::ValidationError { fields }
    }
}

impl From<RepositoryError> for DeskError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Validation(fields) => DeskError::validation(fields),
            RepositoryError::NotFound(id) => DeskError::NotFound(id),
            RepositoryError::Conflict(_) | RepositoryError::IdentifierSpaceExhausted { .. } => {
                DeskError::InternalError(error.to_string())
            }
        }
    }
}

impl From<ValidationErrors> for DeskError {
    fn from(errors: ValidationErrors) -> Self {
        DeskError::validation(errors.errors().keys().map(|field| field.to_string()))
    }
}

impl From<InvalidStatusError> for DeskError {
    fn from(error: InvalidStatusError) -> Self {
        DeskError::InvalidStatus(error.0)
    }
}

pub type DeskResult<T> = Result<T, DeskError>;
