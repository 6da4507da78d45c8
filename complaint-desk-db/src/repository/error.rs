use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Validation error: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("No free complaint identifier left for year {year}")]
    IdentifierSpaceExhausted { year: i32 },
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
