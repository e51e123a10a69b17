use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn user_not_found() -> Self {
        StoreError::NotFound("User not found".to_string())
    }

    pub fn post_not_found() -> Self {
        StoreError::NotFound("Post not found".to_string())
    }

    pub fn user_exists(id: &str) -> Self {
        StoreError::Conflict(format!("User with id {id} already exists"))
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
