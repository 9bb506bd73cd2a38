use crate::admin::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Admin session required")]
    Unauthorized,

    #[error("Invalid product: {0}")]
    Validation(ValidationErrors),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
