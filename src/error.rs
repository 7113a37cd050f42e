use thiserror::Error;

/// Errors raised by the API client and the session store.
///
/// None of these reach the filter/sort/paginate pipeline: fetch failures
/// are swapped for the placeholder catalog and storage failures are logged.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API returned status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
