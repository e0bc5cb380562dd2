//! Error types for catalog loading.

use thiserror::Error;

/// Errors that can occur while loading the embedded catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// An expected asset file is missing from the embedded bundle.
    #[error("Embedded asset not found: {0}")]
    AssetMissing(String),

    /// An asset file exists but does not parse as the expected shape.
    #[error("Failed to parse asset {path}: {source}")]
    JsonParse {
        path: String,
        source: serde_json::Error,
    },

    /// Two catalog entries of the same kind share an id.
    #[error("Duplicate {kind} id in catalog: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

/// Type alias for Result with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;
