//! Fragment Errors
//!
//! Error types for the fragment parse/load surface. Delivery itself is
//! infallible; only reading fragments off disk can fail.

/// Maximum fragment file size in bytes
pub const MAX_FRAGMENT_BYTES: u64 = 1_000_000;

#[derive(Debug, thiserror::Error)]
pub enum FragmentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported fragment version: {found} (expected {expected})")]
    UnsupportedVersion { found: String, expected: &'static str },

    #[error("Fragment has no trait path")]
    MissingTraitPath,

    #[error("Invalid library name: {0}")]
    InvalidLibraryName(String),

    #[error("Fragment file too large: {0} bytes (max {MAX_FRAGMENT_BYTES})")]
    TooLarge(u64),
}
