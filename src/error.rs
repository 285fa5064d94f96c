//! @ai:module:intent Define error types for the checker
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for all checker operations
///
/// Delimiter findings are never errors; they are ordinary results. This type
/// covers only operational failures such as unreadable input.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
