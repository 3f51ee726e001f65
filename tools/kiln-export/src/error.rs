//! Error taxonomy for an export run.
//!
//! No error is retried: the tool is a single-shot batch converter, and any
//! failure terminates the run. The only silent paths are documented
//! schema-narrowing decisions (unsupported light types are skipped, empty
//! segments omit their header key).

use thiserror::Error;

use crate::config::ALLOWED_FLAGS;

pub type Result<T> = std::result::Result<T, ExportError>;

#[derive(Debug, Error)]
pub enum ExportError {
    /// Unrecognized caller flag. Raised before the input file is opened.
    #[error("unknown option '{flag}' (allowed: {})", ALLOWED_FLAGS.join(", "))]
    UnknownOption { flag: String },

    /// Required scene substructure absent where a producer expects it.
    #[error("malformed scene: {0}")]
    MalformedScene(String),

    /// A vertex index exceeds the 16-bit format ceiling. Raised before any
    /// byte reaches the output file.
    #[error(
        "vertex index {index} in segment '{segment}' exceeds the 16-bit format ceiling ({max})",
        max = kiln_common::MAX_VERTEX_INDEX
    )]
    IndexOverflow { segment: String, index: u32 },

    /// Scene document deserialization or header serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
