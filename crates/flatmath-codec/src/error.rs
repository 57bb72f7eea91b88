//! Error types for the flat-array codec.

use crate::Kind;
use thiserror::Error;

/// Errors that can occur while encoding or decoding a math value.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The requested type is not one of the supported kinds.
    ///
    /// Callers should fall back to their default handling for the type.
    #[error("unsupported type: {type_name}")]
    UnsupportedType {
        /// Name of the rejected type, as far as it is known.
        type_name: String,
    },

    /// The array does not have the fixed length of the target kind.
    #[error("{kind} expects {expected} components, found {found}")]
    LengthMismatch {
        /// Target kind.
        kind: Kind,
        /// Required element count.
        expected: usize,
        /// Actual element count.
        found: usize,
    },

    /// An array element is not a number.
    #[error("{kind} component {index} is not a number: {found}")]
    MalformedElement {
        /// Target kind.
        kind: Kind,
        /// Position of the first offending element.
        index: usize,
        /// The offending element as JSON text.
        found: String,
    },

    /// The document node is not an array.
    #[error("{kind} must be encoded as an array, found {found}")]
    NotAnArray {
        /// Target kind.
        kind: Kind,
        /// JSON type of the node that was found.
        found: &'static str,
    },

    /// JSON text could not be written or parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Codec configuration file has invalid contents.
    #[error("invalid codec config: {0}")]
    Config(#[from] toml::de::Error),

    /// Codec configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodecError {
    pub(crate) fn unsupported<T: ?Sized>() -> Self {
        Self::UnsupportedType {
            type_name: std::any::type_name::<T>().to_string(),
        }
    }
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
