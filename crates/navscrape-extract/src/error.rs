//! Extraction errors.

use thiserror::Error;

/// Errors that can occur while extracting embedded arrays.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A search pattern failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// The array was found but is not valid JSON of the expected shape.
    ///
    /// This means the page layout changed and needs investigation.
    #[error("Failed to decode {array}: {source}")]
    Decode {
        /// Name of the script variable holding the array.
        array: String,
        /// The decoding failure of the last capture attempted.
        #[source]
        source: serde_json::Error,
    },
}
