//! Core error types

use thiserror::Error;

/// Errors raised while constructing core components
///
/// The segmentation step itself is infallible: every transition advances
/// the cursor and terminates within the sentence's byte length. Errors can
/// only arise when the immutable inputs are built.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Dictionary entry longer than the matching window can ever cover
    #[error("dictionary entry '{word}' is {length} bytes, exceeding the {limit}-byte matching window")]
    EntryTooLong {
        /// The offending dictionary entry
        word: String,
        /// Its length in bytes
        length: usize,
        /// The maximum window length in bytes
        limit: usize,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
