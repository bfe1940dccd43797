//! Dataset-specific errors
use std::path::PathBuf;

use thiserror::Error;

/// An error that the dataset generator could end up producing.
///
/// There are a few families of errors:
/// - related to the _configuration_, e.g. an unknown data type
/// - related to the generation of the elements
/// - related to writing the header to the disk
#[derive(Debug, Error)]
pub enum DatasetError {
    /// `{0}` is the data type that was asked for.
    #[error("unrecognized data type '{0}', expected one of int, short or long")]
    UnknownDataType(String),
    #[error("invalid element range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
    #[error("array size overflows: {elements} elements with a stride of {stride}")]
    ArraySizeOverflow { elements: usize, stride: usize },
    #[error("a static array needs at least one element per line")]
    InvalidRowWidth,
    #[error("could not write `{path:?}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
