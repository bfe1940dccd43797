//! Interact with the filesystem and write headers to it.
use std::{fs::File, io::prelude::*, path::Path};

use tracing::info;

use crate::error::DatasetError;

/// Dumps a sequence of lines to the disk.
///
/// - the lines are joined with `\n`, without a trailing newline
/// - the file at `path` is created if needed and truncated otherwise
///
/// The file is written in a single call and closed before returning, even when
/// the write fails.
pub fn dump_lines<'a>(
    lines: impl IntoIterator<Item = &'a String>,
    path: &Path,
) -> Result<(), DatasetError> {
    let contents = lines
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");

    let io_error = |source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    };

    info!("dumping {} bytes into `{:?}`", contents.len(), path);
    let mut file = File::create(path).map_err(io_error)?;
    file.write_all(contents.as_bytes()).map_err(io_error)?;

    Ok(())
}
