//! Error types for results-folder scans.

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scanning a results folder.
///
/// Nothing is recovered locally: the first failure aborts the scan and no
/// partial seed set is returned.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The folder could not be listed (missing, not a directory, or an
    /// entry could not be read).
    #[error("cannot read folder {path}: {source}")]
    Folder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An entry carries the run-file extension but its name is not valid
    /// UTF-8, so the seed field cannot be located.
    #[error("run file name {file:?} is not valid UTF-8")]
    NonUtf8Name { file: String },

    /// A run-file name is too short to hold a seed field between the
    /// prefix and the extension.
    #[error("run file name {file:?} has no seed field")]
    NoSeedField { file: String },

    /// The seed field of a run-file name is not a base-10 integer.
    #[error("bad seed field {field:?} in run file {file:?}: {source}")]
    BadSeed {
        file: String,
        field: String,
        #[source]
        source: ParseIntError,
    },
}

impl ScanError {
    /// Wrap an I/O failure for `path`.
    pub(crate) fn folder(path: &std::path::Path, source: io::Error) -> Self {
        Self::Folder {
            path: path.to_path_buf(),
            source,
        }
    }
}
