//! Per-file errors that abort a run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal error for one invocation.
///
/// `MissingFile` and `Read` are raised before anything is written. `Write`
/// is raised after processing; whatever the OS managed to write stays.
#[derive(Debug, Error)]
pub enum RunError {
    /// An input, baseline or new file does not exist.
    #[error("file not found: {}", .path.display())]
    MissingFile { path: PathBuf },

    /// Any other read failure, including input that is not valid UTF-8.
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The destination could not be written.
    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RunError {
    /// Path of the file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            RunError::MissingFile { path }
            | RunError::Read { path, .. }
            | RunError::Write { path, .. } => path,
        }
    }
}
