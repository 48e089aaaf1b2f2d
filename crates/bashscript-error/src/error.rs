//! Operational errors of the tools built around the scanner.
//!
//! Scanning itself never fails; these cover reading inputs and writing output.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read `{}`", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn read_source(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::ReadSource {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_read_source_message() {
        let err = Error::read_source("missing.bs", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.to_string(), "could not read `missing.bs`");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_from() {
        let err: Error = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert_eq!(err.to_string(), "I/O error: pipe closed");
    }
}
