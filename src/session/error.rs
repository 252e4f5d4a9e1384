use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Document I/O error
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SessionError {
    pub fn path(&self) -> &PathBuf {
        match self {
            SessionError::Read { path, .. } | SessionError::Write { path, .. } => path,
        }
    }
}
