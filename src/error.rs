use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CombineError{
    #[error("cannot open {}: {}", .path.display(), .source)]
    Open{
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot create {}: {}", .path.display(), .source)]
    Create{
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
