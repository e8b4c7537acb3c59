use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot open input: {}", path.display())]
    CannotOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read polygon data at line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
