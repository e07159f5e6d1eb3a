use std::path::PathBuf;

/// Errors produced by the file utilities and the label/duration parsers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Regex(#[from] regex::Error),

    #[error("invalid flux region face {0:?}, expected one of X+ X- Y+ Y- Z+ Z-")]
    InvalidFace(String),

    #[error("invalid duration: {0} seconds")]
    InvalidDuration(f64),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn io<P: AsRef<std::path::Path>>(
        path: P,
        source: std::io::Error,
    ) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
