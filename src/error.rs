use std::path::PathBuf;
use std::{error, fmt, io};

/// Type alias for the result of tag operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Kinds of errors that may occur while performing tag operations.
#[derive(Debug)]
pub enum ErrorKind {
    /// An error kind indicating that a write request contained no tags at all.
    EmptyRequest,
    /// An error kind indicating that every tag of a write request was removed by filtering.
    AllTagsFiltered,
    /// An error kind indicating that the target container file does not exist. Contains the
    /// missing path.
    FileNotFound(PathBuf),
    /// An error kind indicating that the file referenced by an `artwork` tag does not exist.
    /// Contains the missing path.
    ArtworkNotFound(PathBuf),
    /// An error kind indicating that no AtomicParsley binary is published for the host
    /// platform. Contains the value of [`std::env::consts::OS`].
    UnsupportedPlatform(String),
    /// An error kind indicating that downloading the AtomicParsley binary failed. Contains
    /// the original error.
    Download(ureq::Error),
    /// An error kind indicating that AtomicParsley could not be launched or exited with an
    /// error. Contains the captured standard error text verbatim.
    Execution(String),
    /// An error kind indicating that an IO error has occurred. Contains the original io::Error.
    Io(io::Error),
}

/// A structure able to represent any error that may occur while performing tag operations.
pub struct Error {
    /// The kind of error.
    pub kind: ErrorKind,
    /// A human readable string describing the error.
    pub description: String,
}

impl Error {
    /// Creates a new `Error` using the error kind and description.
    pub fn new(kind: ErrorKind, description: String) -> Error {
        Error { kind, description }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Io(err) => Some(err),
            ErrorKind::Download(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error {
            kind: ErrorKind::Io(err),
            description: "An IO error occurred.".to_owned(),
        }
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Error {
        Error {
            kind: ErrorKind::Download(err),
            description: "Failed to download the AtomicParsley binary.".to_owned(),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{:?}", self.kind)
        } else {
            write!(f, "{:?}: {}", self.kind, self.description)
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.description.is_empty() {
            write!(f, "{:?}", self.kind)
        } else {
            write!(f, "{:?}: {}", self.kind, self.description)
        }
    }
}
