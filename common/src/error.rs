use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or appending the target store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file does not exist yet.
    #[error("target store not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("I/O error accessing target store at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The line does not split into exactly one host and one ports portion.
    #[error("unable to parse line '{line}'")]
    MalformedLine { line: String },
}

/// A single rejected `<port>/<proto>` entry. Siblings on the same line survive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    #[error("invalid port number '{token}'")]
    InvalidNumber { token: String },

    #[error("unknown protocol '{token}'")]
    UnknownProtocol { token: String },
}

/// Construction errors for the target model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("host must not be empty")]
    EmptyHost,

    #[error("port number must be between 1 and 65535")]
    PortZero,
}
