use std::io;
use std::net::SocketAddr;

use thiserror::Error;

/// Errors that abort the remainder of a knock sequence.
#[derive(Debug, Error)]
pub enum KnockError {
    #[error("failed to resolve {host}:{port}: {source}")]
    Resolve {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },

    #[error("no address found for {host}:{port}")]
    NoAddress { host: String, port: u16 },

    #[error("failed to open socket for {addr}: {source}")]
    Socket {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("failed to send knock to {addr}: {source}")]
    Send {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("failed to read passphrase: {source}")]
    Secret {
        #[source]
        source: io::Error,
    },
}
