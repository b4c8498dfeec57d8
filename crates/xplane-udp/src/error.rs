//! Transport errors.

use std::net::SocketAddr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Failed to bind UDP socket on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Link is listen-only; no remote host to send to")]
    NoRemote,

    #[error("UDP I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LinkResult<T> = Result<T, LinkError>;
