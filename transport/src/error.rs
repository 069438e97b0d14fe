//! Errors raised while executing a request.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, TLS, proxy, timeout or protocol failure.
    #[error("http error: {0}")]
    Http(#[from] ureq::Error),

    /// The CA bundle named by the verification policy could not be read.
    #[error("cannot read CA bundle {path}: {source}")]
    Bundle {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The CA bundle holds no PEM certificates.
    #[error("no certificates in CA bundle {0}")]
    EmptyBundle(String),

    /// The structured body could not be serialized.
    #[error("json body: {0}")]
    Json(#[from] serde_json::Error),
}
