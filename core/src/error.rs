//! Error types for console REST calls.
//!
//! # Design
//! `RestError` is generic over the transport's own error so a transport
//! failure reaches the caller untouched. The only failures raised here are
//! the unsupported-verb precondition and a local hostname that does not
//! resolve.

use std::io;

use thiserror::Error;

/// A verb outside GET/PUT/POST/DELETE.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported REST action was requested: {0}")]
pub struct UnsupportedAction(pub String);

/// Errors returned by `RestClient::live_rest` and `RestClient::sdk_rest`.
#[derive(Debug, Error)]
pub enum RestError<E> {
    /// The verb is not one of the four supported actions. Nothing was sent.
    #[error(transparent)]
    UnsupportedAction(#[from] UnsupportedAction),

    /// No `Host` header was supplied and the local hostname did not resolve.
    #[error("cannot resolve local address for Host header: {0}")]
    LocalAddress(#[source] io::Error),

    /// The transport failed; the error is passed through unchanged.
    #[error("transport error: {0}")]
    Transport(#[source] E),
}

impl<E> RestError<E> {
    /// The transport's error, if that is where the call failed.
    pub fn into_transport(self) -> Option<E> {
        match self {
            RestError::Transport(err) => Some(err),
            _ => None,
        }
    }
}
