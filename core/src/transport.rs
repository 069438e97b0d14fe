//! The transport boundary.
//!
//! # Design
//! The core never performs I/O itself. It assembles a `TransportRequest` as
//! plain data and hands it to one of the four `Transport` operations; the
//! response type is the transport's own and is returned without inspection.
//! Owned fields keep requests free of lifetimes so they can be recorded or
//! moved across threads by transport implementations.

use std::time::Duration;

use crate::proxy::Proxies;
use crate::types::{Headers, Verify};

/// A fully resolved outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    /// Absolute `https://` URL.
    pub url: String,
    pub headers: Headers,
    /// Raw body. Takes precedence over `json` when both are present.
    pub data: Option<String>,
    pub params: Vec<(String, String)>,
    pub json: Option<serde_json::Value>,
    pub verify: Verify,
    pub timeout: Option<Duration>,
    pub proxies: Proxies,
}

/// Executes HTTP requests. One method per supported verb.
pub trait Transport {
    type Response;
    type Error;

    fn get(&self, request: TransportRequest) -> Result<Self::Response, Self::Error>;
    fn put(&self, request: TransportRequest) -> Result<Self::Response, Self::Error>;
    fn post(&self, request: TransportRequest) -> Result<Self::Response, Self::Error>;
    fn delete(&self, request: TransportRequest) -> Result<Self::Response, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Response = T::Response;
    type Error = T::Error;

    fn get(&self, request: TransportRequest) -> Result<Self::Response, Self::Error> {
        (**self).get(request)
    }

    fn put(&self, request: TransportRequest) -> Result<Self::Response, Self::Error> {
        (**self).put(request)
    }

    fn post(&self, request: TransportRequest) -> Result<Self::Response, Self::Error> {
        (**self).post(request)
    }

    fn delete(&self, request: TransportRequest) -> Result<Self::Response, Self::Error> {
        (**self).delete(request)
    }
}
