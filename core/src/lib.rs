//! REST facade for calls from console apps to the console API.
//!
//! # Overview
//! Applications describe a call as a `RestCall` (verb, relative path, body,
//! headers, verification preference) and hand it to `RestClient`, which
//! resolves everything the console expects and invokes a `Transport` once:
//!
//! - the verb is one of GET/PUT/POST/DELETE, or the call is rejected;
//! - the URL is `https://<console fqdn>/<path>`;
//! - headers gain `Version`, `Host`, the inbound `QRadarCSRF`/`SEC` cookies
//!   and the `SEC_ADMIN_TOKEN` override;
//! - the TLS policy comes from the console certificate or PKI mount (live)
//!   or the caller's explicit bundle (detached);
//! - `QRADAR_REST_PROXY` routes HTTPS through a proxy.
//!
//! # Design
//! - The core performs no network I/O. `Transport` executes the request and
//!   its response is returned as-is.
//! - Environment, filesystem and hostname lookups go through `Ambient`, read
//!   fresh on every call.
//! - Live versus detached is a choice of entry point (`live_rest` /
//!   `sdk_rest`); the inbound request is an explicit argument.

pub mod action;
pub mod ambient;
pub mod cert;
pub mod client;
pub mod config;
pub mod error;
pub mod headers;
pub mod proxy;
pub mod transport;
pub mod types;
pub mod url;

pub use action::Verb;
pub use ambient::{Ambient, MemoryAmbient, SystemAmbient};
pub use client::RestClient;
pub use config::ResolverConfig;
pub use error::{RestError, UnsupportedAction};
pub use proxy::Proxies;
pub use transport::{Transport, TransportRequest};
pub use types::{Headers, InboundRequest, RestCall, Verify};
pub use url::FqdnProvider;
