//! Call-level value types.
//!
//! # Design
//! Everything here is transient and owned by a single call. `Verify` mirrors
//! the shape callers already use for TLS verification (a flag or a bundle
//! path) so it deserializes from `true`, `false` or a string unchanged.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Header name → value. Names are kept exactly as supplied.
pub type Headers = BTreeMap<String, String>;

/// TLS verification policy handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Verify {
    /// `true` trusts the transport's default roots, `false` disables
    /// verification.
    Flag(bool),
    /// Path to a PEM CA bundle.
    Bundle(String),
}

impl Verify {
    pub const DISABLED: Verify = Verify::Flag(false);
    pub const SYSTEM: Verify = Verify::Flag(true);

    /// Whether the caller named an explicit bundle.
    pub fn is_path(&self) -> bool {
        matches!(self, Verify::Bundle(_))
    }

    pub fn bundle(path: impl Into<String>) -> Self {
        Verify::Bundle(path.into())
    }
}

impl Default for Verify {
    fn default() -> Self {
        Verify::SYSTEM
    }
}

impl From<bool> for Verify {
    fn from(flag: bool) -> Self {
        Verify::Flag(flag)
    }
}

impl From<&str> for Verify {
    fn from(path: &str) -> Self {
        Verify::Bundle(path.to_string())
    }
}

impl From<String> for Verify {
    fn from(path: String) -> Self {
        Verify::Bundle(path)
    }
}

/// One REST call as the application describes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestCall {
    /// `GET`, `PUT`, `POST` or `DELETE` in any case.
    pub verb: String,
    /// Path relative to the console root, without a leading slash.
    pub path: String,
    pub version: Option<String>,
    pub headers: Option<Headers>,
    /// Raw request body.
    pub data: Option<String>,
    pub params: Vec<(String, String)>,
    /// Structured request body.
    pub json: Option<serde_json::Value>,
    pub verify: Verify,
    pub timeout: Option<Duration>,
}

impl RestCall {
    pub fn new(verb: &str, path: &str) -> Self {
        Self {
            verb: verb.to_string(),
            path: path.to_string(),
            ..Self::default()
        }
    }

    pub fn version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn param(mut self, name: &str, value: &str) -> Self {
        self.params.push((name.to_string(), value.to_string()));
        self
    }

    pub fn json(mut self, json: serde_json::Value) -> Self {
        self.json = Some(json);
        self
    }

    pub fn verify(mut self, verify: impl Into<Verify>) -> Self {
        self.verify = verify.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// The inbound request a live call is made on behalf of.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundRequest {
    pub cookies: BTreeMap<String, String>,
}

impl InboundRequest {
    pub fn new(cookies: BTreeMap<String, String>) -> Self {
        Self { cookies }
    }

    /// Parse a raw `Cookie` header (`a=b; c="d"`).
    ///
    /// Pairs without `=` are skipped. When a name repeats, the first value
    /// wins.
    pub fn from_cookie_header(header: &str) -> Self {
        let mut cookies = BTreeMap::new();
        for pair in header.split(';') {
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            cookies
                .entry(name.to_string())
                .or_insert_with(|| value.to_string());
        }
        Self { cookies }
    }

    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }
}
