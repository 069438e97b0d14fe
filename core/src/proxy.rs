//! HTTPS proxy selection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ambient::Ambient;
use crate::config::ResolverConfig;

/// Proxy routing for one call. Only HTTPS traffic is ever proxied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proxies {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub https: Option<String>,
}

impl Proxies {
    pub fn https(url: impl Into<String>) -> Self {
        Self {
            https: Some(url.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.https.is_none()
    }

    /// Scheme → proxy URL, e.g. `{"https": "http://proxy:8080"}`.
    pub fn as_map(&self) -> BTreeMap<&'static str, &str> {
        self.https
            .as_deref()
            .map(|url| ("https", url))
            .into_iter()
            .collect()
    }
}

/// Read the proxy variable. Unset means a direct connection.
pub fn resolve<A: Ambient + ?Sized>(ambient: &A, config: &ResolverConfig) -> Proxies {
    Proxies {
        https: ambient.env_var(&config.proxy_var),
    }
}
