//! Access to process-wide state read on every call.
//!
//! # Design
//! Environment variables, the filesystem and the local hostname are global
//! state. The resolvers reach them only through the `Ambient` trait so tests
//! substitute `MemoryAmbient` without touching the real process. Reads that
//! fail are reported as "absent" (`None` / `false`); only the local address
//! lookup can surface an error, because the caller has nothing to fall back
//! on for the `Host` header.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::net::IpAddr;
use std::path::Path;

/// Read-only view of the environment a call runs in.
pub trait Ambient {
    /// Value of an environment variable, `None` when unset or not unicode.
    fn env_var(&self, name: &str) -> Option<String>;

    /// Whether `path` names an existing regular file.
    fn file_exists(&self, path: &str) -> bool;

    /// Contents of the mount table at `path`, `None` when unreadable.
    fn read_mounts(&self, path: &str) -> Option<String>;

    /// Address the local hostname resolves to.
    fn local_address(&self) -> io::Result<String>;
}

/// `Ambient` backed by the running process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAmbient;

impl Ambient for SystemAmbient {
    fn env_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn file_exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn read_mounts(&self, path: &str) -> Option<String> {
        std::fs::read_to_string(path).ok()
    }

    fn local_address(&self) -> io::Result<String> {
        let hostname = dns_lookup::get_hostname()?;
        let addresses = dns_lookup::lookup_host(&hostname)?;
        pick_address(&addresses)
            .map(|ip| ip.to_string())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("no address for {hostname}")))
    }
}

/// Prefer IPv4, the way a `gethostbyname` lookup answers.
fn pick_address(addresses: &[IpAddr]) -> Option<IpAddr> {
    addresses
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addresses.first())
        .copied()
}

/// In-memory `Ambient` for tests and embedders that manage state themselves.
#[derive(Debug, Clone)]
pub struct MemoryAmbient {
    env: BTreeMap<String, String>,
    files: BTreeSet<String>,
    mounts: BTreeMap<String, String>,
    local_address: Option<String>,
}

impl Default for MemoryAmbient {
    fn default() -> Self {
        Self {
            env: BTreeMap::new(),
            files: BTreeSet::new(),
            mounts: BTreeMap::new(),
            local_address: Some("127.0.0.1".to_string()),
        }
    }
}

impl MemoryAmbient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env(mut self, name: &str, value: &str) -> Self {
        self.env.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_file(mut self, path: &str) -> Self {
        self.files.insert(path.to_string());
        self
    }

    /// Make `path` readable as a mount table with the given contents.
    pub fn with_mounts(mut self, path: &str, contents: &str) -> Self {
        self.mounts.insert(path.to_string(), contents.to_string());
        self
    }

    pub fn with_local_address(mut self, address: &str) -> Self {
        self.local_address = Some(address.to_string());
        self
    }

    /// Make `local_address` fail, as on a host whose name does not resolve.
    pub fn without_local_address(mut self) -> Self {
        self.local_address = None;
        self
    }
}

impl Ambient for MemoryAmbient {
    fn env_var(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.contains(path)
    }

    fn read_mounts(&self, path: &str) -> Option<String> {
        self.mounts.get(path).cloned()
    }

    fn local_address(&self) -> io::Result<String> {
        self.local_address
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "local hostname does not resolve"))
    }
}
