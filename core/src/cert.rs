//! TLS verification policy resolution.
//!
//! # Design
//! A live call runs on the console itself, so local evidence decides: the
//! console certificate if present, else the system CA bundle when the PKI
//! volume is mounted, else no verification. A detached call has no such
//! evidence and only verifies against a bundle the caller names explicitly.

use tracing::{debug, warn};

use crate::ambient::Ambient;
use crate::config::ResolverConfig;
use crate::types::Verify;

/// Policy for a call made from inside the console.
///
/// The console certificate takes precedence over anything the caller passed.
pub fn resolve_live<A: Ambient + ?Sized>(requested: Verify, ambient: &A, config: &ResolverConfig) -> Verify {
    if ambient.file_exists(&config.console_cert) {
        debug!(bundle = %config.console_cert, "using console certificate");
        return Verify::Bundle(config.console_cert.clone());
    }
    if requested.is_path() {
        return requested;
    }
    if pki_mounted(ambient, config) {
        debug!(bundle = %config.ca_bundle, "pki volume mounted, using system bundle");
        Verify::Bundle(config.ca_bundle.clone())
    } else {
        Verify::DISABLED
    }
}

/// Policy for a call made outside the console.
///
/// Without an explicit bundle, verification is disabled; there is no
/// fallback probing here.
pub fn resolve_detached(requested: Verify) -> Verify {
    if requested.is_path() {
        requested
    } else {
        Verify::DISABLED
    }
}

fn pki_mounted<A: Ambient + ?Sized>(ambient: &A, config: &ResolverConfig) -> bool {
    let Some(table) = ambient.read_mounts(&config.mount_table) else {
        warn!(path = %config.mount_table, "mount table unreadable, treating pki volume as absent");
        return false;
    };
    table.contains(config.pki_mount_point.as_str())
}
