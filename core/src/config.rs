//! Well-known names and locations shared with the console.
//!
//! # Design
//! Header and cookie names are part of the console protocol and stay fixed.
//! Environment variable names and filesystem paths are collected in
//! `ResolverConfig` so a deployment (or a test) can relocate them; its
//! `Default` is the set the console actually uses.

/// Cookie and header carrying the console CSRF token.
pub const QRADAR_CSRF: &str = "QRadarCSRF";

/// Cookie and header carrying the console session/security token.
pub const SEC_HEADER: &str = "SEC";

/// Header carrying the requested API version.
pub const VERSION_HEADER: &str = "Version";

/// Header identifying the calling machine.
pub const HOST_HEADER: &str = "Host";

/// Environment variable holding an admin token that overrides `SEC`.
pub const SEC_ADMIN_TOKEN: &str = "SEC_ADMIN_TOKEN";

/// Environment variable naming the HTTPS proxy.
pub const QRADAR_REST_PROXY: &str = "QRADAR_REST_PROXY";

pub const CONSOLE_CERT_PATH: &str = "/store/consolecert.pem";
pub const MOUNT_TABLE_PATH: &str = "/proc/mounts";
pub const PKI_MOUNT_POINT: &str = "/etc/qradar_pki";
pub const CA_BUNDLE_PATH: &str = "/etc/pki/tls/certs/ca-bundle.crt";

/// Locations the resolvers probe on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub admin_token_var: String,
    pub proxy_var: String,
    /// Certificate bundle trusted unconditionally in the live context.
    pub console_cert: String,
    pub mount_table: String,
    pub pki_mount_point: String,
    /// Bundle used when `pki_mount_point` is mounted.
    pub ca_bundle: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            admin_token_var: SEC_ADMIN_TOKEN.to_string(),
            proxy_var: QRADAR_REST_PROXY.to_string(),
            console_cert: CONSOLE_CERT_PATH.to_string(),
            mount_table: MOUNT_TABLE_PATH.to_string(),
            pki_mount_point: PKI_MOUNT_POINT.to_string(),
            ca_bundle: CA_BUNDLE_PATH.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_console_layout() {
        let config = ResolverConfig::default();
        assert_eq!(config.admin_token_var, "SEC_ADMIN_TOKEN");
        assert_eq!(config.proxy_var, "QRADAR_REST_PROXY");
        assert_eq!(config.console_cert, "/store/consolecert.pem");
        assert_eq!(config.mount_table, "/proc/mounts");
        assert_eq!(config.pki_mount_point, "/etc/qradar_pki");
        assert_eq!(config.ca_bundle, "/etc/pki/tls/certs/ca-bundle.crt");
    }
}
