//! Console URL construction.

/// Source of the console host name.
pub trait FqdnProvider {
    fn console_fqdn(&self) -> String;
}

impl FqdnProvider for String {
    fn console_fqdn(&self) -> String {
        self.clone()
    }
}

impl FqdnProvider for &str {
    fn console_fqdn(&self) -> String {
        (*self).to_string()
    }
}

impl<F: Fn() -> String> FqdnProvider for F {
    fn console_fqdn(&self) -> String {
        self()
    }
}

/// `https://<host>/<path>`. The path is used verbatim.
pub fn console_url(host: &str, path: &str) -> String {
    format!("https://{host}/{path}")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn joins_host_and_path() {
        assert_eq!(
            console_url("console.example.com", "api/config/deployment/hosts"),
            "https://console.example.com/api/config/deployment/hosts"
        );
    }

    #[test]
    fn path_is_not_normalized() {
        assert_eq!(console_url("h", "/api//x?y=1"), "https://h//api//x?y=1");
        assert_eq!(console_url("h", "a b"), "https://h/a b");
    }

    #[test]
    fn providers() {
        assert_eq!("console".console_fqdn(), "console");
        assert_eq!(String::from("10.0.0.1").console_fqdn(), "10.0.0.1");
        let from_closure = || "dyn.example".to_string();
        assert_eq!(from_closure.console_fqdn(), "dyn.example");
    }

    proptest! {
        #[test]
        fn url_is_exact_concatenation(host in "[a-z0-9.-]{1,40}", path in "[ -~]{1,80}") {
            let url = console_url(&host, &path);
            prop_assert_eq!(url, format!("https://{}/{}", host, path));
        }
    }
}
