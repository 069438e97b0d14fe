//! Outbound header enrichment.
//!
//! # Design
//! The outbound header set is built by applying an ordered list of rules to
//! the caller's headers. Each rule either always overrides its key or only
//! fills it when absent; later rules win. The sequence is:
//!
//! 1. caller headers
//! 2. `Version` from the call (override)
//! 3. `Host` from the local machine's address (if absent)
//! 4. live calls only: `QRadarCSRF` cookie (override), `SEC` cookie (if absent)
//! 5. `SEC` from the admin token (override)
//!
//! `Host` identifies the caller, not the console. The local address is only
//! looked up when the caller did not supply `Host`.

use std::io;

use crate::config::{HOST_HEADER, QRADAR_CSRF, SEC_HEADER, VERSION_HEADER};
use crate::types::{Headers, InboundRequest};

/// How a rule writes its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Write {
    Override,
    IfAbsent,
}

/// One enrichment step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub name: &'static str,
    pub value: String,
    pub write: Write,
}

impl Rule {
    pub fn always(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            write: Write::Override,
        }
    }

    pub fn if_absent(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            write: Write::IfAbsent,
        }
    }

    fn apply(self, headers: &mut Headers) {
        match self.write {
            Write::Override => {
                headers.insert(self.name.to_string(), self.value);
            }
            Write::IfAbsent => {
                headers.entry(self.name.to_string()).or_insert(self.value);
            }
        }
    }
}

/// What a call knows besides its own headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderContext<'a> {
    pub version: Option<&'a str>,
    /// Present only for live calls serving an inbound request.
    pub inbound: Option<&'a InboundRequest>,
    pub admin_token: Option<&'a str>,
}

/// Apply the enrichment rules to `caller`.
///
/// `local_address` is called at most once, and only when `Host` is missing.
pub fn enrich<F>(caller: Option<Headers>, context: &HeaderContext<'_>, local_address: F) -> io::Result<Headers>
where
    F: FnOnce() -> io::Result<String>,
{
    let mut headers = caller.unwrap_or_default();

    if let Some(version) = context.version {
        Rule::always(VERSION_HEADER, version).apply(&mut headers);
    }

    if !headers.contains_key(HOST_HEADER) {
        Rule::if_absent(HOST_HEADER, local_address()?).apply(&mut headers);
    }

    for rule in cookie_rules(context.inbound) {
        rule.apply(&mut headers);
    }

    if let Some(token) = context.admin_token {
        Rule::always(SEC_HEADER, token).apply(&mut headers);
    }

    Ok(headers)
}

fn cookie_rules(inbound: Option<&InboundRequest>) -> Vec<Rule> {
    let Some(inbound) = inbound else {
        return Vec::new();
    };
    let mut rules = Vec::with_capacity(2);
    if let Some(csrf) = inbound.cookie(QRADAR_CSRF) {
        rules.push(Rule::always(QRADAR_CSRF, csrf));
    }
    if let Some(sec) = inbound.cookie(SEC_HEADER) {
        rules.push(Rule::if_absent(SEC_HEADER, sec));
    }
    rules
}
