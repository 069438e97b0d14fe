//! Dispatch of console REST calls.
//!
//! # Design
//! `RestClient` holds its collaborators (transport, FQDN provider, ambient
//! state) and a `ResolverConfig`, and nothing else: every call re-reads the
//! environment and filesystem, resolves its own policy and invokes the
//! transport exactly once. Responses and transport errors are passed through
//! untouched; there is no retry and no status inspection.
//!
//! The two entry points differ only in how the verification policy is
//! chosen before the shared `dispatch` step. The verb is checked first, so an
//! unsupported verb fails before any ambient state is read.

use tracing::debug;

use crate::action::Verb;
use crate::ambient::{Ambient, SystemAmbient};
use crate::cert;
use crate::config::ResolverConfig;
use crate::error::RestError;
use crate::headers::{self, HeaderContext};
use crate::proxy;
use crate::transport::{Transport, TransportRequest};
use crate::types::{InboundRequest, RestCall, Verify};
use crate::url::{console_url, FqdnProvider};

/// REST facade for the console.
#[derive(Debug, Clone)]
pub struct RestClient<T, F, A = SystemAmbient> {
    transport: T,
    fqdn: F,
    ambient: A,
    config: ResolverConfig,
}

impl<T, F> RestClient<T, F> {
    /// Client reading the real process environment.
    pub fn new(transport: T, fqdn: F) -> Self {
        Self {
            transport,
            fqdn,
            ambient: SystemAmbient,
            config: ResolverConfig::default(),
        }
    }
}

impl<T, F, A> RestClient<T, F, A> {
    pub fn with_ambient<B>(self, ambient: B) -> RestClient<T, F, B> {
        RestClient {
            transport: self.transport,
            fqdn: self.fqdn,
            ambient,
            config: self.config,
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

impl<T, F, A> RestClient<T, F, A>
where
    T: Transport,
    F: FqdnProvider,
    A: Ambient,
{
    /// Call the console from inside a console-hosted process.
    ///
    /// `inbound` is the request currently being served, if any; its
    /// `QRadarCSRF` and `SEC` cookies are forwarded.
    pub fn live_rest(
        &self,
        call: RestCall,
        inbound: Option<&InboundRequest>,
    ) -> Result<T::Response, RestError<T::Error>> {
        let verb: Verb = call.verb.parse()?;
        let verify = cert::resolve_live(call.verify.clone(), &self.ambient, &self.config);
        self.dispatch(verb, call, verify, inbound)
    }

    /// Call the console from outside it, e.g. from developer tooling.
    pub fn sdk_rest(&self, call: RestCall) -> Result<T::Response, RestError<T::Error>> {
        let verb: Verb = call.verb.parse()?;
        let verify = cert::resolve_detached(call.verify.clone());
        self.dispatch(verb, call, verify, None)
    }

    fn dispatch(
        &self,
        verb: Verb,
        call: RestCall,
        verify: Verify,
        inbound: Option<&InboundRequest>,
    ) -> Result<T::Response, RestError<T::Error>> {
        let url = console_url(&self.fqdn.console_fqdn(), &call.path);

        let admin_token = self.ambient.env_var(&self.config.admin_token_var);
        let context = HeaderContext {
            version: call.version.as_deref(),
            inbound,
            admin_token: admin_token.as_deref(),
        };
        let headers = headers::enrich(call.headers, &context, || self.ambient.local_address())
            .map_err(RestError::LocalAddress)?;

        let proxies = proxy::resolve(&self.ambient, &self.config);

        debug!(
            %verb,
            %url,
            ?verify,
            live = inbound.is_some(),
            admin_token = admin_token.is_some(),
            proxied = !proxies.is_empty(),
            "dispatching console request"
        );

        let request = TransportRequest {
            url,
            headers,
            data: call.data,
            params: call.params,
            json: call.json,
            verify,
            timeout: call.timeout,
            proxies,
        };
        verb.invoke(&self.transport, request)
            .map_err(RestError::Transport)
    }
}
