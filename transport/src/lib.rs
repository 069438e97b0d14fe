//! Blocking `Transport` for `qradar-rest` built on `ureq`.
//!
//! # Design
//! A fresh agent is configured for every request, because verification
//! policy, proxy and timeout are resolved per call. Responses come back as
//! plain data (`HttpResponse`) with the status left uninterpreted: a 4xx or
//! 5xx is a successful transport round-trip.
//!
//! Body precedence follows the facade's contract: a raw `data` body is sent
//! as-is; otherwise `json` is serialized and sent as `application/json`
//! unless the caller set `Content-Type` already.

pub mod error;

use std::sync::Arc;

use qradar_rest::{Transport, TransportRequest, Verb, Verify};
use tracing::debug;
use ureq::tls::{parse_pem, PemItem, RootCerts, TlsConfig};
use ureq::{Agent, Proxy, RequestBuilder};

pub use error::TransportError;

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// `Transport` executing requests with `ureq`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UreqTransport;

impl UreqTransport {
    pub fn new() -> Self {
        Self
    }

    fn execute(&self, verb: Verb, request: TransportRequest) -> Result<HttpResponse, TransportError> {
        let agent = agent_for(&request)?;
        let payload = payload(&request)?;
        let url = request.url.as_str();
        debug!(%verb, url, body = payload.is_some(), "sending request");

        let response = match verb {
            Verb::Get => call_or_send(prepare(agent.get(url), &request), payload)?,
            Verb::Delete => call_or_send(prepare(agent.delete(url), &request), payload)?,
            Verb::Post => send_or_empty(prepare(agent.post(url), &request), payload)?,
            Verb::Put => send_or_empty(prepare(agent.put(url), &request), payload)?,
        };
        into_response(response)
    }
}

impl Transport for UreqTransport {
    type Response = HttpResponse;
    type Error = TransportError;

    fn get(&self, request: TransportRequest) -> Result<HttpResponse, TransportError> {
        self.execute(Verb::Get, request)
    }

    fn put(&self, request: TransportRequest) -> Result<HttpResponse, TransportError> {
        self.execute(Verb::Put, request)
    }

    fn post(&self, request: TransportRequest) -> Result<HttpResponse, TransportError> {
        self.execute(Verb::Post, request)
    }

    fn delete(&self, request: TransportRequest) -> Result<HttpResponse, TransportError> {
        self.execute(Verb::Delete, request)
    }
}

/// Body bytes plus the content type to declare, if any.
struct Payload {
    content_type: Option<&'static str>,
    bytes: Vec<u8>,
}

fn payload(request: &TransportRequest) -> Result<Option<Payload>, TransportError> {
    if let Some(data) = &request.data {
        return Ok(Some(Payload {
            content_type: None,
            bytes: data.as_bytes().to_vec(),
        }));
    }
    let Some(json) = &request.json else {
        return Ok(None);
    };
    let has_content_type = request
        .headers
        .keys()
        .any(|name| name.eq_ignore_ascii_case("content-type"));
    Ok(Some(Payload {
        content_type: (!has_content_type).then_some("application/json"),
        bytes: serde_json::to_vec(json)?,
    }))
}

fn agent_for(request: &TransportRequest) -> Result<Agent, TransportError> {
    let mut config = Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(request.timeout)
        .tls_config(tls_config(&request.verify)?);
    if let Some(proxy) = &request.proxies.https {
        config = config.proxy(Some(Proxy::new(proxy)?));
    }
    Ok(config.build().new_agent())
}

fn tls_config(verify: &Verify) -> Result<TlsConfig, TransportError> {
    let builder = TlsConfig::builder();
    let builder = match verify {
        Verify::Flag(true) => builder,
        Verify::Flag(false) => builder.disable_verification(true),
        Verify::Bundle(path) => builder.root_certs(load_bundle(path)?),
    };
    Ok(builder.build())
}

fn load_bundle(path: &str) -> Result<RootCerts, TransportError> {
    let pem = std::fs::read(path).map_err(|source| TransportError::Bundle {
        path: path.to_string(),
        source,
    })?;
    let certs = parse_pem(&pem)
        .filter_map(|item| match item {
            Ok(PemItem::Certificate(cert)) => Some(Ok(cert.to_owned())),
            Ok(_) => None,
            Err(err) => Some(Err(err)),
        })
        .collect::<Result<Vec<_>, _>>()?;
    if certs.is_empty() {
        return Err(TransportError::EmptyBundle(path.to_string()));
    }
    Ok(RootCerts::Specific(Arc::new(certs)))
}

fn prepare<B>(mut builder: RequestBuilder<B>, request: &TransportRequest) -> RequestBuilder<B> {
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    for (name, value) in &request.params {
        builder = builder.query(name.as_str(), value.as_str());
    }
    builder
}

fn send(
    builder: RequestBuilder<ureq::typestate::WithBody>,
    payload: Payload,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    match payload.content_type {
        Some(content_type) => builder.content_type(content_type).send(&payload.bytes[..]),
        None => builder.send(&payload.bytes[..]),
    }
}

/// GET and DELETE carry a body only when the caller supplied one.
fn call_or_send(
    builder: RequestBuilder<ureq::typestate::WithoutBody>,
    payload: Option<Payload>,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    match payload {
        Some(payload) => send(builder.force_send_body(), payload),
        None => builder.call(),
    }
}

fn send_or_empty(
    builder: RequestBuilder<ureq::typestate::WithBody>,
    payload: Option<Payload>,
) -> Result<ureq::http::Response<ureq::Body>, ureq::Error> {
    match payload {
        Some(payload) => send(builder, payload),
        None => builder.send_empty(),
    }
}

fn into_response(mut response: ureq::http::Response<ureq::Body>) -> Result<HttpResponse, TransportError> {
    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| Some((name.as_str().to_string(), value.to_str().ok()?.to_string())))
        .collect();
    let body = response.body_mut().read_to_string()?;
    Ok(HttpResponse { status, headers, body })
}
