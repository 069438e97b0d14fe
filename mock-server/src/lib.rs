use std::collections::BTreeMap;

use axum::{
    extract::Query,
    http::{HeaderMap, Method, StatusCode, Uri},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Header a client sets to choose the status the echo answers with.
pub const STATUS_HEADER: &str = "x-mock-status";

/// What the console received, sent back as the response body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub path: String,
    pub query: BTreeMap<String, String>,
    /// Header names are lowercase, as received on the wire.
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

#[derive(Serialize, Deserialize)]
pub struct Versions {
    pub versions: Vec<String>,
}

pub fn app() -> Router {
    Router::new()
        .route("/api/help/versions", get(versions))
        .fallback(echo)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn versions() -> Json<Versions> {
    Json(Versions {
        versions: vec!["14.0".to_string(), "15.0".to_string()],
    })
}

async fn echo(
    method: Method,
    uri: Uri,
    Query(query): Query<BTreeMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, Json<Echo>) {
    let status = headers
        .get(STATUS_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u16>().ok())
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::OK);
    let headers = headers
        .iter()
        .filter_map(|(name, value)| Some((name.as_str().to_string(), value.to_str().ok()?.to_string())))
        .collect();
    let echo = Echo {
        method: method.to_string(),
        path: uri.path().to_string(),
        query,
        headers,
        body,
    };
    (status, Json(echo))
}
