//! Stand-alone mock console for manual runs against `UreqTransport`.

use std::io::{Error, ErrorKind};
use std::net::SocketAddr;

use tokio::net::TcpListener;

const DEFAULT_ADDR: &str = "127.0.0.1:8443";

#[tokio::main]
async fn main() -> Result<(), Error> {
    let addr: SocketAddr = std::env::var("MOCK_CONSOLE_ADDR")
        .as_deref()
        .unwrap_or(DEFAULT_ADDR)
        .parse()
        .map_err(|err| Error::new(ErrorKind::InvalidInput, err))?;
    let listener = TcpListener::bind(addr).await?;
    println!("mock console on http://{addr} (echo on every path, versions at /api/help/versions)");
    mock_console::run(listener).await
}
