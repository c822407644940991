use std::fmt;
use std::net::IpAddr;

use anyhow::Result;
use tracing::debug;

use crate::discovery::{self, Discovery};
use crate::util::{lookup_host_ips, split_host_port};

/// Port assumed when the input carried none and discovery did not
/// produce one.
pub const DEFAULT_PORT: &str = "2289";

/// A directly connectable address. `port` is empty when the input never
/// carried one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub host: String,
    pub port: String,
}

impl fmt::Display for ResolvedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Run the resolution chain: IP literals pass through untouched, a bare
/// hostname consults the metadata endpoint first, and everything else
/// lands on forward DNS taking the first candidate.
pub async fn resolve(raw: &str) -> Result<ResolvedAddress> {
    let (mut host, mut port) = split_host_port(raw)?;

    if host.parse::<IpAddr>().is_ok() {
        debug!("{} is an IP literal, passing through", host);
        return Ok(ResolvedAddress { host, port });
    }

    // A hostname without a port consults the metadata endpoint before
    // DNS. With an explicit port, discovery is skipped entirely.
    if port.is_empty() {
        match discovery::query(&host).await? {
            Discovery::Unsupported => {
                debug!("{} has no server record, falling back to DNS", host);
            }
            Discovery::Advertised(server) => {
                debug!("{} advertises server {}", host, server);
                // The advertised name is not substituted; the original
                // input stays authoritative for the rest of the chain.
                (host, port) = split_host_port(raw)?;
                if port.is_empty() {
                    port = DEFAULT_PORT.to_string();
                }
                if host.parse::<IpAddr>().is_ok() {
                    return Ok(ResolvedAddress { host, port });
                }
            }
        }
        if port.is_empty() {
            port = DEFAULT_PORT.to_string();
        }
    }

    let ips = lookup_host_ips(&host).await?;
    let ip = ips[0];
    debug!("{} resolved to {} ({} candidates)", host, ip, ips.len());

    Ok(ResolvedAddress {
        host: ip.to_string(),
        port,
    })
}
