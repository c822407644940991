// Helper functions: host/port splitting and forward DNS lookup.

use std::net::IpAddr;

use anyhow::{Context, Result, bail};
use trust_dns_resolver::TokioAsyncResolver;

/// Split an address string on its last colon into `(host, port)`, where
/// an empty port means the input carried none. An unbracketed value
/// with more than one colon is an IPv6 literal, not a host:port pair.
/// The port text is passed through without numeric validation.
pub fn split_host_port(s: &str) -> Result<(String, String)> {
    if let Some(rest) = s.strip_prefix('[') {
        let Some((host, tail)) = rest.split_once(']') else {
            bail!("address {} has an unclosed '['", s);
        };
        let port = match tail.strip_prefix(':') {
            Some(p) => p,
            None if tail.is_empty() => "",
            None => bail!("address {} has trailing characters after ']'", s),
        };
        return Ok((host.to_string(), port.to_string()));
    }

    match s.rsplit_once(':') {
        Some((head, _)) if head.contains(':') => Ok((s.to_string(), String::new())),
        Some((head, tail)) => Ok((head.to_string(), tail.to_string())),
        None => Ok((s.to_string(), String::new())),
    }
}

/// Forward-lookup a hostname via the system resolver configuration.
/// Candidates come back in resolver order; no preference is applied.
pub async fn lookup_host_ips(host: &str) -> Result<Vec<IpAddr>> {
    let resolver = TokioAsyncResolver::tokio_from_system_conf()
        .context("failed to read system resolver configuration")?;

    let lookup = resolver
        .lookup_ip(host)
        .await
        .with_context(|| format!("failed to resolve IP for {}", host))?;

    let ips: Vec<IpAddr> = lookup.iter().collect();
    if ips.is_empty() {
        bail!("no IP addresses found for {}", host);
    }
    Ok(ips)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_hostname_has_no_port() {
        let (host, port) = split_host_port("example.com").expect("splits");
        assert_eq!(host, "example.com");
        assert_eq!(port, "");
    }

    #[test]
    fn host_and_port_split_on_last_colon() {
        let (host, port) = split_host_port("example.com:443").expect("splits");
        assert_eq!(host, "example.com");
        assert_eq!(port, "443");
    }

    #[test]
    fn trailing_colon_means_empty_port() {
        let (host, port) = split_host_port("example.com:").expect("splits");
        assert_eq!(host, "example.com");
        assert_eq!(port, "");
    }

    #[test]
    fn port_text_is_not_validated() {
        let (host, port) = split_host_port("example.com:https").expect("splits");
        assert_eq!(host, "example.com");
        assert_eq!(port, "https");
    }

    #[test]
    fn bare_ipv6_literal_is_all_host() {
        let (host, port) = split_host_port("::1").expect("splits");
        assert_eq!(host, "::1");
        assert_eq!(port, "");

        let (host, port) = split_host_port("fe80::aa:1").expect("splits");
        assert_eq!(host, "fe80::aa:1");
        assert_eq!(port, "");
    }

    #[test]
    fn bracketed_ipv6_strips_brackets() {
        let (host, port) = split_host_port("[2001:db8::1]:443").expect("splits");
        assert_eq!(host, "2001:db8::1");
        assert_eq!(port, "443");

        let (host, port) = split_host_port("[::1]").expect("splits");
        assert_eq!(host, "::1");
        assert_eq!(port, "");
    }

    #[test]
    fn mismatched_brackets_fail() {
        split_host_port("[::1:443").expect_err("unclosed bracket");
        split_host_port("[::1]443").expect_err("junk after bracket");
    }
}
