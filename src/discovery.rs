use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

/// Well-known path a host may serve to advertise its canonical server.
const WELL_KNOWN_PATH: &str = "/_harmony/server";

/// Body of a metadata response.
#[derive(Debug, Deserialize)]
pub struct ServerRecord {
    #[serde(rename = "h.server")]
    pub server: String,
}

/// Outcome of querying the metadata endpoint. Transport failures and
/// unreadable bodies are errors, not outcomes.
#[derive(Debug)]
pub enum Discovery {
    /// The host answered 404: it does not serve a record.
    Unsupported,
    /// The host answered with a record advertising a server name.
    Advertised(String),
}

pub async fn query(host: &str) -> Result<Discovery> {
    let url = format!("https://{}{}", host, WELL_KNOWN_PATH);

    let client = reqwest::Client::builder().build()?;
    let resp = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("error GET-ing {}", url))?;

    if resp.status() == StatusCode::NOT_FOUND {
        debug!("{} does not serve a server record", host);
        return Ok(Discovery::Unsupported);
    }

    // Any non-404 answer is expected to carry a record.
    let body = resp.bytes().await.context("error reading body")?;
    let record: ServerRecord = serde_json::from_slice(&body).context("error reading JSON")?;

    Ok(Discovery::Advertised(record.server))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_reads_dotted_key() {
        let rec: ServerRecord =
            serde_json::from_str(r#"{"h.server": "hub.example.net"}"#).expect("valid record");
        assert_eq!(rec.server, "hub.example.net");
    }

    #[test]
    fn record_ignores_extra_fields() {
        let rec: ServerRecord =
            serde_json::from_str(r#"{"h.server": "hub", "ttl": 60}"#).expect("valid record");
        assert_eq!(rec.server, "hub");
    }

    #[test]
    fn record_requires_the_dotted_key() {
        serde_json::from_str::<ServerRecord>(r#"{"server": "hub"}"#).expect_err("must fail");
    }
}
