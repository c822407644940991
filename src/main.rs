mod discovery;
mod resolver;
mod util;

use anyhow::Context;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the resolved address.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("harmony_resolve=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let raw = std::env::args()
        .nth(1)
        .context("usage: harmony-resolve <host[:port]>")?;

    debug!("resolving {}", raw);
    let resolved = resolver::resolve(&raw).await?;

    println!("resolved address is: {}", resolved);
    Ok(())
}
