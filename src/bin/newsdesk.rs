use std::time::Duration;

use newsdesk_rs::{AggregateBuilder, DeskClient, TextRenderer, render_result};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug,newsdesk_rs=trace shows each fetch and the bucket sizes.
    #[cfg(feature = "tracing-subscriber")]
    {
        use tracing_subscriber::EnvFilter;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }

    let client = DeskClient::builder()
        .timeout(Duration::from_secs(10))
        .connect_timeout(Duration::from_secs(5))
        .build()?;

    let result = AggregateBuilder::new(&client).run().await;

    let mut out = TextRenderer::new(std::io::stdout().lock());
    render_result(&mut out, &result)?;
    Ok(())
}
