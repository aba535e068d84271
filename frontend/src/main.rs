use std::sync::Arc;

use clap::Parser;
use items_core::ItemsClient;
use items_frontend::{Api, App, Config, Input, Screen, UreqTransport};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(config.default_log_filter());

    info!(api_url = %config.api_url, format = ?config.format, "starting items front-end");
    let transport = UreqTransport::new(config.request_timeout());
    let api = Api::new(ItemsClient::new(&config.api_url), Arc::new(transport));
    let app = App::new(api, Screen::stdout(config.format).into_shared());
    let input = Input::stdin()?;

    tokio::select! {
        () = app.run(input, std::io::stderr(), config.refresh_interval()) => {}
        result = tokio::signal::ctrl_c() => {
            result?;
            info!("interrupted");
        }
    }
    Ok(())
}

/// Logs go to stderr so they never interleave with rendered output.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
