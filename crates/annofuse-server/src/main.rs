//! Annofuse Server - Main entry point

use annofuse_common::logging::{init_logging, LogConfig};
use anyhow::Result;
use tracing::info;

use annofuse_server::{api, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with configuration from environment
    let log_config = LogConfig::default()
        .with_file_prefix("annofuse-server")
        .with_filter_directives("annofuse_server=debug,tower_http=debug");

    // Merge with environment variables (they take precedence)
    let log_config = LogConfig::from_env().unwrap_or(log_config);

    init_logging(&log_config)?;

    info!("Starting annofuse server");

    // Load configuration
    let config = Config::load()?;
    info!(
        "Configuration loaded - server will bind to {}:{}",
        config.server.host, config.server.port
    );

    api::serve(config).await
}
