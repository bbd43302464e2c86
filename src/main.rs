// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use manifestor::config::Config;
use manifestor::generate;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing, defaulting to info when RUST_LOG is unset
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: output_dir={}, manifest_url={}, fetch_required={}",
        config.output_dir.display(),
        config.manifest_url,
        config.fetch_required
    );

    generate::run(&config, &reqwest::Client::new()).await
}
