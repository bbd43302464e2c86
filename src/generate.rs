// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! One generator run: compose the charts, synthesize them, fetch the Headlamp manifest.

use crate::charts::{dashboard, kustomization, nginx};
use crate::config::Config;
use crate::constants::manifests;
use crate::fetch::DownloadTarget;
use crate::synth::synthesize;
use crate::types::{App, ChartProps};
use anyhow::{Context, Result};
use tracing::{error, info};

/// Compose every chart in the order it is synthesized
pub fn compose(config: &Config) -> App {
    let mut app = App::new(&config.output_dir);
    nginx::build(&mut app, "nginx", ChartProps::default());
    dashboard::build(&mut app, "monitoring-dashboard", ChartProps::default());
    kustomization::build(&mut app, "kustomization", &[manifests::HEADLAMP_FILE_NAME]);
    app
}

/// Synthesis errors always fail the run. A failed download only does when
/// `config.fetch_required` is set; otherwise it is logged and the run succeeds.
pub async fn run(config: &Config, client: &reqwest::Client) -> Result<()> {
    let app = compose(config);

    let written = synthesize(&app).context("Failed to synthesize charts")?;
    for path in &written {
        info!("Wrote {}", path.display());
    }

    let target = DownloadTarget::new(
        config.manifest_url.clone(),
        config.output_dir.join(manifests::HEADLAMP_FILE_NAME),
    );
    match target.fetch(client).await {
        Ok(()) => info!("Headlamp manifest saved to {}", target.dest.display()),
        Err(e) if config.fetch_required => {
            return Err(e).context("Failed to download Headlamp manifest");
        }
        Err(e) => error!("Error downloading Headlamp manifest: {}", e),
    }

    Ok(())
}
