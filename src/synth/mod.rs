// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Synthesis: write each registered chart to its own YAML file.

pub mod render;

pub use render::{render_chart, validate_app, validate_chart};

use crate::error::Result;
use crate::types::App;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, instrument};

/// Validate the whole app, then write one file per chart in declaration order.
///
/// Nothing is written when any chart is invalid. Existing files are overwritten.
#[instrument(skip(app), fields(outdir = %app.outdir().display()))]
pub fn synthesize(app: &App) -> Result<Vec<PathBuf>> {
    validate_app(app)?;

    fs::create_dir_all(app.outdir())?;

    let mut written = Vec::with_capacity(app.charts().len());
    for chart in app.charts() {
        let path = app.outdir().join(chart.file_name());
        let yaml = render_chart(chart)?;
        fs::write(&path, yaml)?;
        debug!(
            "Wrote chart {} ({} resources) to {}",
            chart.id(),
            chart.resources().len(),
            path.display()
        );
        written.push(path);
    }

    info!("Synthesized {} charts", written.len());
    Ok(written)
}
