// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{manifests, output};
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use url::Url;

/// Generator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory receiving the synthesized charts and the downloaded manifest
    pub output_dir: PathBuf,
    pub manifest_url: Url,
    /// When set, a failed manifest download fails the whole run
    pub fetch_required: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_dir = lookup("MANIFESTOR_OUTPUT_DIR")
            .filter(|dir| !dir.is_empty())
            .unwrap_or_else(|| output::DEFAULT_DIR.to_string());

        let raw_url = lookup("MANIFESTOR_MANIFEST_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| manifests::HEADLAMP_URL.to_string());
        let manifest_url = Url::parse(&raw_url)
            .with_context(|| format!("MANIFESTOR_MANIFEST_URL is not a valid URL: {}", raw_url))?;

        let fetch_required: bool = lookup("MANIFESTOR_FETCH_REQUIRED")
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);

        Ok(Config {
            output_dir: PathBuf::from(output_dir),
            manifest_url,
            fetch_required,
        })
    }
}
