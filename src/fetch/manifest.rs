// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::Result;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs::{DirBuilder, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument};
use url::Url;

/// A manifest to download and the file it is written to
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadTarget {
    pub url: Url,
    pub dest: PathBuf,
}

impl DownloadTarget {
    pub fn new(url: Url, dest: impl Into<PathBuf>) -> Self {
        Self {
            url,
            dest: dest.into(),
        }
    }

    /// Download the manifest with a single GET and stream the body into `dest`.
    ///
    /// Missing parent directories are created first. The response status is not
    /// checked and nothing is retried. The destination is only created once a
    /// response has arrived, so a transport error leaves no file behind. An error
    /// while streaming leaves whatever was written so far, possibly an empty file.
    #[instrument(skip(self, client), fields(url = %self.url, dest = %self.dest.display()))]
    pub async fn fetch(&self, client: &reqwest::Client) -> Result<()> {
        if let Some(parent) = self.dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_parent_dirs(parent).await?;
        }

        let response = client.get(self.url.clone()).send().await?;
        debug!("Received {} for {}", response.status(), self.url);

        let mut file = File::create(&self.dest).await?;
        let mut body = response.bytes_stream();
        let mut written: u64 = 0;
        while let Some(chunk) = body.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        info!("Saved {} bytes to {}", written, self.dest.display());
        Ok(())
    }
}

async fn create_parent_dirs(path: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o755);
    builder.create(path).await?;
    Ok(())
}
