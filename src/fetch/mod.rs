// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Download of third-party manifests placed alongside the synthesized charts.

pub mod manifest;

pub use manifest::DownloadTarget;
