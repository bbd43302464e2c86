// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Third-party manifests fetched after synthesis
pub mod manifests {
    /// Upstream Headlamp dashboard manifest
    pub const HEADLAMP_URL: &str =
        "https://raw.githubusercontent.com/kubernetes-sigs/headlamp/main/kubernetes-headlamp.yaml";
    /// File name of the downloaded Headlamp manifest inside the output directory
    pub const HEADLAMP_FILE_NAME: &str = "headlamp-deployment.yaml";
}

/// Output layout of synthesized charts
pub mod output {
    pub const DEFAULT_DIR: &str = "dist";
    /// Appended to the chart id when the chart sets no explicit file name
    pub const CHART_FILE_SUFFIX: &str = ".k8s.yaml";
    pub const KUSTOMIZATION_FILE: &str = "kustomization.yaml";
}

/// Label keys shared by the chart builders
pub mod labels {
    pub const APP: &str = "app";
}

pub const KUSTOMIZE_API_VERSION: &str = "kustomize.config.k8s.io/v1beta1";
pub const KUSTOMIZATION_KIND: &str = "Kustomization";
