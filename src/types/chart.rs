// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::output;
use crate::types::resource::Resource;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Chart-wide settings applied to every resource added to the chart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartProps {
    /// Namespace given to resources that set none
    pub namespace: Option<String>,
    /// Labels merged into each resource's metadata
    pub labels: BTreeMap<String, String>,
    /// Output file name, defaults to `<chart id>.k8s.yaml`
    pub file_name: Option<String>,
}

impl ChartProps {
    pub fn namespaced(namespace: &str) -> Self {
        Self {
            namespace: Some(namespace.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartResource {
    pub id: String,
    pub resource: Resource,
}

/// A named group of resources synthesized into one manifest file
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    id: String,
    props: ChartProps,
    resources: Vec<ChartResource>,
}

impl Chart {
    pub fn new(id: &str, props: ChartProps) -> Self {
        Self {
            id: id.to_string(),
            props,
            resources: Vec::new(),
        }
    }

    /// Add a resource, filling in the chart's name, namespace and label defaults
    pub fn add(&mut self, id: &str, resource: impl Into<Resource>) -> &mut Self {
        let mut resource = resource.into();

        resource.default_name(&format!("{}-{}", self.id, id));
        if let Some(meta) = resource.object_meta_mut() {
            if meta.namespace.is_none() {
                meta.namespace = self.props.namespace.clone();
            }
            if !self.props.labels.is_empty() {
                let labels = meta.labels.get_or_insert_with(BTreeMap::new);
                for (key, value) in &self.props.labels {
                    labels.entry(key.clone()).or_insert_with(|| value.clone());
                }
            }
        }

        self.resources.push(ChartResource {
            id: id.to_string(),
            resource,
        });
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn namespace(&self) -> Option<&str> {
        self.props.namespace.as_deref()
    }

    pub fn resources(&self) -> &[ChartResource] {
        &self.resources
    }

    pub fn file_name(&self) -> String {
        self.props
            .file_name
            .clone()
            .unwrap_or_else(|| format!("{}{}", self.id, output::CHART_FILE_SUFFIX))
    }

    /// Whether this chart only declares kustomize overlays
    pub fn is_kustomization(&self) -> bool {
        !self.resources.is_empty()
            && self
                .resources
                .iter()
                .all(|r| matches!(r.resource, Resource::Kustomization(_)))
    }
}

/// The composition scope: every chart registered for synthesis, in declaration order
#[derive(Debug, Clone)]
pub struct App {
    outdir: PathBuf,
    charts: Vec<Chart>,
}

impl App {
    pub fn new(outdir: impl Into<PathBuf>) -> Self {
        Self {
            outdir: outdir.into(),
            charts: Vec::new(),
        }
    }

    /// Register a fully built chart; it is read-only from here on
    pub fn add_chart(&mut self, chart: Chart) -> &Chart {
        let index = self.charts.len();
        self.charts.push(chart);
        &self.charts[index]
    }

    pub fn charts(&self) -> &[Chart] {
        &self.charts
    }

    pub fn outdir(&self) -> &Path {
        &self.outdir
    }
}
