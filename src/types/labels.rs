// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::labels;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use std::collections::BTreeMap;
use std::sync::Arc;

/// An immutable label set shared between a workload selector and its pod template.
///
/// Every accessor reads the same mapping, so a selector built from a `Labels`
/// always matches a template built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels(Arc<BTreeMap<String, String>>);

impl Labels {
    pub fn new<I, K, V>(labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(Arc::new(
            labels
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        ))
    }

    /// The conventional `app=<name>` label set
    pub fn app(name: &str) -> Self {
        Self::new([(labels::APP, name)])
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    /// Selector for a Deployment's `spec.selector`
    pub fn selector(&self) -> LabelSelector {
        LabelSelector {
            match_labels: Some(self.as_map().clone()),
            ..Default::default()
        }
    }

    /// Metadata for a pod template carrying these labels
    pub fn template_metadata(&self) -> ObjectMeta {
        ObjectMeta {
            labels: Some(self.as_map().clone()),
            ..Default::default()
        }
    }

    /// Selector for a Service's `spec.selector`
    pub fn service_selector(&self) -> BTreeMap<String, String> {
        self.as_map().clone()
    }
}
