// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{KUSTOMIZATION_KIND, KUSTOMIZE_API_VERSION};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A `kustomization.yaml` declaration (kustomize.config.k8s.io/v1beta1)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Kustomization {
    pub api_version: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ObjectMeta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub common_labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub common_annotations: BTreeMap<String, String>,
}

impl Kustomization {
    pub fn new<I, S>(resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            api_version: KUSTOMIZE_API_VERSION.to_string(),
            kind: KUSTOMIZATION_KIND.to_string(),
            metadata: None,
            namespace: None,
            resources: resources.into_iter().map(Into::into).collect(),
            common_labels: BTreeMap::new(),
            common_annotations: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_kustomize_fields() {
        let kustomization = Kustomization::new(["nginx.k8s.yaml", "headlamp-deployment.yaml"]);

        let yaml = serde_yaml::to_string(&kustomization).unwrap();

        assert_eq!(
            yaml,
            "apiVersion: kustomize.config.k8s.io/v1beta1\n\
             kind: Kustomization\n\
             resources:\n\
             - nginx.k8s.yaml\n\
             - headlamp-deployment.yaml\n"
        );
    }

    #[test]
    fn test_common_labels_serialized_camel_case() {
        let mut kustomization = Kustomization::new(["a.yaml"]);
        kustomization
            .common_labels
            .insert("team".to_string(), "platform".to_string());

        let yaml = serde_yaml::to_string(&kustomization).unwrap();

        assert!(yaml.contains("commonLabels:\n  team: platform\n"));
        assert!(!yaml.contains("commonAnnotations"));
    }
}
