// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The resource kinds a chart can hold, and the checks synthesis runs on them

use crate::error::{ManifestError, Result};
use crate::types::kustomization::Kustomization;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Secret, Service};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{Resource as KubeResource, ResourceExt};
use serde::Serialize;

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Resource {
    Deployment(Deployment),
    Service(Service),
    Secret(Secret),
    Kustomization(Kustomization),
}

impl Resource {
    pub fn kind(&self) -> &'static str {
        match self {
            Resource::Deployment(_) => "Deployment",
            Resource::Service(_) => "Service",
            Resource::Secret(_) => "Secret",
            Resource::Kustomization(_) => "Kustomization",
        }
    }

    pub fn metadata(&self) -> Option<&ObjectMeta> {
        match self {
            Resource::Deployment(d) => Some(d.meta()),
            Resource::Service(s) => Some(s.meta()),
            Resource::Secret(s) => Some(s.meta()),
            Resource::Kustomization(k) => k.metadata.as_ref(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata().and_then(|m| m.name.as_deref())
    }

    /// Metadata of namespaced cluster objects; Kustomizations have none to default
    pub(crate) fn object_meta_mut(&mut self) -> Option<&mut ObjectMeta> {
        match self {
            Resource::Deployment(d) => Some(d.meta_mut()),
            Resource::Service(s) => Some(s.meta_mut()),
            Resource::Secret(s) => Some(s.meta_mut()),
            Resource::Kustomization(_) => None,
        }
    }

    /// Give the resource a name if it has none
    pub(crate) fn default_name(&mut self, name: &str) {
        if self.name().is_some() {
            return;
        }
        match self {
            Resource::Kustomization(k) => {
                k.metadata.get_or_insert_with(ObjectMeta::default).name = Some(name.to_string())
            }
            other => {
                if let Some(meta) = other.object_meta_mut() {
                    meta.name = Some(name.to_string());
                }
            }
        }
    }

    /// Check the fields a manifest cannot be written without
    pub fn validate(&self) -> Result<()> {
        if self.name().map_or(true, str::is_empty) {
            return Err(ManifestError::InvalidResource(format!(
                "{} has no metadata.name",
                self.kind()
            )));
        }

        match self {
            Resource::Deployment(d) => validate_deployment(d),
            Resource::Service(s) => validate_service(s),
            Resource::Secret(_) => Ok(()),
            Resource::Kustomization(k) => validate_kustomization(k),
        }
    }
}

fn validate_deployment(deployment: &Deployment) -> Result<()> {
    let name = deployment.name_any();
    let invalid = |reason: &str| {
        Err(ManifestError::InvalidResource(format!(
            "Deployment {} {}",
            name, reason
        )))
    };

    let Some(spec) = deployment.spec.as_ref() else {
        return invalid("has no spec");
    };
    let Some(pod_spec) = spec.template.spec.as_ref() else {
        return invalid("has no pod template spec");
    };
    if pod_spec.containers.is_empty() {
        return invalid("has no containers");
    }
    for container in &pod_spec.containers {
        if container.name.is_empty() {
            return invalid("has a container without a name");
        }
        if container.image.as_deref().map_or(true, str::is_empty) {
            return invalid(&format!("container {} has no image", container.name));
        }
    }

    let match_labels = spec.selector.match_labels.as_ref().filter(|l| !l.is_empty());
    let has_expressions = spec
        .selector
        .match_expressions
        .as_ref()
        .is_some_and(|e| !e.is_empty());
    if match_labels.is_none() && !has_expressions {
        return invalid("has an empty selector");
    }

    let template_labels = spec
        .template
        .metadata
        .as_ref()
        .and_then(|m| m.labels.as_ref());
    for (key, value) in match_labels.into_iter().flatten() {
        if template_labels.and_then(|l| l.get(key)) != Some(value) {
            return invalid(&format!(
                "selector label {}={} does not match the pod template",
                key, value
            ));
        }
    }

    Ok(())
}

fn validate_service(service: &Service) -> Result<()> {
    let has_ports = service
        .spec
        .as_ref()
        .and_then(|s| s.ports.as_ref())
        .is_some_and(|ports| !ports.is_empty());

    if has_ports {
        Ok(())
    } else {
        Err(ManifestError::InvalidResource(format!(
            "Service {} has no ports",
            service.name_any()
        )))
    }
}

fn validate_kustomization(kustomization: &Kustomization) -> Result<()> {
    if kustomization.api_version.is_empty() || kustomization.kind.is_empty() {
        return Err(ManifestError::InvalidResource(
            "Kustomization is missing apiVersion or kind".to_string(),
        ));
    }
    Ok(())
}

impl From<Deployment> for Resource {
    fn from(deployment: Deployment) -> Self {
        Resource::Deployment(deployment)
    }
}

impl From<Service> for Resource {
    fn from(service: Service) -> Self {
        Resource::Service(service)
    }
}

impl From<Secret> for Resource {
    fn from(secret: Secret) -> Self {
        Resource::Secret(secret)
    }
}

impl From<Kustomization> for Resource {
    fn from(kustomization: Kustomization) -> Self {
        Resource::Kustomization(kustomization)
    }
}
