// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Chart builders. Each one composes a chart from literal configuration and
//! registers it in the app.

pub mod dashboard;
pub mod kustomization;
pub mod nginx;

use crate::types::Labels;
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Container, PodSpec, PodTemplateSpec, Service, ServicePort, ServiceSpec,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

/// Deployment whose selector and pod template both read from `labels`
fn deployment(
    name: &str,
    labels: &Labels,
    replicas: i32,
    template_metadata: ObjectMeta,
    containers: Vec<Container>,
) -> Deployment {
    Deployment {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(replicas),
            selector: labels.selector(),
            template: PodTemplateSpec {
                metadata: Some(template_metadata),
                spec: Some(PodSpec {
                    containers,
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn cluster_ip_service(name: &str, labels: &Labels, ports: Vec<ServicePort>) -> Service {
    Service {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            selector: Some(labels.service_selector()),
            ports: Some(ports),
            type_: Some("ClusterIP".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn service_port(name: Option<&str>, port: i32, target_port: i32) -> ServicePort {
    ServicePort {
        name: name.map(str::to_string),
        port,
        target_port: Some(IntOrString::Int(target_port)),
        ..Default::default()
    }
}
