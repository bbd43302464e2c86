// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Monitoring dashboard chart: Grafana with its admin credentials kept in a Secret

use super::{cluster_ip_service, deployment, service_port};
use crate::types::{App, Chart, ChartProps, Labels};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, EnvVar, Secret, SecretVolumeSource, Volume, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

pub const IMAGE: &str = "grafana/grafana:11.1.0";
pub const PORT: i32 = 3000;
pub const DEFAULT_NAMESPACE: &str = "monitoring";
pub const ADMIN_SECRET: &str = "grafana-admin";

const CREDENTIALS_MOUNT: &str = "/etc/grafana-admin";

pub fn build<'a>(app: &'a mut App, id: &str, mut props: ChartProps) -> &'a Chart {
    props
        .namespace
        .get_or_insert_with(|| DEFAULT_NAMESPACE.to_string());
    let mut chart = Chart::new(id, props);
    let labels = Labels::new([("app", "grafana"), ("tier", "monitoring")]);

    chart.add(
        "admin-secret",
        Secret {
            metadata: ObjectMeta {
                name: Some(ADMIN_SECRET.to_string()),
                ..Default::default()
            },
            type_: Some("Opaque".to_string()),
            string_data: Some(BTreeMap::from([
                ("admin-user".to_string(), "admin".to_string()),
                ("admin-password".to_string(), "change-me".to_string()),
            ])),
            ..Default::default()
        },
    );

    // Grafana reads `<VAR>__FILE` variables from the mounted secret keys
    let env: Vec<EnvVar> = [
        ("GF_SECURITY_ADMIN_USER__FILE", "admin-user"),
        ("GF_SECURITY_ADMIN_PASSWORD__FILE", "admin-password"),
    ]
    .into_iter()
    .map(|(name, key)| EnvVar {
        name: name.to_string(),
        value: Some(format!("{}/{}", CREDENTIALS_MOUNT, key)),
        ..Default::default()
    })
    .chain(std::iter::once(EnvVar {
        name: "GF_AUTH_ANONYMOUS_ENABLED".to_string(),
        value: Some("false".to_string()),
        ..Default::default()
    }))
    .collect();

    let template_metadata = ObjectMeta {
        annotations: Some(BTreeMap::from([
            ("prometheus.io/scrape".to_string(), "true".to_string()),
            ("prometheus.io/port".to_string(), PORT.to_string()),
        ])),
        ..labels.template_metadata()
    };

    let mut grafana = deployment(
        "grafana",
        &labels,
        1,
        template_metadata,
        vec![Container {
            name: "grafana".to_string(),
            image: Some(IMAGE.to_string()),
            ports: Some(vec![ContainerPort {
                name: Some("http".to_string()),
                container_port: PORT,
                ..Default::default()
            }]),
            env: Some(env),
            volume_mounts: Some(vec![VolumeMount {
                name: "admin-credentials".to_string(),
                mount_path: CREDENTIALS_MOUNT.to_string(),
                read_only: Some(true),
                ..Default::default()
            }]),
            ..Default::default()
        }],
    );
    if let Some(pod) = grafana.spec.as_mut().and_then(|s| s.template.spec.as_mut()) {
        pod.volumes = Some(vec![Volume {
            name: "admin-credentials".to_string(),
            secret: Some(SecretVolumeSource {
                secret_name: Some(ADMIN_SECRET.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }]);
    }
    chart.add("deployment", grafana);

    chart.add(
        "service",
        cluster_ip_service("grafana", &labels, vec![service_port(Some("http"), 80, PORT)]),
    );

    app.add_chart(chart)
}
