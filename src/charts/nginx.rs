// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::{cluster_ip_service, deployment, service_port};
use crate::types::{App, Chart, ChartProps, Labels};
use k8s_openapi::api::core::v1::{Container, ContainerPort};

pub const IMAGE: &str = "nginx:latest";
pub const PORT: i32 = 80;

/// Build the nginx chart: one Deployment and the ClusterIP Service in front of it
pub fn build<'a>(app: &'a mut App, id: &str, props: ChartProps) -> &'a Chart {
    let mut chart = Chart::new(id, props);
    let labels = Labels::app("nginx");

    chart.add(
        "nginx-deployment",
        deployment(
            "nginx-deployment",
            &labels,
            1,
            labels.template_metadata(),
            vec![Container {
                name: "nginx".to_string(),
                image: Some(IMAGE.to_string()),
                ports: Some(vec![ContainerPort {
                    container_port: PORT,
                    ..Default::default()
                }]),
                ..Default::default()
            }],
        ),
    );

    chart.add(
        "nginx-service",
        cluster_ip_service("nginx-service", &labels, vec![service_port(None, PORT, PORT)]),
    );

    app.add_chart(chart)
}
