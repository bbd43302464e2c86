// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::output;
use crate::types::{App, Chart, ChartProps, Kustomization};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

/// Build the kustomization chart listing every chart registered so far,
/// followed by `extra_resources` (files that land in the output directory by other means).
pub fn build<'a>(app: &'a mut App, id: &str, extra_resources: &[&str]) -> &'a Chart {
    let resources: Vec<String> = app
        .charts()
        .iter()
        .filter(|c| !c.is_kustomization())
        .map(Chart::file_name)
        .chain(extra_resources.iter().map(|r| r.to_string()))
        .collect();

    let mut chart = Chart::new(
        id,
        ChartProps {
            file_name: Some(output::KUSTOMIZATION_FILE.to_string()),
            ..Default::default()
        },
    );
    chart.add(
        "kustomization",
        Kustomization {
            metadata: Some(ObjectMeta {
                name: Some(id.to_string()),
                ..Default::default()
            }),
            ..Kustomization::new(resources)
        },
    );

    app.add_chart(chart)
}
