// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Chart validation and YAML rendering

use crate::error::{ManifestError, Result};
use crate::types::{App, Chart};
use std::collections::HashSet;

const DOCUMENT_SEPARATOR: &str = "---\n";

/// Check a chart before anything is written for it
pub fn validate_chart(chart: &Chart) -> Result<()> {
    if chart.id().is_empty() {
        return Err(ManifestError::InvalidChart("chart id is empty".to_string()));
    }

    let mut seen = HashSet::new();
    for r in chart.resources() {
        if !seen.insert(r.id.as_str()) {
            return Err(ManifestError::InvalidChart(format!(
                "chart {} declares resource id {} more than once",
                chart.id(),
                r.id
            )));
        }
        r.resource.validate().map_err(|e| {
            ManifestError::InvalidChart(format!("chart {}, resource {}: {}", chart.id(), r.id, e))
        })?;
    }

    Ok(())
}

/// Validate every chart in the app, including that no two charts share an output file
pub fn validate_app(app: &App) -> Result<()> {
    let mut files = HashSet::new();
    for chart in app.charts() {
        validate_chart(chart)?;
        let file_name = chart.file_name();
        if !files.insert(file_name.clone()) {
            return Err(ManifestError::InvalidChart(format!(
                "chart {} writes to {} which another chart already uses",
                chart.id(),
                file_name
            )));
        }
    }
    Ok(())
}

/// Render a chart as a multi-document YAML stream, one document per resource
pub fn render_chart(chart: &Chart) -> Result<String> {
    let documents = chart
        .resources()
        .iter()
        .map(|r| serde_yaml::to_string(&r.resource))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(documents.join(DOCUMENT_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::nginx;
    use crate::types::{ChartProps, Kustomization};
    use k8s_openapi::api::core::v1::Secret;
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    fn make_secret(name: &str) -> Secret {
        Secret {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_render_separates_documents() {
        let mut chart = Chart::new("creds", ChartProps::default());
        chart.add("a", make_secret("a")).add("b", make_secret("b"));

        let yaml = render_chart(&chart).unwrap();

        assert_eq!(
            yaml,
            "apiVersion: v1\nkind: Secret\nmetadata:\n  name: a\n\
             ---\n\
             apiVersion: v1\nkind: Secret\nmetadata:\n  name: b\n"
        );
    }

    #[test]
    fn test_render_empty_chart() {
        let chart = Chart::new("empty", ChartProps::default());
        assert_eq!(render_chart(&chart).unwrap(), "");
    }

    #[test]
    fn test_render_is_deterministic() {
        let render = || {
            let mut app = App::new("dist");
            let chart = nginx::build(&mut app, "nginx", ChartProps::default());
            render_chart(chart).unwrap()
        };
        assert_eq!(render(), render());
    }

    #[test]
    fn test_duplicate_resource_id_is_invalid() {
        let mut chart = Chart::new("creds", ChartProps::default());
        chart.add("a", make_secret("a")).add("a", make_secret("b"));

        let err = validate_chart(&chart).unwrap_err();
        assert!(err.to_string().contains("resource id a more than once"));
    }

    #[test]
    fn test_empty_chart_id_is_invalid() {
        let chart = Chart::new("", ChartProps::default());
        assert!(validate_chart(&chart).is_err());
    }

    #[test]
    fn test_invalid_resource_names_chart() {
        let mut chart = Chart::new("overlay", ChartProps::default());
        let mut kustomization = Kustomization::new(["a.yaml"]);
        kustomization.kind = String::new();
        chart.add("root", kustomization);

        let err = validate_chart(&chart).unwrap_err();
        assert!(err.to_string().contains("chart overlay, resource root"));
    }

    #[test]
    fn test_duplicate_file_name_is_invalid() {
        let mut app = App::new("dist");
        app.add_chart(Chart::new("web", ChartProps::default()));
        app.add_chart(Chart::new(
            "other",
            ChartProps {
                file_name: Some("web.k8s.yaml".to_string()),
                ..Default::default()
            },
        ));

        let err = validate_app(&app).unwrap_err();
        assert!(err.to_string().contains("web.k8s.yaml"));
    }
}
