use std::collections::BTreeMap;

use crate::auditing::domain::MetricsConfig;

/// Annotation key enabling Prometheus scraping for a pod template.
pub const SCRAPE_ANNOTATION: &str = "prometheus.io/scrape";
/// Annotation key naming the scrape port.
pub const PORT_ANNOTATION: &str = "prometheus.io/port";
/// Annotation key naming the scrape path.
pub const PATH_ANNOTATION: &str = "prometheus.io/path";

/// Reads Prometheus scrape annotations into a tri-state config.
///
/// `scrape_enabled` is `None` when the scrape key itself is absent; when
/// present it is `true` only for the literal value `"true"` and `false`
/// for anything else (including `"false"`, `"True"`, `"1"`).
pub fn extract_metrics_config(annotations: Option<&BTreeMap<String, String>>) -> MetricsConfig {
    let Some(annotations) = annotations else {
        return MetricsConfig::default();
    };

    MetricsConfig {
        scrape_enabled: annotations.get(SCRAPE_ANNOTATION).map(|value| value == "true"),
        port: annotations.get(PORT_ANNOTATION).cloned(),
        path: annotations.get(PATH_ANNOTATION).cloned(),
    }
}
