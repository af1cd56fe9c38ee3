//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::config::MetricsConfig;
use crate::domain::SchemaRevision;

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
    path: String,
}

impl PrometheusMetrics {
    pub fn new(handle: PrometheusHandle, path: impl Into<String>) -> Self {
        Self {
            handle: Arc::new(handle),
            path: path.into(),
        }
    }

    /// Get the metrics as a string for the /metrics endpoint
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Initialize Prometheus metrics
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            gauge!("box_office_predictor_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);

            tracing::info!("Prometheus metrics initialized at {}", config.path);

            Some(PrometheusMetrics::new(handle, config.path.clone()))
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

/// Create the metrics router
pub fn create_metrics_router(metrics: PrometheusMetrics) -> Router {
    let path = metrics.path.clone();
    Router::new()
        .route(&path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record an HTTP request metric
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

/// Record the outcome of one prediction; `log_revenue` is `None` on failure
pub fn record_prediction(revision: SchemaRevision, log_revenue: Option<f64>) {
    let status = if log_revenue.is_some() { "success" } else { "error" };
    let labels = [
        ("revision", revision.to_string()),
        ("status", status.to_string()),
    ];

    counter!("predictions_total", &labels).increment(1);

    if let Some(value) = log_revenue {
        histogram!("prediction_revenue_log", "revision" => revision.to_string()).record(value);
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use metrics_exporter_prometheus::PrometheusRecorder;
    use tower::ServiceExt;

    use super::*;

    fn local_metrics() -> (PrometheusRecorder, PrometheusMetrics) {
        let recorder = PrometheusBuilder::new().build_recorder();
        let metrics = PrometheusMetrics::new(recorder.handle(), "/metrics");
        (recorder, metrics)
    }

    #[test]
    fn test_record_prediction_labels() {
        let (recorder, metrics) = local_metrics();

        ::metrics::with_local_recorder(&recorder, || {
            record_prediction(SchemaRevision::V2, Some(18.4));
            record_prediction(SchemaRevision::V1, None);
        });

        let rendered = metrics.render();
        assert!(rendered.contains("predictions_total"));
        assert!(rendered.contains("revision=\"v2\""));
        assert!(rendered.contains("status=\"success\""));
        assert!(rendered.contains("status=\"error\""));
        assert!(rendered.contains("prediction_revenue_log"));
    }

    #[test]
    fn test_record_http_request_counts_server_errors() {
        let (recorder, metrics) = local_metrics();

        ::metrics::with_local_recorder(&recorder, || {
            record_http_request("POST", "/v1/predict", 500, Duration::from_millis(3));
        });

        let rendered = metrics.render();
        assert!(rendered.contains("http_requests_total"));
        assert!(rendered.contains("http_server_errors_total"));
        assert!(rendered.contains("path=\"/v1/predict\""));
    }

    #[tokio::test]
    async fn test_metrics_route_serves_exposition() {
        let (recorder, metrics) = local_metrics();
        ::metrics::with_local_recorder(&recorder, || {
            record_prediction(SchemaRevision::V1, Some(17.0));
        });

        let response = create_metrics_router(metrics)
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("predictions_total"));
    }
}
