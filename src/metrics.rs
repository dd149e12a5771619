use std::sync::OnceLock;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

static PROMETHEUS: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder once per process and return its handle.
///
/// Every app built in the process (one per test) shares the global recorder,
/// so each handle renders what the routers actually record.
pub fn init_metrics() -> PrometheusHandle {
    PROMETHEUS.get_or_init(install_recorder).clone()
}

fn install_recorder() -> PrometheusHandle {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();

    if metrics::set_global_recorder(recorder).is_err() {
        tracing::warn!("A metrics recorder was already installed; /metrics will stay empty");
    }

    // Pre-register counters so they appear even before the first increment.
    counter!("login_attempts_total", "outcome" => "success").absolute(0);
    counter!("login_attempts_total", "outcome" => "rejected").absolute(0);

    handle
}

/// Count every routed request by matched path and status.
pub async fn track_requests(req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".into());

    let response = next.run(req).await;

    counter!(
        "api_requests_total",
        "route" => route,
        "status" => response.status().as_u16().to_string()
    )
    .increment(1);

    response
}
