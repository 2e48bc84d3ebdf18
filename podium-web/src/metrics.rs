//! Request counters exposed on `/metrics`.

use std::sync::OnceLock;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::{info, warn};

static HANDLE: OnceLock<Option<PrometheusHandle>> = OnceLock::new();

pub const PAGE_VIEWS: &str = "podium_web_page_views_total";
pub const TOGGLE_REQUESTS: &str = "podium_web_toggle_requests_total";
pub const API_REQUESTS: &str = "podium_web_api_requests_total";

/// Install the Prometheus recorder once and return its render handle.
///
/// Idempotent. Returns `None` if another recorder is already installed.
pub fn init_metrics() -> Option<PrometheusHandle> {
    HANDLE
        .get_or_init(|| match PrometheusBuilder::new().install_recorder() {
            Ok(handle) => {
                register_metrics();
                info!("Prometheus recorder installed");
                Some(handle)
            }
            Err(e) => {
                warn!("Failed to install Prometheus recorder: {}", e);
                None
            }
        })
        .clone()
}

// Pre-register so the series appear before first use
fn register_metrics() {
    let _ = ::metrics::counter!(PAGE_VIEWS);
    for state in ["expanded", "collapsed"] {
        let _ = ::metrics::counter!(TOGGLE_REQUESTS, "state" => state);
    }
    let _ = ::metrics::counter!(API_REQUESTS);
}

pub fn record_page_view() {
    ::metrics::counter!(PAGE_VIEWS).increment(1);
}

fn toggle_state(expanded: bool) -> &'static str {
    if expanded {
        "expanded"
    } else {
        "collapsed"
    }
}

pub fn record_toggle(expanded: bool) {
    ::metrics::counter!(TOGGLE_REQUESTS, "state" => toggle_state(expanded)).increment(1);
}

pub fn record_api_request() {
    ::metrics::counter!(API_REQUESTS).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn test_toggle_series_are_registered_with_state_label() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        ::metrics::with_local_recorder(&recorder, || {
            register_metrics();
            record_toggle(true);
        });

        let rendered = handle.render();
        assert!(rendered.contains(r#"podium_web_toggle_requests_total{state="expanded"} 1"#));
        assert!(rendered.contains(r#"podium_web_toggle_requests_total{state="collapsed"} 0"#));
        assert!(!rendered.contains("podium_web_toggle_requests_total 0"));
    }
}
