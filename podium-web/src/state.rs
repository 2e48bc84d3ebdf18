use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;
use podium_core::CompetitionAggregator;

use crate::models::ProfileView;

#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<CompetitionAggregator>,
    pub profile: Arc<ProfileView>,
    pub metrics: Option<PrometheusHandle>,
}
