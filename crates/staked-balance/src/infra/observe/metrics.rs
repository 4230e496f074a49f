/// Metrics for the staked balance strategy.
#[derive(Debug, Clone, prometheus_metric_storage::MetricStorage)]
pub struct Metrics {
    /// Batched pool reads by outcome.
    #[metric(labels("result"))]
    pub pool_fetches: prometheus::IntCounterVec,

    /// Accounts dropped for staking less than the minimum balance.
    pub below_threshold: prometheus::IntCounter,

    /// Number of accounts in the last computed score mapping.
    pub scored_accounts: prometheus::IntGauge,
}

/// Setup the metrics registry.
pub fn init() {
    ::observe::metrics::setup_registry_reentrant(Some("staked_balance".to_owned()));
}

/// Get the metrics instance.
pub fn get() -> &'static Metrics {
    Metrics::instance(::observe::metrics::get_storage_registry())
        .expect("unexpected error getting metrics instance")
}

/// Logs all collected metrics.
pub fn dump() {
    match ::observe::metrics::encode(::observe::metrics::get_registry()) {
        Ok(metrics) => tracing::debug!("collected metrics:\n{metrics}"),
        Err(err) => tracing::warn!(?err, "failed to encode metrics"),
    }
}
