use {prometheus::Encoder, std::sync::OnceLock};

/// Global metrics registry used by all components.
static REGISTRY: OnceLock<prometheus_metric_storage::StorageRegistry> = OnceLock::new();

/// Configure global metrics registry with a common prefix for all metric
/// names. Later calls are ignored.
///
/// This should happen before any call to [`get_registry`], ideally in the
/// very beginning of the `main` function.
pub fn setup_registry_reentrant(prefix: Option<String>) {
    let Ok(registry) = prometheus::Registry::new_custom(prefix, None) else {
        tracing::warn!("invalid metrics prefix, falling back to default registry");
        return;
    };
    let storage_registry = prometheus_metric_storage::StorageRegistry::new(registry);
    REGISTRY.set(storage_registry).ok();
}

/// Get the global instance of the metrics registry.
pub fn get_registry() -> &'static prometheus::Registry {
    get_storage_registry().registry()
}

/// Get the global instance of the metric storage registry.
///
/// If the registry was not configured with [`setup_registry_reentrant`] it
/// gets initialized with a default value, which keeps unit tests free of any
/// setup.
pub fn get_storage_registry() -> &'static prometheus_metric_storage::StorageRegistry {
    REGISTRY.get_or_init(prometheus_metric_storage::StorageRegistry::default)
}

/// Encodes all metrics of the registry in the prometheus text format.
pub fn encode(registry: &prometheus::Registry) -> prometheus::Result<String> {
    let encoder = prometheus::TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&registry.gather(), &mut buffer)?;
    String::from_utf8(buffer).map_err(|err| prometheus::Error::Msg(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_registered_metrics() {
        let registry = prometheus::Registry::new();
        let counter = prometheus::IntCounter::new("calls", "number of calls").unwrap();
        registry.register(Box::new(counter.clone())).unwrap();
        counter.inc_by(3);

        let encoded = encode(&registry).unwrap();
        assert!(encoded.contains("# HELP calls number of calls"));
        assert!(encoded.contains("calls 3"));
    }
}
