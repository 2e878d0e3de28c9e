use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Split CLI symptom arguments into identifiers, dropping blanks.
pub(crate) fn normalize_symptoms<I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    raw.into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_drops_blank_entries() {
        let normalized = normalize_symptoms(vec![
            " febre ".to_string(),
            "".to_string(),
            "tosse".to_string(),
            "   ".to_string(),
        ]);
        assert_eq!(normalized, vec!["febre".to_string(), "tosse".to_string()]);
    }
}
