//! Application state management
//!
//! Shared, read-only state passed to every handler via Axum's state
//! extraction. There is no per-user or per-session data: every request
//! carries everything the engine needs.

use crate::config::AppConfig;
use bmi_analyzer_shared::AdviceVariant;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

/// Shared application state
///
/// Cloning is O(1): the config is behind an `Arc` and the Prometheus handle
/// is internally reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Prometheus render handle, when a global recorder was installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(config: AppConfig, metrics: Option<PrometheusHandle>) -> Self {
        Self {
            config: Arc::new(config),
            metrics,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Wording used for labels and advice
    #[inline]
    pub fn advice_variant(&self) -> AdviceVariant {
        self.config.engine.advice_variant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_clone_shares_config() {
        let state = AppState::new(AppConfig::default(), None);
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.config, &cloned.config));
    }

    #[test]
    fn test_advice_variant_from_config() {
        let mut config = AppConfig::default();
        config.engine.advice_variant = AdviceVariant::Basic;
        let state = AppState::new(config, None);
        assert_eq!(state.advice_variant(), AdviceVariant::Basic);
    }
}
