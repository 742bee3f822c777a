use crate::config::TelemetryConfig;

/// Service name stamped on operation spans when none is configured.
pub const DEFAULT_SERVICE_NAME: &str = "graphql.server";

/// Immutable tracer configuration, built by chaining `with_*` options.
///
/// Options apply in call order and later calls override earlier ones for
/// the same field. There is no validation and no error path: rates outside
/// `[0, 1]` are stamped onto spans as given. The only value treated
/// specially is a non-finite rate, which disables analytics tagging.
#[derive(Clone, Debug, PartialEq)]
pub struct TracerOptions {
    service_name: String,
    analytics_rate: Option<f64>,
}

impl Default for TracerOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl TracerOptions {
    pub fn new() -> Self {
        TracerOptions {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            analytics_rate: None,
        }
    }

    /// Derives options from a telemetry config document. An explicit
    /// analytics rate in the config wins over the enabled flag.
    pub fn from_config(config: &TelemetryConfig) -> Self {
        let options = Self::new().with_service_name(config.service.name.clone());
        match config.tracing.analytics.rate {
            Some(rate) => options.with_analytics_rate(rate),
            None => options.with_analytics(config.tracing.analytics.enabled),
        }
    }

    /// Sets the value of the service-name tag on operation spans.
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Enables or disables analytics. Enabling without an explicit rate
    /// samples every event (rate 1.0); disabling omits the tag entirely.
    pub fn with_analytics(mut self, enabled: bool) -> Self {
        self.analytics_rate = if enabled { Some(1.0) } else { None };
        self
    }

    /// Sets the analytics event sample rate. Non-finite values disable
    /// the tag, everything else is accepted as-is.
    pub fn with_analytics_rate(mut self, rate: f64) -> Self {
        self.analytics_rate = rate.is_finite().then_some(rate);
        self
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn analytics_rate(&self) -> Option<f64> {
        self.analytics_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = TracerOptions::new();
        assert_eq!(options.service_name(), "graphql.server");
        assert_eq!(options.analytics_rate(), None);
    }

    #[test]
    fn later_options_override_earlier_ones() {
        let options = TracerOptions::new()
            .with_service_name("first")
            .with_analytics(true)
            .with_service_name("second")
            .with_analytics_rate(0.25);
        assert_eq!(options.service_name(), "second");
        assert_eq!(options.analytics_rate(), Some(0.25));

        let disabled = options.with_analytics(false);
        assert_eq!(disabled.analytics_rate(), None);
    }

    #[test]
    fn analytics_enable_implies_full_rate() {
        assert_eq!(
            TracerOptions::new().with_analytics(true).analytics_rate(),
            Some(1.0)
        );
    }

    #[test]
    fn out_of_range_rates_are_accepted_unchecked() {
        assert_eq!(
            TracerOptions::new()
                .with_analytics_rate(-3.0)
                .analytics_rate(),
            Some(-3.0)
        );
    }

    #[test]
    fn non_finite_rate_disables_analytics() {
        let options = TracerOptions::new()
            .with_analytics(true)
            .with_analytics_rate(f64::NAN);
        assert_eq!(options.analytics_rate(), None);
    }

    #[test]
    fn from_config_prefers_explicit_rate() {
        let config: TelemetryConfig = serde_json::from_value(serde_json::json!({
            "service": { "name": "todo-server" },
            "tracing": { "analytics": { "enabled": false, "rate": 0.5 } }
        }))
        .unwrap();
        let options = TracerOptions::from_config(&config);
        assert_eq!(options.service_name(), "todo-server");
        assert_eq!(options.analytics_rate(), Some(0.5));
    }

    #[test]
    fn from_config_enabled_without_rate() {
        let config: TelemetryConfig = serde_json::from_value(serde_json::json!({
            "tracing": { "analytics": { "enabled": true } }
        }))
        .unwrap();
        assert_eq!(
            TracerOptions::from_config(&config).analytics_rate(),
            Some(1.0)
        );
    }
}
