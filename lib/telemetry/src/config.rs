use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::options::DEFAULT_SERVICE_NAME;

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(deny_unknown_fields)]
#[derive(Default)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub tracing: TracingConfig,
}

impl TelemetryConfig {
    pub fn is_tracing_enabled(&self) -> bool {
        self.tracing.exporters.iter().any(|exporter| match exporter {
            TracingExporterConfig::Stdout(config) => config.enabled,
            TracingExporterConfig::Otlp(config) => config.enabled,
        })
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    #[serde(default = "default_service_name")]
    pub name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
        }
    }
}

fn default_service_name() -> String {
    DEFAULT_SERVICE_NAME.to_string()
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct TracingConfig {
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub collect: TracingCollectConfig,
    #[serde(default)]
    pub exporters: Vec<TracingExporterConfig>,
}

/// Controls the analytics sample-rate tag stamped onto operation spans.
///
/// An explicit `rate` always wins over the `enabled` flag; enabling with no
/// rate means "sample every event" (rate 1.0).
#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct AnalyticsConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub rate: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(deny_unknown_fields)]
pub struct TracingCollectConfig {
    #[serde(default = "default_sampling")]
    pub sampling: f64,
}

impl Default for TracingCollectConfig {
    fn default() -> Self {
        Self {
            sampling: default_sampling(),
        }
    }
}

fn default_sampling() -> f64 {
    1.0
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "lowercase")]
pub enum TracingExporterConfig {
    Stdout(StdoutExporterConfig),
    Otlp(OtlpExporterConfig),
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(deny_unknown_fields)]
pub struct StdoutExporterConfig {
    #[serde(default = "default_exporter_enabled")]
    pub enabled: bool,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(deny_unknown_fields)]
pub struct OtlpExporterConfig {
    #[serde(default = "default_exporter_enabled")]
    pub enabled: bool,
    pub endpoint: String,
    #[serde(default)]
    pub batch_processor: BatchProcessorConfig,
}

fn default_exporter_enabled() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(deny_unknown_fields)]
pub struct BatchProcessorConfig {
    #[serde(default = "default_batch_max_concurrent_exports")]
    pub max_concurrent_exports: u32,
    #[serde(default = "default_batch_max_export_batch_size")]
    pub max_export_batch_size: u32,
    #[serde(default = "default_batch_max_queue_size")]
    pub max_queue_size: u32,
    #[serde(
        default = "default_batch_max_export_timeout",
        deserialize_with = "humantime_serde::deserialize",
        serialize_with = "humantime_serde::serialize"
    )]
    #[schemars(with = "String")]
    pub max_export_timeout: Duration,
    #[serde(
        default = "default_batch_scheduled_delay",
        deserialize_with = "humantime_serde::deserialize",
        serialize_with = "humantime_serde::serialize"
    )]
    #[schemars(with = "String")]
    pub scheduled_delay: Duration,
}

impl Default for BatchProcessorConfig {
    fn default() -> Self {
        Self {
            max_concurrent_exports: default_batch_max_concurrent_exports(),
            max_export_batch_size: default_batch_max_export_batch_size(),
            max_export_timeout: default_batch_max_export_timeout(),
            max_queue_size: default_batch_max_queue_size(),
            scheduled_delay: default_batch_scheduled_delay(),
        }
    }
}

fn default_batch_max_concurrent_exports() -> u32 {
    1
}

fn default_batch_max_export_batch_size() -> u32 {
    512
}

fn default_batch_max_queue_size() -> u32 {
    2048
}

fn default_batch_max_export_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_batch_scheduled_delay() -> Duration {
    Duration::from_secs(5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_empty_document() {
        let config: TelemetryConfig = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(config.service.name, "graphql.server");
        assert!(!config.tracing.analytics.enabled);
        assert_eq!(config.tracing.analytics.rate, None);
        assert_eq!(config.tracing.collect.sampling, 1.0);
        assert!(config.tracing.exporters.is_empty());
        assert!(!config.is_tracing_enabled());
    }

    #[test]
    fn exporter_list_deserializes() {
        let config: TelemetryConfig = serde_json::from_value(serde_json::json!({
            "tracing": {
                "exporters": [
                    { "stdout": { "enabled": false } },
                    { "otlp": { "endpoint": "http://localhost:4318" } }
                ]
            }
        }))
        .unwrap();

        assert_eq!(config.tracing.exporters.len(), 2);
        assert!(config.is_tracing_enabled());
        match &config.tracing.exporters[1] {
            TracingExporterConfig::Otlp(otlp) => {
                assert!(otlp.enabled);
                assert_eq!(otlp.endpoint, "http://localhost:4318");
                assert_eq!(otlp.batch_processor.max_export_batch_size, 512);
            }
            other => panic!("expected otlp exporter, got {:?}", other),
        }
    }

    #[test]
    fn batch_processor_durations_use_humantime() {
        let config: BatchProcessorConfig = serde_json::from_value(serde_json::json!({
            "scheduled_delay": "250ms",
            "max_export_timeout": "10s"
        }))
        .unwrap();
        assert_eq!(config.scheduled_delay, Duration::from_millis(250));
        assert_eq!(config.max_export_timeout, Duration::from_secs(10));
        assert_eq!(config.max_queue_size, 2048);
    }
}
