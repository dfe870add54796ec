//! Observability & Logging Config

use clap::Args;

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// OpenTelemetry span export.
#[derive(Debug, Args)]
pub struct OtelConfig {
    /// Export spans over OTLP
    #[arg(long = "otel-enabled", env = "OTEL_ENABLED", default_value_t = false)]
    pub enabled: bool,

    /// Continue traces from incoming `traceparent` headers
    #[arg(
        long = "otel-parent-propagation",
        env = "OTEL_PARENT_PROPAGATION_ENABLED",
        default_value_t = false
    )]
    pub parent_propagation: bool,

    /// OTLP gRPC collector endpoint
    #[arg(
        long = "otel-endpoint",
        env = "OTEL_EXPORTER_OTLP_ENDPOINT",
        default_value = "http://localhost:4317"
    )]
    pub endpoint: String,

    /// OTLP export timeout in seconds
    #[arg(
        long = "otel-timeout-secs",
        env = "OTEL_EXPORTER_OTLP_TIMEOUT_SECONDS",
        default_value_t = 3
    )]
    pub timeout_secs: u64,

    /// Reported `service.name`
    #[arg(long = "otel-service-name", env = "OTEL_SERVICE_NAME", default_value = "ordering-json")]
    pub service_name: String,

    /// Reported `deployment.environment.name`
    #[arg(
        long = "otel-environment",
        env = "OTEL_DEPLOYMENT_ENVIRONMENT",
        default_value = "development"
    )]
    pub environment: String,

    /// Fraction of root traces kept, clamped to [0.0, 1.0]
    #[arg(long = "otel-sample-ratio", env = "OTEL_TRACE_SAMPLE_RATIO", default_value_t = 1.0)]
    pub sample_ratio: f64,
}

impl OtelConfig {
    /// Incoming trace context is only trusted when spans are exported.
    #[must_use]
    pub fn propagates_parent(&self) -> bool {
        self.enabled && self.parent_propagation
    }

    #[must_use]
    pub fn sample_ratio(&self) -> f64 {
        self.sample_ratio.clamp(0.0, 1.0)
    }
}

/// Tracing export and request logging settings.
#[derive(Debug, Args)]
pub struct ObservabilityConfig {
    /// OpenTelemetry export settings.
    #[command(flatten)]
    pub otel: OtelConfig,

    /// Requests slower than this are logged as warnings
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000)]
    pub slow_request_threshold_ms: u64,
}
