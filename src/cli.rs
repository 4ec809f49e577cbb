use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/*
 * ============================================================================
 * Cli
 * ============================================================================
 */
#[allow(clippy::module_name_repetitions)]
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommands,

    #[arg(
        long,
        env = "OTEL_EXPORTER_OTLP_ENDPOINT",
        global = true,
        help_heading = "OpenTelemetry"
    )]
    pub otel_exporter_otlp_endpoint: Option<String>,

    #[arg(
        long,
        env = "OTEL_EXPORTER_OTLP_LOGS_ENDPOINT",
        global = true,
        help_heading = "OpenTelemetry"
    )]
    pub otel_exporter_otlp_logs_endpoint: Option<String>,

    #[arg(
        long,
        env = "OTEL_EXPORTER_OTLP_METRICS_ENDPOINT",
        global = true,
        help_heading = "OpenTelemetry"
    )]
    pub otel_exporter_otlp_metrics_endpoint: Option<String>,

    #[arg(
        long,
        env = "OTEL_EXPORTER_OTLP_TRACES_ENDPOINT",
        global = true,
        help_heading = "OpenTelemetry"
    )]
    pub otel_exporter_otlp_traces_endpoint: Option<String>,

    #[arg(
        long,
        env = "OTEL_EXPORTER_OTLP_PROTOCOL",
        value_enum,
        global = true,
        help_heading = "OpenTelemetry"
    )]
    pub otel_exporter_otlp_protocol: Option<CliArgsOtelProtocol>,

    #[arg(
        long,
        env = "OTEL_EXPORTER_OTLP_LOGS_PROTOCOL",
        value_enum,
        global = true,
        help_heading = "OpenTelemetry"
    )]
    pub otel_exporter_otlp_logs_protocol: Option<CliArgsOtelProtocol>,

    #[arg(
        long,
        env = "OTEL_EXPORTER_OTLP_METRICS_PROTOCOL",
        value_enum,
        global = true,
        help_heading = "OpenTelemetry"
    )]
    pub otel_exporter_otlp_metrics_protocol: Option<CliArgsOtelProtocol>,

    #[arg(
        long,
        env = "OTEL_EXPORTER_OTLP_TRACES_PROTOCOL",
        value_enum,
        global = true,
        help_heading = "OpenTelemetry"
    )]
    pub otel_exporter_otlp_traces_protocol: Option<CliArgsOtelProtocol>,

    /// Export timeout in milliseconds.
    #[arg(
        long,
        env = "OTEL_EXPORTER_OTLP_TIMEOUT",
        default_value_t = 10000,
        global = true,
        help_heading = "OpenTelemetry"
    )]
    pub otel_exporter_otlp_timeout: u64,

    #[arg(
        long,
        env = "OTEL_EXPORTER_OTLP_LOGS_TIMEOUT",
        global = true,
        help_heading = "OpenTelemetry"
    )]
    pub otel_exporter_otlp_logs_timeout: Option<u64>,

    #[arg(
        long,
        env = "OTEL_EXPORTER_OTLP_METRICS_TIMEOUT",
        global = true,
        help_heading = "OpenTelemetry"
    )]
    pub otel_exporter_otlp_metrics_timeout: Option<u64>,

    #[arg(
        long,
        env = "OTEL_EXPORTER_OTLP_TRACES_TIMEOUT",
        global = true,
        help_heading = "OpenTelemetry"
    )]
    pub otel_exporter_otlp_traces_timeout: Option<u64>,

    #[arg(
        long,
        env = "OTEL_LOGS_EXPORTER",
        value_enum,
        value_delimiter = ',',
        global = true,
        help_heading = "OpenTelemetry"
    )]
    pub otel_logs_exporter: Option<Vec<CliArgsOtelExporter>>,

    #[arg(
        long,
        env = "OTEL_METRICS_EXPORTER",
        value_enum,
        value_delimiter = ',',
        global = true,
        help_heading = "OpenTelemetry"
    )]
    pub otel_metrics_exporter: Option<Vec<CliArgsOtelExporter>>,

    #[arg(
        long,
        env = "OTEL_SERVICE_NAME",
        default_value = "capo-conversion-webhook",
        global = true,
        help_heading = "OpenTelemetry"
    )]
    pub otel_service_name: String,

    #[arg(
        long,
        env = "OTEL_TRACES_EXPORTER",
        value_enum,
        value_delimiter = ',',
        global = true,
        help_heading = "OpenTelemetry"
    )]
    pub otel_traces_exporter: Option<Vec<CliArgsOtelExporter>>,
}

#[must_use]
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[allow(clippy::module_name_repetitions)]
#[derive(Subcommand, Debug)]
pub enum CliCommands {
    /// Command Line Interface
    Cli(CliCliArgs),

    /// Custom Resource Definition
    Crd(CrdArgs),

    /// Conversion Webhook
    Webhook(WebhookArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliArgsOtelExporter {
    Console,
    Otlp,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliArgsOtelProtocol {
    Grpc,
    #[value(name = "http/protobuf")]
    HttpBinary,
    #[value(name = "http/json")]
    HttpJson,
}

impl From<CliArgsOtelProtocol> for opentelemetry_otlp::Protocol {
    fn from(value: CliArgsOtelProtocol) -> Self {
        match value {
            CliArgsOtelProtocol::Grpc => opentelemetry_otlp::Protocol::Grpc,
            CliArgsOtelProtocol::HttpBinary => opentelemetry_otlp::Protocol::HttpBinary,
            CliArgsOtelProtocol::HttpJson => opentelemetry_otlp::Protocol::HttpJson,
        }
    }
}

/*
 * ============================================================================
 * Command Line Interface
 * ============================================================================
 */
#[derive(Args, Debug)]
pub struct CliCliArgs {
    #[command(subcommand)]
    pub command: CliCliCommands,
}

#[derive(Subcommand, Debug)]
pub enum CliCliCommands {
    /// Markdown
    Markdown(CliMarkdownArgs),
}

#[derive(Args, Debug)]
pub struct CliMarkdownArgs {}

/*
 * ============================================================================
 * Custom Resource Definition
 * ============================================================================
 */
#[derive(Args, Debug)]
pub struct CrdArgs {
    #[command(subcommand)]
    pub command: CrdCommands,
}

#[derive(Subcommand, Debug)]
pub enum CrdCommands {
    /// Generate
    Generate(CrdGenerateArgs),
}

#[derive(Args, Debug)]
pub struct CrdGenerateArgs {
    #[arg(long, value_enum, default_value_t = CrdGenerateArgsFormat::Yaml)]
    pub format: CrdGenerateArgsFormat,

    /// Directory to write one file per kind to, instead of stdout.
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value = "capo-webhook-service")]
    pub webhook_service_name: String,

    #[arg(long, default_value = "capo-system")]
    pub webhook_service_namespace: String,

    #[arg(long, default_value_t = 443)]
    pub webhook_service_port: i32,

    /// PEM encoded CA bundle the API server verifies the webhook with.
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub ca_bundle_file: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum CrdGenerateArgsFormat {
    Json,
    Yaml,
}

/*
 * ============================================================================
 * Conversion Webhook
 * ============================================================================
 */
#[derive(Args, Debug)]
pub struct WebhookArgs {
    #[command(subcommand)]
    pub command: WebhookCommands,
}

#[derive(Subcommand, Debug)]
pub enum WebhookCommands {
    /// Run
    Run(WebhookRunArgs),
}

#[derive(Args, Debug)]
pub struct WebhookRunArgs {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, default_value_t = 9443)]
    pub port: u16,

    #[arg(long, default_value = "0.0.0.0")]
    pub health_host: String,

    #[arg(long, default_value_t = 8080)]
    pub health_port: u16,

    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub tls_cert_file: PathBuf,

    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub tls_key_file: PathBuf,
}
