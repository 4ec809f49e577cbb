use std::time::Duration;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
use opentelemetry_otlp::{Protocol, WithExportConfig};
use opentelemetry_sdk::{
    logs::SdkLoggerProvider, metrics::SdkMeterProvider, trace::SdkTracerProvider,
};
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{
    EnvFilter, Layer as _, filter::Directive, layer::SubscriberExt as _,
    util::SubscriberInitExt as _,
};

use crate::{
    Error, Result,
    cli::{CliArgs, CliArgsOtelExporter},
};

pub struct Provider {
    logger: SdkLoggerProvider,
    meter: SdkMeterProvider,
    service_name: String,
    tracer: SdkTracerProvider,
}

impl Provider {
    /// # Errors
    ///
    /// Will return `Err` if an OTLP exporter is selected without an endpoint
    /// or protocol, or could not be built.
    pub fn new(cli: &CliArgs) -> Result<Self> {
        Ok(Self {
            logger: logger_provider(cli)?,
            meter: meter_provider(cli)?,
            service_name: cli.otel_service_name.clone(),
            tracer: tracer_provider(cli)?,
        })
    }

    #[must_use]
    pub fn meter(&self) -> &SdkMeterProvider {
        &self.meter
    }

    pub fn init_tracing_subscriber(&self) {
        let logger_layer =
            OpenTelemetryTracingBridge::new(&self.logger).with_filter(external_component_filter());

        let tracer_layer = OpenTelemetryLayer::new(self.tracer.tracer(self.service_name.clone()))
            .with_filter(external_component_filter());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_thread_names(true)
            .with_filter(EnvFilter::from_default_env());

        tracing_subscriber::registry()
            .with(logger_layer)
            .with(tracer_layer)
            .with(fmt_layer)
            .init();
    }

    /// # Errors
    ///
    /// Will return `Err` if open telemetry providers could not shutdown.
    pub fn shutdown(&self) -> Result<()> {
        let mut shutdown_errors = Vec::new();
        if let Err(e) = self.tracer.shutdown() {
            shutdown_errors.push(format!("tracer provider: {e}"));
        }
        if let Err(e) = self.meter.shutdown() {
            shutdown_errors.push(format!("meter provider: {e}"));
        }
        if let Err(e) = self.logger.shutdown() {
            shutdown_errors.push(format!("logger provider: {e}"));
        }
        if !shutdown_errors.is_empty() {
            return Err(Error::Telemetry(format!(
                "failed to shutdown providers: {}",
                shutdown_errors.join(", ")
            )));
        }

        Ok(())
    }
}

/// OpenTelemetry exporters log through `tracing` themselves. Their
/// components are silenced here so exporting does not feed back into the
/// exported logs and traces.
fn external_component_filter() -> EnvFilter {
    ["hyper", "tonic", "h2", "reqwest"]
        .into_iter()
        .filter_map(|component| format!("{component}=off").parse::<Directive>().ok())
        .fold(EnvFilter::from_default_env(), EnvFilter::add_directive)
}

fn resource(cli: &CliArgs) -> opentelemetry_sdk::Resource {
    opentelemetry_sdk::Resource::builder()
        .with_service_name(cli.otel_service_name.clone())
        .build()
}

/*
 * ============================================================================
 * Signals
 * ============================================================================
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Logs,
    Metrics,
    Traces,
}

impl Signal {
    fn name(self) -> &'static str {
        match self {
            Signal::Logs => "LOGS",
            Signal::Metrics => "METRICS",
            Signal::Traces => "TRACES",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Signal::Logs => "/v1/logs",
            Signal::Metrics => "/v1/metrics",
            Signal::Traces => "/v1/traces",
        }
    }

    fn exporters(self, cli: &CliArgs) -> &[CliArgsOtelExporter] {
        let exporters = match self {
            Signal::Logs => &cli.otel_logs_exporter,
            Signal::Metrics => &cli.otel_metrics_exporter,
            Signal::Traces => &cli.otel_traces_exporter,
        };
        exporters.as_deref().unwrap_or_default()
    }

    fn endpoint(self, cli: &CliArgs, protocol: Protocol) -> Result<String> {
        let endpoint = match self {
            Signal::Logs => &cli.otel_exporter_otlp_logs_endpoint,
            Signal::Metrics => &cli.otel_exporter_otlp_metrics_endpoint,
            Signal::Traces => &cli.otel_exporter_otlp_traces_endpoint,
        };

        if let Some(endpoint) = endpoint {
            return Ok(endpoint.clone());
        }

        match (&cli.otel_exporter_otlp_endpoint, protocol) {
            (Some(endpoint), Protocol::Grpc) => Ok(endpoint.clone()),
            (Some(endpoint), Protocol::HttpBinary | Protocol::HttpJson) => {
                Ok(format!("{endpoint}{}", self.path()))
            }
            (None, _) => Err(Error::Telemetry(format!(
                "OTEL_EXPORTER_OTLP_{}_ENDPOINT or OTEL_EXPORTER_OTLP_ENDPOINT must be set",
                self.name()
            ))),
        }
    }

    fn protocol(self, cli: &CliArgs) -> Result<Protocol> {
        let protocol = match self {
            Signal::Logs => cli.otel_exporter_otlp_logs_protocol,
            Signal::Metrics => cli.otel_exporter_otlp_metrics_protocol,
            Signal::Traces => cli.otel_exporter_otlp_traces_protocol,
        };

        protocol
            .or(cli.otel_exporter_otlp_protocol)
            .map(Into::into)
            .ok_or_else(|| {
                Error::Telemetry(format!(
                    "OTEL_EXPORTER_OTLP_{}_PROTOCOL or OTEL_EXPORTER_OTLP_PROTOCOL must be set",
                    self.name()
                ))
            })
    }

    fn timeout(self, cli: &CliArgs) -> Duration {
        let timeout = match self {
            Signal::Logs => cli.otel_exporter_otlp_logs_timeout,
            Signal::Metrics => cli.otel_exporter_otlp_metrics_timeout,
            Signal::Traces => cli.otel_exporter_otlp_traces_timeout,
        };
        Duration::from_millis(timeout.unwrap_or(cli.otel_exporter_otlp_timeout))
    }

    /// Protocol, endpoint and timeout of the OTLP exporter, if selected.
    fn otlp(self, cli: &CliArgs) -> Result<Option<(Protocol, String, Duration)>> {
        if !self.exporters(cli).contains(&CliArgsOtelExporter::Otlp) {
            return Ok(None);
        }

        let protocol = self.protocol(cli)?;
        let endpoint = self.endpoint(cli, protocol)?;
        Ok(Some((protocol, endpoint, self.timeout(cli))))
    }

    fn console(self, cli: &CliArgs) -> bool {
        self.exporters(cli).contains(&CliArgsOtelExporter::Console)
    }
}

fn exporter_error(signal: Signal, error: &impl std::fmt::Display) -> Error {
    Error::Telemetry(format!("{} exporter: {error}", signal.name().to_lowercase()))
}

/*
 * ============================================================================
 * Providers
 * ============================================================================
 */
fn logger_provider(cli: &CliArgs) -> Result<SdkLoggerProvider> {
    let signal = Signal::Logs;
    let mut provider_builder = SdkLoggerProvider::builder().with_resource(resource(cli));

    if signal.console(cli) {
        provider_builder =
            provider_builder.with_simple_exporter(opentelemetry_stdout::LogExporter::default());
    }

    if let Some((protocol, endpoint, timeout)) = signal.otlp(cli)? {
        let exporter = match protocol {
            Protocol::Grpc => opentelemetry_otlp::LogExporter::builder()
                .with_tonic()
                .with_endpoint(endpoint)
                .with_protocol(protocol)
                .with_timeout(timeout)
                .build(),
            Protocol::HttpBinary | Protocol::HttpJson => {
                opentelemetry_otlp::LogExporter::builder()
                    .with_http()
                    .with_endpoint(endpoint)
                    .with_protocol(protocol)
                    .with_timeout(timeout)
                    .build()
            }
        }
        .map_err(|e| exporter_error(signal, &e))?;

        provider_builder = provider_builder.with_batch_exporter(exporter);
    }

    Ok(provider_builder.build())
}

fn meter_provider(cli: &CliArgs) -> Result<SdkMeterProvider> {
    let signal = Signal::Metrics;
    let mut provider_builder = SdkMeterProvider::builder().with_resource(resource(cli));

    if signal.console(cli) {
        provider_builder = provider_builder
            .with_periodic_exporter(opentelemetry_stdout::MetricExporterBuilder::default().build());
    }

    if let Some((protocol, endpoint, timeout)) = signal.otlp(cli)? {
        let exporter = match protocol {
            Protocol::Grpc => opentelemetry_otlp::MetricExporter::builder()
                .with_tonic()
                .with_endpoint(endpoint)
                .with_protocol(protocol)
                .with_timeout(timeout)
                .build(),
            Protocol::HttpBinary | Protocol::HttpJson => {
                opentelemetry_otlp::MetricExporter::builder()
                    .with_http()
                    .with_endpoint(endpoint)
                    .with_protocol(protocol)
                    .with_timeout(timeout)
                    .build()
            }
        }
        .map_err(|e| exporter_error(signal, &e))?;

        provider_builder = provider_builder.with_periodic_exporter(exporter);
    }

    Ok(provider_builder.build())
}

fn tracer_provider(cli: &CliArgs) -> Result<SdkTracerProvider> {
    let signal = Signal::Traces;
    let mut provider_builder = SdkTracerProvider::builder().with_resource(resource(cli));

    if signal.console(cli) {
        provider_builder =
            provider_builder.with_simple_exporter(opentelemetry_stdout::SpanExporter::default());
    }

    if let Some((protocol, endpoint, timeout)) = signal.otlp(cli)? {
        let exporter = match protocol {
            Protocol::Grpc => opentelemetry_otlp::SpanExporter::builder()
                .with_tonic()
                .with_endpoint(endpoint)
                .with_protocol(protocol)
                .with_timeout(timeout)
                .build(),
            Protocol::HttpBinary | Protocol::HttpJson => {
                opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .with_endpoint(endpoint)
                    .with_protocol(protocol)
                    .with_timeout(timeout)
                    .build()
            }
        }
        .map_err(|e| exporter_error(signal, &e))?;

        provider_builder = provider_builder.with_batch_exporter(exporter);
    }

    Ok(provider_builder.build())
}
