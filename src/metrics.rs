use opentelemetry::{
    KeyValue,
    metrics::{Counter, Histogram, MeterProvider as _},
};

use crate::Error;

#[derive(Clone)]
pub struct Metrics {
    conversion_errors_total: Counter<u64>,
    conversions_total: Counter<u64>,
    conversion_duration_seconds: Histogram<f64>,
}

impl Metrics {
    #[must_use]
    pub fn new(provider: &opentelemetry_sdk::metrics::SdkMeterProvider) -> Self {
        let meter = provider.meter("capo-conversion-webhook");

        let capo_conversion_errors_total = meter
            .u64_counter("capo_conversion_errors_total")
            .with_description("The total number of failed object conversions.")
            .build();

        let capo_conversions_total = meter
            .u64_counter("capo_conversions_total")
            .with_description("The total number of object conversions.")
            .build();

        let capo_conversion_duration_seconds = meter
            .f64_histogram("capo_conversion_duration_seconds")
            .with_description("The object conversion duration in seconds.")
            .with_unit("s")
            .build();

        Self {
            conversion_errors_total: capo_conversion_errors_total,
            conversions_total: capo_conversions_total,
            conversion_duration_seconds: capo_conversion_duration_seconds,
        }
    }

    #[must_use]
    pub fn count_and_measure(&self, kind: &str, from: &str, to: &str) -> ConversionTimer {
        let attributes = attributes(kind, from, to);
        self.conversions_total.add(1, &attributes);
        ConversionTimer {
            start: std::time::Instant::now(),
            metric: self.conversion_duration_seconds.clone(),
            attributes,
        }
    }

    pub fn conversion_failure(&self, kind: &str, from: &str, to: &str, error: &Error) {
        let error = match error {
            Error::MalformedRestoreData(_) => "malformed restore data",
            Error::MissingObjectKey(_) => "missing object key",
            Error::Serde(_) => "serde",
            Error::UnsupportedConversion { .. } => "unsupported conversion",
            Error::Crd(_) | Error::Io(_) | Error::SerdeYaml(_) | Error::Telemetry(_) => "other",
        };
        let mut attributes = attributes(kind, from, to);
        attributes.push(KeyValue::new("error", error));
        self.conversion_errors_total.add(1, &attributes);
    }
}

fn attributes(kind: &str, from: &str, to: &str) -> Vec<KeyValue> {
    vec![
        KeyValue::new("kind", kind.to_string()),
        KeyValue::new("from", from.to_string()),
        KeyValue::new("to", to.to_string()),
    ]
}

pub struct ConversionTimer {
    start: std::time::Instant,
    metric: Histogram<f64>,
    attributes: Vec<KeyValue>,
}

impl Drop for ConversionTimer {
    fn drop(&mut self) {
        self.metric
            .record(self.start.elapsed().as_secs_f64(), &self.attributes);
    }
}
