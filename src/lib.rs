#![warn(clippy::pedantic)]

pub mod api;
pub mod cli;
pub mod conversion;
pub mod conversion_webhook;
pub mod crd;
pub mod http_server;
pub mod https_server;
mod kubernetes;
pub mod metrics;
pub mod otel;

/*
 * ============================================================================
 * Error
 * ============================================================================
 */
#[derive(Debug)]
pub enum Error {
    Crd(kube::core::crd::MergeError),
    Io(std::io::Error),
    MalformedRestoreData(String),
    MissingObjectKey(&'static str),
    Serde(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    Telemetry(String),
    UnsupportedConversion {
        kind: String,
        from: String,
        to: String,
    },
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Crd(e) => write!(f, "crd error: {e}"),
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::MalformedRestoreData(e) => write!(f, "malformed restore data: {e}"),
            Error::MissingObjectKey(key) => write!(f, "missing object key: {key}"),
            Error::Serde(e) => write!(f, "serde error: {e}"),
            Error::SerdeYaml(e) => write!(f, "serde yaml error: {e}"),
            Error::Telemetry(e) => write!(f, "telemetry error: {e}"),
            Error::UnsupportedConversion { kind, from, to } => {
                write!(f, "unsupported conversion of {kind} from {from} to {to}")
            }
        }
    }
}

/*
 * ============================================================================
 * Result
 * ============================================================================
 */
pub type Result<T, E = Error> = std::result::Result<T, E>;
