use thiserror::Error;

/// Failures that stop the server before it starts accepting requests.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid value {value:?} for {variable}: {source}")]
    InvalidAddress {
        variable: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("denylist rule `{rule}` failed to compile: {source}")]
    InvalidRule {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },
}
