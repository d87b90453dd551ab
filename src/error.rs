use thiserror::Error;

/// Error represents failures raised by this crate. Absent optional payload
/// data is not an error: derived accessors resolve it to `None` or an empty
/// sequence instead.
#[derive(Debug, Error)]
pub enum Error {
    #[error("the environment variable was not defined or not unicode")]
    EnvVar(#[from] std::env::VarError),
    #[error("could not parse the endpoint URL")]
    UrlParse(#[from] url::ParseError),
    #[error("failed to request the API")]
    Request(#[from] reqwest::Error),
    #[error("could not parse the API response")]
    ResponseParse(serde_json::Error),
    #[error("API responded with status {0}: {1}")]
    ResponseStatus(u16, String),
    #[error("could not parse the timestamp")]
    Timestamp(#[from] chrono::ParseError),
}
