use axum::http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidInput(String),

    #[error("Classifier error: {0}")]
    Upstream(String),

    #[error("Timed out waiting for the classifier service")]
    UpstreamTimeout,

    #[error("HTTP error: {0}")]
    Http(#[from] axum::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Maps the error taxonomy onto response status codes: client input
    /// errors are 4xx, any failure to reach or trust the upstream
    /// classifier is 502, everything else is 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Upstream(_) | Self::UpstreamTimeout | Self::Network(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to echo back to the caller. Internal failures get a
    /// generic line; the original error is logged server-side instead.
    pub fn public_message(&self) -> String {
        match self.status_code() {
            StatusCode::INTERNAL_SERVER_ERROR => "Internal classification error".to_string(),
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_errors_map_to_bad_gateway() {
        assert_eq!(
            Error::config("ML_API_URL is not set").status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            Error::upstream("classifier responded with status 503").status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(Error::UpstreamTimeout.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn internal_errors_hide_details_from_callers() {
        let err = Error::internal("stub failed on rule 3");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal classification error");
    }

    #[test]
    fn client_errors_echo_their_message() {
        let err = Error::invalid_input("Missing \"description\" field");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.public_message(),
            "Invalid request: Missing \"description\" field"
        );
    }
}
