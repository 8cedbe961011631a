use thiserror::Error;

/// Errors raised by the GitHub organization client.
#[derive(Error, Debug)]
pub enum Error {
    /// A key in a nested lookup was absent, or the value before it was not an object.
    #[error("missing key: {0}")]
    MissingKey(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API answered with JSON of the wrong shape (e.g. an object where a list was expected).
    #[error("unexpected payload: {0}")]
    UnexpectedPayload(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_display() {
        let err = Error::MissingKey("repos_url".to_string());
        assert_eq!(err.to_string(), "missing key: repos_url");
    }

    #[test]
    fn test_unexpected_payload_display() {
        let err = Error::UnexpectedPayload("expected an array".to_string());
        assert!(err.to_string().starts_with("unexpected payload"));
    }
}
