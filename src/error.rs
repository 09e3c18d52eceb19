// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced anywhere in the application.
///
/// Variants carry their source rendered to a `String` so the type stays
/// `Clone` and can travel inside Iced messages.
#[derive(Debug, Clone)]
pub enum Error {
    /// Transport-level failure: connection refused, DNS, timeout.
    Http(String),
    /// The endpoint answered with a non-success status.
    Api(String),
    /// The payload could not be decoded (malformed JSON, broken image data).
    Decode(String),
    Config(String),
    Io(String),
}

impl Error {
    /// Returns the i18n message key for the user-visible rendering of this
    /// error. Every fetch-path failure collapses into the same generic
    /// feed message; only the technical details differ.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Http(_) | Error::Api(_) | Error::Decode(_) => "feed-error-fetch",
            Error::Config(_) | Error::Io(_) => "error-generic",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_http_error() {
        let err = Error::Http("connection refused".to_string());
        assert_eq!(format!("{}", err), "HTTP Error: connection refused");
    }

    #[test]
    fn display_formats_api_error() {
        let err = Error::Api("HTTP status: 503".to_string());
        assert_eq!(format!("{}", err), "API Error: HTTP status: 503");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_json_error_produces_decode_variant() {
        let json_error = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: Error = json_error.into();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn fetch_path_errors_share_the_generic_feed_key() {
        assert_eq!(Error::Http("x".into()).i18n_key(), "feed-error-fetch");
        assert_eq!(Error::Api("x".into()).i18n_key(), "feed-error-fetch");
        assert_eq!(Error::Decode("x".into()).i18n_key(), "feed-error-fetch");
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }
}
