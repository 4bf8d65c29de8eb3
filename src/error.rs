// SPDX-License-Identifier: MPL-2.0
use crate::report::ReportError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Logging Error: {0}")]
    Logging(String),
    #[error("Backend Error: {0}")]
    Backend(String),
    #[error("Report Error: {0}")]
    Report(#[from] ReportError),
    #[error("Toast Error: {0}")]
    Toast(#[from] ToastError),
}

/// Failures of the toast context.
///
/// Never shown to the end user; the free-function façade turns it into a
/// log line and an empty id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ToastError {
    #[error("toast context not initialized")]
    Uninitialized,
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
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
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
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn toml_parse_error_becomes_config_error() {
        let parse: std::result::Result<toml::Table, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn uninitialized_toast_error_message() {
        let err: Error = ToastError::Uninitialized.into();
        assert_eq!(err.to_string(), "Toast Error: toast context not initialized");
    }

    #[test]
    fn report_error_wraps_validation_message() {
        let err: Error = ReportError::MissingDescription.into();
        assert_eq!(err.to_string(), "Report Error: Please provide a description");
    }
}
