// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Options(OptionsError),
    /// The detector could not analyze the image or its annotations.
    Detection(String),
}

/// Reasons an image options provider could not produce a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// The configured examples directory does not exist or is not a directory.
    MissingDirectory(String),

    /// The directory exists but could not be read.
    Unreadable(String),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::MissingDirectory(dir) => {
                write!(f, "Examples directory not found: {}", dir)
            }
            OptionsError::Unreadable(msg) => write!(f, "Examples directory unreadable: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Options(e) => write!(f, "Options Error: {}", e),
            Error::Detection(e) => write!(f, "Detection Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<OptionsError> for Error {
    fn from(err: OptionsError) -> Self {
        Error::Options(err)
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
    fn display_formats_detection_error() {
        let err = Error::Detection("bad annotations".to_string());
        assert_eq!(err.to_string(), "Detection Error: bad annotations");
    }

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
    fn options_error_wraps_into_error() {
        let err: Error = OptionsError::MissingDirectory("/nowhere".into()).into();
        assert!(matches!(
            err,
            Error::Options(OptionsError::MissingDirectory(ref dir)) if dir == "/nowhere"
        ));
        assert!(format!("{}", err).contains("/nowhere"));
    }
}
