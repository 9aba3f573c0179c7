// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    /// A file or directory handed to the image library does not exist.
    NotFound(PathBuf),
    /// A logical image name was looked up without ever being registered.
    UnknownImage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::NotFound(path) => write!(f, "File not found: {}", path.display()),
            Error::UnknownImage(name) => write!(f, "Unknown image name: {}", name),
        }
    }
}

impl std::error::Error for Error {}

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
    fn svg_error_from_string() {
        let err: Error = "invalid svg data".to_string().into();
        match err {
            Error::Svg(message) => assert!(message.contains("invalid svg")),
            _ => panic!("expected Svg variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn not_found_names_the_offending_path() {
        let err = Error::NotFound(PathBuf::from("/nonexistent.png"));
        assert_eq!(format!("{}", err), "File not found: /nonexistent.png");
    }

    #[test]
    fn unknown_image_names_the_logical_name() {
        let err = Error::UnknownImage("nope".into());
        assert!(format!("{}", err).contains("nope"));
    }

    #[test]
    fn toml_parse_failure_maps_to_config_variant() {
        let parse_err = toml::from_str::<toml::Table>("= oops").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
