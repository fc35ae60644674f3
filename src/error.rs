// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Svg(String),
    Config(String),
    Catalog(String),
    Rotation(RotationError),
}

/// Specific error types for the rotation controller.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RotationError {
    /// A manual selection referenced an index outside the item list.
    /// The controller state is left untouched when this is returned.
    InvalidIndex { requested: usize, count: usize },
}

impl RotationError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RotationError::InvalidIndex { .. } => "error-rotation-invalid-index",
        }
    }
}

impl fmt::Display for RotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationError::InvalidIndex { requested, count } => {
                write!(f, "Index {} out of range for {} items", requested, count)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Rotation(e) => write!(f, "Rotation Error: {}", e),
        }
    }
}

impl From<RotationError> for Error {
    fn from(err: RotationError) -> Self {
        Error::Rotation(err)
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
    fn svg_error_formats_properly() {
        let err = Error::Svg("invalid svg data".into());
        assert_eq!(format!("{}", err), "SVG Error: invalid svg data");
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn catalog_error_formats_properly() {
        let err = Error::Catalog("missing dish name".into());
        assert_eq!(format!("{}", err), "Catalog Error: missing dish name");
    }

    #[test]
    fn rotation_error_converts_to_crate_error() {
        let err: Error = RotationError::InvalidIndex {
            requested: 9,
            count: 6,
        }
        .into();
        match err {
            Error::Rotation(RotationError::InvalidIndex { requested, count }) => {
                assert_eq!(requested, 9);
                assert_eq!(count, 6);
            }
            _ => panic!("expected Rotation variant"),
        }
    }

    #[test]
    fn rotation_error_i18n_key() {
        let err = RotationError::InvalidIndex {
            requested: 3,
            count: 0,
        };
        assert_eq!(err.i18n_key(), "error-rotation-invalid-index");
    }

    #[test]
    fn rotation_error_display_names_both_numbers() {
        let err = RotationError::InvalidIndex {
            requested: 7,
            count: 6,
        };
        let text = format!("{}", err);
        assert!(text.contains('7'));
        assert!(text.contains('6'));
    }
}
