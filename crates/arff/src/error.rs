//! Error types for ARFF codec operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading or writing ARFF files.
#[derive(Debug, Error)]
pub enum ArffError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Malformed header directive.
    #[error("header parse error at line {line}: {message}")]
    HeaderParse { line: usize, message: String },

    /// Attribute type token that resolves to no known type.
    #[error("invalid attribute type '{token}' at line {line}")]
    InvalidAttributeType { line: usize, token: String },

    /// Data row field count does not match the header attribute count.
    #[error("row at line {line} has {actual} values, header declares {expected}")]
    RowArity {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// Numeric or integer field text that cannot be parsed.
    #[error("cannot parse {expected} value '{field}' at line {line}")]
    ValueParse {
        line: usize,
        expected: &'static str,
        field: String,
    },

    /// Nominal field value outside the attribute's declared set.
    #[error("value '{value}' is not in the declared set of nominal attribute '{attribute}' (line {line})")]
    NominalViolation {
        line: usize,
        attribute: String,
        value: String,
    },

    /// Binding failure between a row and a record shape.
    #[error(transparent)]
    Bind(#[from] BindError),

    /// I/O error from the underlying line source or sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while resolving attribute names against a record shape.
#[derive(Debug, Error)]
pub enum BindError {
    /// No field on the record matches the attribute name.
    #[error("no field matching attribute '{attribute}' on record type {record}")]
    UnboundAttribute {
        attribute: String,
        record: &'static str,
    },

    /// A map-shaped record is missing a required attribute key.
    #[error("missing key '{attribute}' in record map")]
    MissingKey { attribute: String },

    /// Decoded value kind does not fit the field's declared type.
    #[error("type mismatch for field '{field}': expected {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Result type alias for ARFF operations.
pub type Result<T> = std::result::Result<T, ArffError>;

impl ArffError {
    /// Create a HeaderParse error.
    pub fn header_parse(line: usize, message: impl Into<String>) -> Self {
        Self::HeaderParse {
            line,
            message: message.into(),
        }
    }

    /// Create an InvalidAttributeType error.
    pub fn invalid_attribute_type(line: usize, token: impl Into<String>) -> Self {
        Self::InvalidAttributeType {
            line,
            token: token.into(),
        }
    }

    /// Create a ValueParse error.
    pub fn value_parse(line: usize, expected: &'static str, field: impl Into<String>) -> Self {
        Self::ValueParse {
            line,
            expected,
            field: field.into(),
        }
    }

    /// Create a NominalViolation error.
    pub fn nominal_violation(
        line: usize,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::NominalViolation {
            line,
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}

impl BindError {
    /// Create an UnboundAttribute error.
    pub fn unbound(attribute: impl Into<String>, record: &'static str) -> Self {
        Self::UnboundAttribute {
            attribute: attribute.into(),
            record,
        }
    }

    /// Create a MissingKey error.
    pub fn missing_key(attribute: impl Into<String>) -> Self {
        Self::MissingKey {
            attribute: attribute.into(),
        }
    }

    /// Create a TypeMismatch error.
    pub fn type_mismatch(field: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ArffError::header_parse(3, "attribute 'a' missing a type token");
        assert_eq!(
            format!("{err}"),
            "header parse error at line 3: attribute 'a' missing a type token"
        );

        let err = ArffError::RowArity {
            line: 12,
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            format!("{err}"),
            "row at line 12 has 3 values, header declares 2"
        );
    }

    #[test]
    fn test_bind_error_display() {
        let err = BindError::missing_key("a_int");
        assert_eq!(format!("{err}"), "missing key 'a_int' in record map");

        let err = BindError::type_mismatch("class", "string", "numeric");
        assert_eq!(
            format!("{err}"),
            "type mismatch for field 'class': expected string, got numeric"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let arff_err: ArffError = io_err.into();
        assert!(matches!(arff_err, ArffError::Io(_)));
    }
}
