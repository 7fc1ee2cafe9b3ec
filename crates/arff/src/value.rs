//! Decoded data values.

use std::fmt;

/// One decoded data field.
///
/// Missing values are a distinct variant rather than an overloaded NaN
/// sentinel, so that a `?` in a non-floating-point column stays
/// unambiguous. Conversions into host types map `Missing` to `f64::NAN`
/// or `None` as appropriate (see the `record` module).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric or real field.
    Numeric(f64),
    /// An integer field.
    Integer(i64),
    /// A string field, kept verbatim.
    Text(String),
    /// A nominal field; the token is one of the attribute's declared values.
    Nominal(String),
    /// The `?` missing-value marker.
    Missing,
}

impl Value {
    /// Short name of the value's kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Numeric(_) => "numeric",
            Self::Integer(_) => "integer",
            Self::Text(_) => "string",
            Self::Nominal(_) => "nominal",
            Self::Missing => "missing",
        }
    }

    /// Whether this is the missing marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// The value as an `f64`, if it is numeric. `Missing` yields NaN.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(n) => Some(*n),
            Self::Integer(i) => Some(*i as f64),
            Self::Missing => Some(f64::NAN),
            _ => None,
        }
    }

    /// The value as an `i64`, if it is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The value as text, if it is a string or nominal token.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Nominal(s) => Some(s),
            _ => None,
        }
    }
}

/// Renders the wire form of the value: `?` for missing (and for NaN,
/// which has no other textual representation in the format).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) if n.is_nan() => f.write_str("?"),
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Text(s) | Self::Nominal(s) => f.write_str(s),
            Self::Missing => f.write_str("?"),
        }
    }
}
