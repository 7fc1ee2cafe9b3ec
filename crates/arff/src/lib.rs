//! ARFF (Attribute-Relation File Format) reader and writer.
//!
//! This crate decodes and encodes the line-oriented, self-describing
//! tabular text format: a comment preamble, an `@relation` name, ordered
//! `@attribute` declarations (numeric, real, integer, string, or nominal
//! with a closed value set), then `@data` followed by comma-separated rows.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use std::io::Cursor;
//! use arff::{Decoder, Encoder, Header, Attribute, Value};
//!
//! let mut header = Header::new("weather").with_comment("toy dataset");
//! header.push(Attribute::numeric("temperature"));
//! header.push(Attribute::nominal("outlook", ["sunny", "rainy"]));
//!
//! // Encode two records
//! let mut buffer = Vec::new();
//! let mut encoder = Encoder::new(&mut buffer, header);
//! let mut record = BTreeMap::new();
//! record.insert("temperature".to_string(), Value::Numeric(21.5));
//! record.insert("outlook".to_string(), Value::Nominal("sunny".into()));
//! encoder.encode(&record).unwrap();
//! encoder.flush().unwrap();
//! drop(encoder);
//!
//! // Decode them back
//! let mut decoder = Decoder::new(Cursor::new(&buffer)).unwrap();
//! assert_eq!(decoder.header().relation, "weather");
//! let mut decoded = BTreeMap::new();
//! assert!(decoder.decode(&mut decoded).unwrap());
//! assert_eq!(decoded["temperature"], Value::Numeric(21.5));
//! ```
//!
//! # Missing values
//!
//! The `?` token decodes to [`Value::Missing`], a distinct variant rather
//! than a NaN sentinel, so a missing integer or nominal field stays
//! unambiguous. Conversions into host types map it back to `f64::NAN` or
//! `None` (see [`record`]).
//!
//! Decoder and encoder instances are single-pass and synchronous; sharing
//! one across tasks requires external synchronization.

mod decoder;
mod encoder;
mod error;
mod header;
pub mod record;
mod value;

// Re-export error types
pub use error::{ArffError, BindError, Result};

// Re-export the header model
pub use header::{Attribute, AttributeType, Header};

// Re-export decoder and encoder
pub use decoder::{COMMENT_MARKER, Decoder, MISSING_TOKEN, Rows};
pub use encoder::Encoder;

// Re-export binder traits and the decoded value type
pub use record::{RecordSink, RecordSource};
pub use value::Value;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
