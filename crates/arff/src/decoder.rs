//! ARFF decoder.
//!
//! Parses the header once at construction, then yields one row per
//! [`Decoder::decode`] call. The header parser is a three-state machine
//! over input lines: a comment preamble, the directive section, and the
//! data section. The first non-comment line ends the preamble and is
//! re-processed as a directive; no line is dropped.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{ArffError, Result};
use crate::header::{Attribute, AttributeType, Header};
use crate::record::RecordSink;
use crate::value::Value;

/// Comment marker at line start.
pub const COMMENT_MARKER: char = '%';

/// Missing-value token in a data field.
pub const MISSING_TOKEN: &str = "?";

const TOK_RELATION: &str = "@relation";
const TOK_ATTRIBUTE: &str = "@attribute";
const TOK_DATA: &str = "@data";

/// Header parser state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Declaring,
    Data,
}

/// ARFF decoder over a line source.
///
/// Construction parses the header eagerly and fails if it is malformed.
/// The instance is single-consumer and not internally synchronized.
#[derive(Debug)]
pub struct Decoder<R: Read> {
    header: Header,
    reader: BufReader<R>,
    section: Section,
    line: usize,
    // scratch line buffer, reused across reads
    buf: String,
}

impl<R: Read> Decoder<R> {
    /// Create a decoder, consuming and parsing the header.
    ///
    /// # Errors
    /// Fails if the header is malformed or the input ends before the
    /// `@data` directive. Header-phase failures are fatal: no decoder
    /// instance is returned.
    pub fn new(reader: R) -> Result<Self> {
        let mut decoder = Self {
            header: Header::default(),
            reader: BufReader::new(reader),
            section: Section::Preamble,
            line: 0,
            buf: String::new(),
        };
        decoder.parse_header()?;
        debug!(
            relation = %decoder.header.relation,
            attributes = decoder.header.attributes.len(),
            "parsed header"
        );
        Ok(decoder)
    }

    /// The parsed header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Number of the most recently read line (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    /// Decode the next data row into `target` by attribute name.
    ///
    /// Returns `Ok(true)` when a row was decoded, `Ok(false)` when the
    /// input is exhausted. Comment and blank lines inside the data section
    /// are skipped. A row-phase error leaves the decoder usable for the
    /// next call.
    pub fn decode<T: RecordSink + ?Sized>(&mut self, target: &mut T) -> Result<bool> {
        let Some(row) = self.decode_row()? else {
            return Ok(false);
        };
        for (attribute, value) in self.header.attributes.iter().zip(row) {
            target.put(&attribute.name, value)?;
        }
        Ok(true)
    }

    /// Decode the next data row positionally, one value per attribute.
    ///
    /// Returns `Ok(None)` when the input is exhausted.
    pub fn decode_row(&mut self) -> Result<Option<Vec<Value>>> {
        loop {
            if !self.fill_line()? {
                return Ok(None);
            }
            let line = self.buf.trim();
            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }
            let row = parse_row(line, &self.header.attributes, self.line)?;
            return Ok(Some(row));
        }
    }

    /// Iterate over the remaining data rows.
    pub fn rows(&mut self) -> Rows<'_, R> {
        Rows { decoder: self }
    }

    /// Read the next line into the scratch buffer, stripping the line
    /// terminator. Returns false at end of input.
    fn fill_line(&mut self) -> Result<bool> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(false);
        }
        self.line += 1;
        while self.buf.ends_with('\n') || self.buf.ends_with('\r') {
            self.buf.pop();
        }
        Ok(true)
    }

    /// Run the header state machine until the `@data` directive.
    fn parse_header(&mut self) -> Result<()> {
        let mut comment_lines: Vec<String> = Vec::new();
        while self.section != Section::Data {
            if !self.fill_line()? {
                return Err(ArffError::header_parse(
                    self.line,
                    "input ended before @data directive",
                ));
            }
            let raw = std::mem::take(&mut self.buf);
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            match self.section {
                Section::Preamble => {
                    if let Some(rest) = line.strip_prefix(COMMENT_MARKER) {
                        comment_lines.push(rest.strip_prefix(' ').unwrap_or(rest).to_string());
                    } else {
                        // First non-comment line: seal the comment block and
                        // re-process this line as a directive.
                        self.header.comment = comment_lines.join("\n");
                        self.section = Section::Declaring;
                        self.parse_directive(line)?;
                    }
                }
                Section::Declaring => self.parse_directive(line)?,
                Section::Data => unreachable!("loop exits once the data section is reached"),
            }
        }
        Ok(())
    }

    /// Parse one directive line: `@relation`, `@attribute`, or `@data`.
    fn parse_directive(&mut self, line: &str) -> Result<()> {
        let lower = line.to_ascii_lowercase();
        if lower.starts_with(TOK_RELATION) {
            self.header.relation = line[TOK_RELATION.len()..].trim().to_string();
            Ok(())
        } else if lower.starts_with(TOK_ATTRIBUTE) {
            let attribute = parse_attribute(line[TOK_ATTRIBUTE.len()..].trim(), self.line)?;
            self.header.attributes.push(attribute);
            Ok(())
        } else if lower.starts_with(TOK_DATA) {
            self.section = Section::Data;
            Ok(())
        } else {
            Err(ArffError::header_parse(
                self.line,
                format!("unrecognized directive: {line}"),
            ))
        }
    }
}

impl Decoder<File> {
    /// Open an ARFF file for decoding.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ArffError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ArffError::Io(e)
            }
        })?;
        Self::new(file)
    }
}

/// Iterator over positionally decoded rows.
pub struct Rows<'a, R: Read> {
    decoder: &'a mut Decoder<R>,
}

impl<R: Read> Iterator for Rows<'_, R> {
    type Item = Result<Vec<Value>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.decoder.decode_row().transpose()
    }
}

/// Parse the remainder of an attribute directive: name, then type-spec.
///
/// The name is the first whitespace token; the type-spec is everything
/// after it, so nominal value lists may contain spaces. Tabs are treated
/// as token separators.
fn parse_attribute(rest: &str, line: usize) -> Result<Attribute> {
    let rest = rest.replace('\t', " ");
    let rest = rest.trim();
    let Some((name, spec)) = rest.split_once(' ') else {
        if rest.is_empty() {
            return Err(ArffError::header_parse(line, "attribute directive missing a name"));
        }
        return Err(ArffError::header_parse(
            line,
            format!("attribute '{rest}' missing a type token"),
        ));
    };
    let spec = spec.trim();
    let Some(attr_type) = AttributeType::classify(spec) else {
        return Err(ArffError::invalid_attribute_type(line, spec));
    };
    let values = if spec.starts_with('{') {
        parse_nominal_values(spec, line)?
    } else {
        Vec::new()
    };
    Ok(Attribute::new(name, attr_type, values))
}

/// Split a brace-enclosed, comma-separated value list into trimmed tokens,
/// preserving declaration order.
fn parse_nominal_values(spec: &str, line: usize) -> Result<Vec<String>> {
    let inner = spec
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or_else(|| {
            ArffError::header_parse(line, format!("malformed nominal value list: {spec}"))
        })?;
    Ok(inner
        .split(',')
        .map(|value| value.trim().to_string())
        .collect())
}

/// Parse one data line into a typed value per attribute.
fn parse_row(line: &str, attributes: &[Attribute], lineno: usize) -> Result<Vec<Value>> {
    let fields: Vec<&str> = line
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect();
    if fields.len() != attributes.len() {
        return Err(ArffError::RowArity {
            line: lineno,
            expected: attributes.len(),
            actual: fields.len(),
        });
    }
    fields
        .iter()
        .zip(attributes)
        .map(|(field, attribute)| parse_value(field, attribute, lineno))
        .collect()
}

/// Coerce one field per the attribute's declared type.
fn parse_value(field: &str, attribute: &Attribute, lineno: usize) -> Result<Value> {
    match attribute.attr_type {
        AttributeType::Numeric | AttributeType::Real => {
            if field == MISSING_TOKEN {
                return Ok(Value::Missing);
            }
            field
                .parse::<f64>()
                .map(Value::Numeric)
                .map_err(|_| ArffError::value_parse(lineno, "numeric", field))
        }
        AttributeType::Integer => {
            if field == MISSING_TOKEN {
                return Ok(Value::Missing);
            }
            field
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| ArffError::value_parse(lineno, "integer", field))
        }
        AttributeType::Nominal => {
            if field == MISSING_TOKEN {
                Ok(Value::Missing)
            } else if attribute.accepts(field) {
                Ok(Value::Nominal(field.to_string()))
            } else {
                Err(ArffError::nominal_violation(lineno, &attribute.name, field))
            }
        }
        AttributeType::String => Ok(Value::Text(field.to_string())),
    }
}
