//! ARFF encoder.
//!
//! The header is emitted lazily on the first [`Encoder::encode`] call and
//! at most once per instance; attributes may be appended to the header up
//! to that point. Each subsequent call writes one comma-separated data row
//! in header-attribute order. Partial output already flushed to the sink
//! is not rolled back on error.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::decoder::COMMENT_MARKER;
use crate::error::{ArffError, Result};
use crate::header::Header;
use crate::record::RecordSource;
use crate::value::Value;

/// ARFF encoder over a line sink.
///
/// Single-producer; not internally synchronized.
pub struct Encoder<W: Write> {
    header: Header,
    writer: BufWriter<W>,
    header_written: bool,
    rows_written: usize,
}

impl<W: Write> Encoder<W> {
    /// Create an encoder that will write `header` before the first row.
    pub fn new(writer: W, header: Header) -> Self {
        Self {
            header,
            writer: BufWriter::new(writer),
            header_written: false,
            rows_written: 0,
        }
    }

    /// The header to be written.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Mutable access to the header.
    ///
    /// Appending attributes only takes effect before the first `encode`
    /// call; once the header has been written it is fixed.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Encode one record as a data row, binding values by attribute name.
    ///
    /// Writes the header first if it has not been written yet. For a
    /// map-shaped source every attribute name must be present as a key;
    /// extra keys are ignored.
    pub fn encode<T: RecordSource + ?Sized>(&mut self, source: &T) -> Result<()> {
        let mut values = Vec::with_capacity(self.header.attributes.len());
        for attribute in &self.header.attributes {
            values.push(source.get(&attribute.name)?);
        }
        self.encode_row(&values)
    }

    /// Write one row of positional values, in attribute order.
    pub fn encode_row(&mut self, values: &[Value]) -> Result<()> {
        if values.len() != self.header.attributes.len() {
            return Err(ArffError::RowArity {
                line: self.rows_written + 1,
                expected: self.header.attributes.len(),
                actual: values.len(),
            });
        }
        if !self.header_written {
            self.write_header()?;
        }
        for (idx, value) in values.iter().enumerate() {
            if idx > 0 {
                self.writer.write_all(b",")?;
            }
            write!(self.writer, "{value}")?;
        }
        self.writer.write_all(b"\n")?;
        self.rows_written += 1;
        Ok(())
    }

    /// Flush buffered output to the sink.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Emit the comment block, relation, attribute directives, and the
    /// `@data` directive. Runs at most once per instance.
    fn write_header(&mut self) -> Result<()> {
        for line in self.header.comment.lines() {
            writeln!(self.writer, "{COMMENT_MARKER} {line}")?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "@relation {}", self.header.relation)?;
        writeln!(self.writer)?;
        for attribute in &self.header.attributes {
            writeln!(
                self.writer,
                "@attribute {} {}",
                attribute.name,
                attribute.type_spec()
            )?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "@data")?;
        self.header_written = true;
        debug!(
            relation = %self.header.relation,
            attributes = self.header.attributes.len(),
            "wrote header"
        );
        Ok(())
    }
}

impl Encoder<File> {
    /// Create an ARFF file for encoding.
    pub fn create(path: &Path, header: Header) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file, header))
    }
}
