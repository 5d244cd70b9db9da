//! RFC 4180 line encoding
//!
//! Values are written through the `csv` crate with necessary-only quoting:
//! a field is quoted when it contains a comma, a double quote, CR or LF, and
//! embedded quotes are doubled. The writer's record terminator is dropped so
//! the result is a single line without trailing separator.

use crate::{Error, Result};
use csv::{QuoteStyle, Terminator, WriterBuilder};

const TERMINATOR: u8 = b'\n';

/// Check whether a value must be quoted in a CSV field
pub fn needs_quoting(value: &str) -> bool {
    value.contains([',', '"', '\r', '\n'])
}

/// Encode an ordered sequence of values as one CSV line
///
/// Fields are joined with a single comma. An empty sequence and a sequence
/// holding one empty value both encode to the empty string.
///
/// # Arguments
///
/// * `values` - Raw field values in output order
///
/// # Returns
///
/// The encoded line, or `Error::CsvEncoding` if the in-memory writer fails
///
/// # Examples
///
/// ```
/// use attributes_to_csv::app::services::csv_codec::encode_line;
///
/// let line = encode_line(["Malibu Beach", "California, US"]).unwrap();
/// assert_eq!(line, "Malibu Beach,\"California, US\"");
/// ```
pub fn encode_line<I, S>(values: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let values: Vec<S> = values.into_iter().collect();

    // The csv writer renders a zero-byte record as `""`
    match values.as_slice() {
        [] => return Ok(String::new()),
        [only] if only.as_ref().is_empty() => return Ok(String::new()),
        _ => {}
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(TERMINATOR))
        .from_writer(Vec::new());

    writer.write_record(values.iter().map(|value| value.as_ref().as_bytes()))?;

    let mut bytes = writer
        .into_inner()
        .map_err(|e| Error::csv_encoding(format!("Failed to flush CSV writer: {}", e)))?;

    if bytes.last() == Some(&TERMINATOR) {
        bytes.pop();
    }

    String::from_utf8(bytes)
        .map_err(|e| Error::csv_encoding(format!("Encoded line is not valid UTF-8: {}", e)))
}
