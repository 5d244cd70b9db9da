//! Delivery of encoded lines onto a record

use crate::app::models::FlowRecord;
use crate::app::services::attribute_selector::Destination;
use crate::constants::{
    CSV_DATA_ATTRIBUTE, CSV_MIME_TYPE, CSV_SCHEMA_ATTRIBUTE, LINE_SEPARATOR, MIME_TYPE_ATTRIBUTE,
};

use super::assembler::AssembledRow;

/// Write an assembled row to its destination on the record
///
/// - `NewField` stores the data line as `CSVData` and, when present, the
///   header line as `CSVSchema`. Body and `mime.type` are left alone.
/// - `ReplaceBody` replaces the body with the header line, the native line
///   separator and the data line (or the data line alone) and sets
///   `mime.type` to `text/csv`. No CSV attributes are added.
pub fn write_destination(
    mut record: FlowRecord,
    row: AssembledRow,
    destination: Destination,
) -> FlowRecord {
    match destination {
        Destination::NewField => {
            record.attributes.insert(CSV_DATA_ATTRIBUTE, row.data);
            if let Some(header) = row.header {
                record.attributes.insert(CSV_SCHEMA_ATTRIBUTE, header);
            }
        }
        Destination::ReplaceBody => {
            record.content = row.joined(LINE_SEPARATOR);
            record
                .attributes
                .insert(MIME_TYPE_ATTRIBUTE, CSV_MIME_TYPE);
        }
    }

    record
}
