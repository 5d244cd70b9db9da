//! Row assembly: value resolution and line encoding

use crate::Result;
use crate::app::models::AttributeMap;
use crate::app::services::attribute_selector::{SelectedNames, SelectionConfig};
use crate::app::services::csv_codec::encode_line;
use crate::constants::NULL_VALUE;
use tracing::debug;

/// Encoded output for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledRow {
    /// Encoded attribute names, when a header was requested
    pub header: Option<String>,
    /// Encoded attribute values
    pub data: String,
}

impl AssembledRow {
    /// Header and data joined by a separator, or the data alone
    pub fn joined(&self, separator: &str) -> String {
        match &self.header {
            Some(header) => format!("{}{}{}", header, separator, self.data),
            None => self.data.clone(),
        }
    }
}

/// Resolve the selected names against a record and encode them
///
/// A present attribute contributes its value verbatim. A missing one
/// contributes `null` when the configuration asks for it, otherwise the empty
/// string; neither substitute is ever quoted.
///
/// # Arguments
///
/// * `attributes` - The record's attributes
/// * `selected` - Names to emit, in output order
/// * `config` - Selection configuration (schema and null handling)
///
/// # Returns
///
/// The encoded data line and, if enabled, the encoded header line
pub fn assemble_row(
    attributes: &AttributeMap,
    selected: &SelectedNames,
    config: &SelectionConfig,
) -> Result<AssembledRow> {
    let substitute = if config.null_for_empty() {
        NULL_VALUE
    } else {
        ""
    };

    let mut missing = 0;
    let values: Vec<&str> = selected
        .iter()
        .map(|name| {
            attributes.get(name).unwrap_or_else(|| {
                missing += 1;
                substitute
            })
        })
        .collect();

    if missing > 0 {
        debug!(
            "{} selected attribute(s) missing, substituted with {:?}",
            missing, substitute
        );
    }

    let data = encode_line(values)?;
    let header = if config.include_schema() {
        Some(encode_line(selected.iter())?)
    } else {
        None
    };

    Ok(AssembledRow { header, data })
}
