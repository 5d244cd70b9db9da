//! Record converter implementation and batch orchestration
//!
//! This module contains the `RecordConverter`, which applies one shared
//! selection configuration to any number of records. Every conversion is
//! independent, so batches are split into chunks and run on the blocking
//! pool, then reassembled in input order.

use crate::app::models::FlowRecord;
use crate::app::services::attribute_selector::{Destination, SelectionConfig, select_attributes};
use crate::constants::MIN_RECORDS_PER_WORKER;
use crate::{Error, Result};
use futures::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{
    assembler::{AssembledRow, assemble_row},
    destination::write_destination,
    stats::{ConversionResult, ConversionStats},
};

/// Outcome route of a converted record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The record carries its CSV output
    Success,
    /// The record is returned unchanged
    Failure,
}

/// A record together with the route it was sent to
#[derive(Debug, Clone)]
pub struct RoutedRecord {
    /// Route taken
    pub route: Route,
    /// Converted record on success, original record on failure
    pub record: FlowRecord,
    /// Number of CSV fields written, zero on failure
    pub field_count: usize,
    /// Failure reason
    pub error: Option<String>,
}

impl RoutedRecord {
    /// Whether the record went to the success route
    pub fn is_success(&self) -> bool {
        self.route == Route::Success
    }
}

/// Attribute-to-CSV converter for flow records
///
/// # Example
///
/// ```rust
/// use attributes_to_csv::app::models::{AttributeMap, FlowRecord};
/// use attributes_to_csv::app::services::attribute_selector::{Destination, SelectionConfig};
/// use attributes_to_csv::app::services::record_converter::RecordConverter;
///
/// # fn example() -> attributes_to_csv::Result<()> {
/// let config = SelectionConfig::default()
///     .with_attribute_list("beach-name,beach-location")
///     .with_core_attributes_included(false)
///     .with_destination(Destination::ReplaceBody);
/// let converter = RecordConverter::new(config);
///
/// let attributes: AttributeMap = [("beach-name", "Malibu Beach"), ("beach-location", "California, US")]
///     .into_iter()
///     .collect();
/// let record = converter.convert(FlowRecord::new(attributes, ""))?;
///
/// assert_eq!(record.content, "Malibu Beach,\"California, US\"");
/// assert_eq!(record.attribute("mime.type"), Some("text/csv"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RecordConverter {
    /// Selection configuration shared by all conversions
    config: Arc<SelectionConfig>,
}

impl RecordConverter {
    /// Create a new converter from a selection configuration
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Selection configuration in use
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Convert a single record
    ///
    /// # Arguments
    ///
    /// * `record` - Record whose attributes are encoded
    ///
    /// # Returns
    ///
    /// The record with its CSV output written to the configured destination
    pub fn convert(&self, record: FlowRecord) -> Result<FlowRecord> {
        let (_, row) = self.encode(&record)?;
        Ok(write_destination(record, row, self.config.destination()))
    }

    /// Convert a single record, routing it to success or failure
    ///
    /// A record that cannot be encoded is routed to failure unchanged.
    pub fn route(&self, record: FlowRecord) -> RoutedRecord {
        let outcome = self.encode(&record);
        route_outcome(record, outcome, self.config.destination())
    }

    /// Convert a batch of records across worker threads
    ///
    /// Records are split into contiguous chunks, converted on tokio's
    /// blocking pool and returned in input order.
    ///
    /// # Arguments
    ///
    /// * `records` - Input records
    /// * `workers` - Maximum number of concurrent chunks
    ///
    /// # Returns
    ///
    /// A `ConversionResult` with every routed record and batch statistics
    pub async fn convert_batch(
        &self,
        records: Vec<FlowRecord>,
        workers: usize,
    ) -> Result<ConversionResult> {
        let mut stats = ConversionStats::new();
        stats.total_input = records.len();

        let chunk_size = chunk_size_for(records.len(), workers);
        info!(
            "Converting {} records in chunks of {}",
            records.len(),
            chunk_size
        );

        let mut remaining = records.into_iter();
        let mut handles = Vec::new();
        loop {
            let chunk: Vec<FlowRecord> = remaining.by_ref().take(chunk_size).collect();
            if chunk.is_empty() {
                break;
            }

            let converter = self.clone();
            handles.push(tokio::task::spawn_blocking(move || {
                chunk
                    .into_iter()
                    .map(|record| converter.route(record))
                    .collect::<Vec<_>>()
            }));
        }

        debug!("Spawned {} conversion chunk(s)", handles.len());

        let chunks = try_join_all(handles).await.map_err(|e| {
            Error::processing_interrupted(format!("Conversion worker failed: {}", e))
        })?;

        let mut routed_records = Vec::with_capacity(stats.total_input);
        for routed in chunks.into_iter().flatten() {
            stats.record(&routed);
            routed_records.push(routed);
        }

        info!("Batch conversion complete: {}", stats.summary());

        Ok(ConversionResult {
            records: routed_records,
            stats,
        })
    }

    /// Select and assemble without touching the record
    fn encode(&self, record: &FlowRecord) -> Result<(usize, AssembledRow)> {
        let selected = select_attributes(&record.attributes, &self.config);
        let row = assemble_row(&record.attributes, &selected, &self.config)?;
        Ok((selected.len(), row))
    }
}

/// Route a record by the outcome of encoding it
///
/// Encoding writes to memory and only fails if the CSV writer does; such a
/// record goes to failure unchanged, carrying the error message.
pub(crate) fn route_outcome(
    record: FlowRecord,
    outcome: Result<(usize, AssembledRow)>,
    destination: Destination,
) -> RoutedRecord {
    match outcome {
        Ok((field_count, row)) => RoutedRecord {
            route: Route::Success,
            record: write_destination(record, row, destination),
            field_count,
            error: None,
        },
        Err(error) => {
            warn!("Record routed to failure: {}", error);
            RoutedRecord {
                route: Route::Failure,
                record,
                field_count: 0,
                error: Some(error.to_string()),
            }
        }
    }
}

/// Records per chunk for a batch of `total` records over `workers` workers
pub(crate) fn chunk_size_for(total: usize, workers: usize) -> usize {
    let workers = workers.max(1);
    total.div_ceil(workers).max(MIN_RECORDS_PER_WORKER)
}
