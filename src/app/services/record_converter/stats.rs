//! Conversion statistics and batch result structures

use super::processor::{Route, RoutedRecord};

/// Statistics for a batch of record conversions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionStats {
    /// Number of records handed to the converter
    pub total_input: usize,
    /// Records routed to success
    pub converted: usize,
    /// Records routed to failure
    pub failed: usize,
    /// Input lines the host could not decode into records
    pub rejected: usize,
    /// CSV fields written across all converted records
    pub fields_written: usize,
    /// Specific error messages for debugging
    pub error_messages: Vec<String>,
}

impl ConversionStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one routed record
    pub fn record(&mut self, routed: &RoutedRecord) {
        match routed.route {
            Route::Success => {
                self.converted += 1;
                self.fields_written += routed.field_count;
            }
            Route::Failure => {
                self.failed += 1;
                if let Some(error) = &routed.error {
                    self.error_messages.push(error.clone());
                }
            }
        }
    }

    /// Account for an input line that never became a record
    pub fn add_rejected(&mut self, message: String) {
        self.rejected += 1;
        self.error_messages.push(message);
    }

    /// Success rate over records and rejected lines, as a percentage
    pub fn success_rate(&self) -> f64 {
        let attempted = self.total_input + self.rejected;
        if attempted == 0 {
            100.0
        } else {
            (self.converted as f64 / attempted as f64) * 100.0
        }
    }

    /// Whether every input became a converted record
    pub fn is_complete(&self) -> bool {
        self.failed == 0 && self.rejected == 0
    }

    /// Average number of CSV fields per converted record
    pub fn average_fields(&self) -> f64 {
        if self.converted == 0 {
            0.0
        } else {
            self.fields_written as f64 / self.converted as f64
        }
    }

    /// One-line summary of the batch
    pub fn summary(&self) -> String {
        format!(
            "Conversion Summary: {} -> {} records ({:.1}% success) | \
             Failed: {} | Rejected: {} | Avg fields: {:.1}",
            self.total_input + self.rejected,
            self.converted,
            self.success_rate(),
            self.failed,
            self.rejected,
            self.average_fields()
        )
    }
}

/// Result of a batch conversion
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// Routed records in input order
    pub records: Vec<RoutedRecord>,
    /// Batch statistics
    pub stats: ConversionStats,
}

impl ConversionResult {
    /// Records routed to success
    pub fn successes(&self) -> impl Iterator<Item = &RoutedRecord> {
        self.records.iter().filter(|routed| routed.is_success())
    }

    /// Records routed to failure
    pub fn failures(&self) -> impl Iterator<Item = &RoutedRecord> {
        self.records.iter().filter(|routed| !routed.is_success())
    }
}
