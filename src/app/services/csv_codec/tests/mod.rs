//! Tests for the CSV line codec
//!
//! Covers quote-aware splitting of configuration lists, necessary-only
//! quoting on the write side, and the agreement between the two.


/// Endorsement text used across the original conversion scenarios
pub const ENDORSEMENT: &str =
    "This is our family's favorite beach. We highly recommend it. \n\nThanks, Jim";

/// Values that exercise every quoting trigger
pub fn quoting_samples() -> Vec<&'static str> {
    vec![
        "California, US",
        "say \"hi\"",
        "carriage\rreturn",
        "line\nfeed",
        "\"",
        ",",
    ]
}
