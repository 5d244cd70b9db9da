//! CSV line codec for attribute conversion
//!
//! Two halves of one quoting convention:
//! - [`splitter`] - reads comma-separated, optionally quoted token lists such
//!   as a configured attribute-name list
//! - [`encoder`] - writes an ordered sequence of values as one RFC 4180 line
//!
//! Any line produced by the encoder splits back into its original values,
//! provided no value is empty on its own and no raw line break sits outside
//! a quoted field.

pub mod encoder;
pub mod splitter;

#[cfg(test)]
pub mod tests;

pub use encoder::{encode_line, needs_quoting};
pub use splitter::split_fields;
