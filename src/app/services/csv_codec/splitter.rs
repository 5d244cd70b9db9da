//! Quote-aware splitting of comma-separated token lists
//!
//! Used for configuration strings such as the explicit attribute list, where
//! a name containing a comma is written wrapped in double quotes:
//! `"beach,name","beach,location"`.

const SEPARATOR: char = ',';
const QUOTE: char = '"';

/// Split a string on commas that are not enclosed in double quotes
///
/// A token fully wrapped in double quotes is returned without the wrapping
/// quotes and with each doubled quote (`""`) collapsed to a single quote.
/// Any other token is returned verbatim. No whitespace is trimmed.
///
/// # Arguments
///
/// * `input` - Comma-separated token list
///
/// # Returns
///
/// Tokens in input order; an empty input yields no tokens
///
/// # Examples
///
/// ```
/// use attributes_to_csv::app::services::csv_codec::split_fields;
///
/// assert_eq!(split_fields("a,b"), vec!["a", "b"]);
/// assert_eq!(split_fields("\"beach,name\",uuid"), vec!["beach,name", "uuid"]);
/// assert!(split_fields("").is_empty());
/// ```
pub fn split_fields(input: &str) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in input.chars() {
        match ch {
            QUOTE => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            SEPARATOR if !in_quotes => {
                tokens.push(unwrap_token(&current));
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    tokens.push(unwrap_token(&current));

    tokens
}

/// Strip wrapping quotes and collapse doubled quotes of a raw token
fn unwrap_token(raw: &str) -> String {
    let wrapped = raw.len() >= 2 && raw.starts_with(QUOTE) && raw.ends_with(QUOTE);
    if !wrapped {
        return raw.to_string();
    }

    raw[1..raw.len() - 1].replace("\"\"", "\"")
}
