//! Header value serialization.

use crate::error::{PolicyError, Result};

use super::{Grammar, ValueWrap};

/// Render one `(dashed key, values)` entry.
pub fn render_entry(grammar: &Grammar, key: &str, values: &[&str]) -> String {
    let joined = values.join(grammar.value_separator);
    match grammar.value_wrap {
        ValueWrap::Parenthesized => format!("{key}=({joined})"),
        ValueWrap::Bare if values.is_empty() => {
            format!("{key}{}{}", grammar.value_separator, grammar.none_keyword)
        }
        ValueWrap::Bare => format!("{key}{}{joined}", grammar.value_separator),
    }
}

/// Join rendered entries (already in insertion order) into the header value.
pub fn join_entries(grammar: &Grammar, entries: &[String]) -> Result<String> {
    let value = entries.join(grammar.entry_separator);
    if value.is_empty() {
        return Err(PolicyError::EmptyHeader);
    }
    Ok(value)
}
