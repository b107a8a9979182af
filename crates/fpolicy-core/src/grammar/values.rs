//! Allow-list validation for a single feature.
//!
//! Checks run element by element and stop at the first violation:
//! type, duplicate, misquoted keyword, quoting rule. Exclusivity of the
//! wildcard and none keywords is checked once the whole list has passed.

use std::collections::HashSet;

use crate::error::{PolicyError, Result};

use super::Grammar;

/// One element of a feature's allow-list as it arrived from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawToken<'a> {
    Str(&'a str),
    /// Anything that is not a string (number, null, object, ...).
    NonString,
}

impl<'a> From<&'a str> for RawToken<'a> {
    fn from(s: &'a str) -> Self {
        RawToken::Str(s)
    }
}

impl<'a> From<&'a serde_json::Value> for RawToken<'a> {
    fn from(v: &'a serde_json::Value) -> Self {
        match v.as_str() {
            Some(s) => RawToken::Str(s),
            None => RawToken::NonString,
        }
    }
}

/// Validate `tokens` for `feature` and return them in their original order.
pub fn validate_values<'a, I>(grammar: &Grammar, feature: &str, tokens: I) -> Result<Vec<&'a str>>
where
    I: IntoIterator<Item = RawToken<'a>>,
{
    let mut seen: HashSet<&'a str> = HashSet::new();
    let mut out = Vec::new();

    for raw in tokens {
        let token = match raw {
            RawToken::Str(s) => s,
            RawToken::NonString => return Err(PolicyError::NonString(feature.to_string())),
        };

        if seen.contains(token) {
            return Err(PolicyError::Duplicate(feature.to_string()));
        }
        if let Some(m) = grammar.misquoted(token) {
            return Err(PolicyError::MisquotedKeyword {
                keyword: m.keyword,
                required: m.required,
            });
        }
        if !grammar.is_reserved(token) && !(grammar.quote_rule)(token) {
            return Err(PolicyError::Unquoted(token.to_string()));
        }

        seen.insert(token);
        out.push(token);
    }

    if out.len() > 1 {
        for keyword in [grammar.wildcard, grammar.none_keyword] {
            if seen.contains(keyword) {
                return Err(PolicyError::Mixed {
                    feature: feature.to_string(),
                    keyword,
                });
            }
        }
    }

    Ok(out)
}
