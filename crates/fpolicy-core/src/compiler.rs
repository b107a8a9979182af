//! Policy compiler entry points.
//!
//! A compilation either ends in a [`CompiledPolicy`] holding the immutable
//! header value, or in the first [`PolicyError`] encountered. There is no
//! partial output and no retry: a rejected configuration has to be fixed and
//! compiled again.

use std::fmt;

use indexmap::IndexMap;
use serde_json::Value;

use crate::dialect::Dialect;
use crate::error::{PolicyError, Result};
use crate::grammar::{serialize, values, values::RawToken, Grammar};

/// Feature name (camelCase) -> allowed values, in insertion order.
pub type FeatureMap = IndexMap<String, Vec<String>>;

/// A feature's value as it arrived from configuration.
#[derive(Debug)]
pub enum RawList<'a> {
    Tokens(Vec<RawToken<'a>>),
    /// Anything that is not a list.
    NotAnArray,
}

/// Successfully compiled header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPolicy {
    dialect: Dialect,
    value: String,
}

impl CompiledPolicy {
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn header_name(&self) -> &'static str {
        self.dialect.header_name()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl fmt::Display for CompiledPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Compile a typed feature map.
pub fn compile(dialect: Dialect, features: &FeatureMap) -> Result<CompiledPolicy> {
    finish(
        dialect,
        features.len(),
        compile_with_grammar(
            dialect.grammar(),
            features.iter().map(|(key, vals)| {
                let tokens = vals.iter().map(|v| RawToken::Str(v.as_str())).collect();
                (key.as_str(), RawList::Tokens(tokens))
            }),
        ),
    )
}

/// Compile a dynamic options object: `{ "features": { ... } }`.
///
/// A missing `features` key is treated as an empty feature map.
pub fn compile_value(dialect: Dialect, options: &Value) -> Result<CompiledPolicy> {
    let Some(options) = options.as_object() else {
        return finish(dialect, 0, Err(PolicyError::NotAnObject));
    };
    match options.get("features") {
        Some(features) => compile_features(dialect, features),
        None => finish(dialect, 0, Err(PolicyError::NoFeatures)),
    }
}

/// Compile a dynamic `features` object.
pub fn compile_features(dialect: Dialect, features: &Value) -> Result<CompiledPolicy> {
    let Some(features) = features.as_object() else {
        return finish(dialect, 0, Err(PolicyError::FeaturesNotAnObject));
    };

    finish(
        dialect,
        features.len(),
        compile_with_grammar(
            dialect.grammar(),
            features.iter().map(|(key, val)| {
                let list = match val.as_array() {
                    Some(items) => RawList::Tokens(items.iter().map(RawToken::from).collect()),
                    None => RawList::NotAnArray,
                };
                (key.as_str(), list)
            }),
        ),
    )
}

/// Validate, normalize and serialize `entries` under `grammar`.
///
/// Entries are processed in iteration order and the first error aborts.
pub fn compile_with_grammar<'a, I>(grammar: &Grammar, entries: I) -> Result<String>
where
    I: IntoIterator<Item = (&'a str, RawList<'a>)>,
{
    let mut rendered = Vec::new();

    for (feature, list) in entries {
        let key = grammar.keys.normalize(feature)?;
        let tokens = match list {
            RawList::Tokens(tokens) => tokens,
            RawList::NotAnArray => return Err(PolicyError::NotAnArray(feature.to_string())),
        };
        let allowed = values::validate_values(grammar, feature, tokens)?;
        rendered.push(serialize::render_entry(grammar, &key, &allowed));
    }

    if rendered.is_empty() {
        return Err(PolicyError::NoFeatures);
    }

    serialize::join_entries(grammar, &rendered)
}

fn finish(dialect: Dialect, features: usize, result: Result<String>) -> Result<CompiledPolicy> {
    match result {
        Ok(value) => {
            tracing::debug!(%dialect, header = dialect.header_name(), features, "policy compiled");
            Ok(CompiledPolicy { dialect, value })
        }
        Err(e) => {
            tracing::debug!(%dialect, features, code = e.code().as_str(), error = %e, "policy rejected");
            Err(e)
        }
    }
}
