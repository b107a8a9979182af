//! Header grammars.
//!
//! Both dialects run through the same compiler; everything that differs between
//! them lives in a [`Grammar`] value:
//! - reserved keywords and the forms they must not be written in
//! - what counts as a correctly quoted origin token
//! - open (dashified) vs closed (table) feature vocabulary
//! - serialization punctuation
//!
//! Grammars are immutable statics. Nothing here is mutated after process start.

pub mod keys;
pub mod serialize;
pub mod values;

use crate::error::KeywordForm;

pub use keys::{dashify, KeyVocabulary, FEATURE_POLICY_FEATURES};

/// A reserved keyword written in a form the dialect rejects.
#[derive(Debug, Clone, Copy)]
pub struct Misquoted {
    /// The rejected spelling, e.g. `'self'`.
    pub form: &'static str,
    /// Keyword named in the error.
    pub keyword: &'static str,
    /// The form the dialect expects instead.
    pub required: KeywordForm,
}

/// How a feature's values are wrapped after the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueWrap {
    /// `key=(a b)`
    Parenthesized,
    /// `key a b`; an empty list is written as the none keyword.
    Bare,
}

/// Grammar record for one header dialect.
pub struct Grammar {
    pub reserved_keywords: &'static [&'static str],
    pub misquoted: &'static [Misquoted],
    pub keys: KeyVocabulary,
    pub quote_rule: fn(&str) -> bool,
    /// Must be the only value when present.
    pub wildcard: &'static str,
    /// Must be the only value when present.
    pub none_keyword: &'static str,
    pub entry_separator: &'static str,
    pub value_separator: &'static str,
    pub value_wrap: ValueWrap,
}

impl Grammar {
    pub fn is_reserved(&self, token: &str) -> bool {
        self.reserved_keywords.contains(&token)
    }

    pub fn misquoted(&self, token: &str) -> Option<&Misquoted> {
        self.misquoted.iter().find(|m| m.form == token)
    }
}

/// `Permissions-Policy`: open vocabulary, bare keywords, double-quoted origins.
pub static PERMISSIONS_POLICY: Grammar = Grammar {
    reserved_keywords: &["self", "src", "*", "none"],
    misquoted: &[
        Misquoted { form: "'self'", keyword: "self", required: KeywordForm::Bare },
        Misquoted { form: "'none'", keyword: "none", required: KeywordForm::Bare },
        Misquoted { form: "'src'", keyword: "src", required: KeywordForm::Bare },
    ],
    keys: KeyVocabulary::Open,
    quote_rule: is_double_quoted,
    wildcard: "*",
    none_keyword: "none",
    entry_separator: ", ",
    value_separator: " ",
    value_wrap: ValueWrap::Parenthesized,
};

/// `Feature-Policy`: closed vocabulary, single-quoted keywords, bare origins.
pub static FEATURE_POLICY: Grammar = Grammar {
    reserved_keywords: &["*", "'self'", "'none'", "'src'"],
    misquoted: &[
        Misquoted { form: "self", keyword: "'self'", required: KeywordForm::SingleQuoted },
        Misquoted { form: "none", keyword: "'none'", required: KeywordForm::SingleQuoted },
        Misquoted { form: "src", keyword: "'src'", required: KeywordForm::SingleQuoted },
    ],
    keys: KeyVocabulary::Closed(FEATURE_POLICY_FEATURES),
    quote_rule: is_bare_origin,
    wildcard: "*",
    none_keyword: "'none'",
    entry_separator: ";",
    value_separator: " ",
    value_wrap: ValueWrap::Bare,
};

/// `"..."` with nothing that would end the line in between.
pub fn is_double_quoted(token: &str) -> bool {
    token.len() >= 2
        && token.starts_with('"')
        && token.ends_with('"')
        && !token.contains(['\n', '\r', '\u{2028}', '\u{2029}'])
}

/// A bare origin (`https://example.com`): one token that cannot split an entry.
pub fn is_bare_origin(token: &str) -> bool {
    !token.is_empty()
        && !token
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, ';' | ',' | '"'))
}
