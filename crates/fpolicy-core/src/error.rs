//! Shared error type across fpolicy crates.

use thiserror::Error;

/// Stable error codes (used by tests, logs and config tooling).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Options or `features` are not objects.
    InvalidShape,
    /// Feature map has no entries.
    NoFeatures,
    /// Feature name outside a closed vocabulary.
    UnsupportedFeature,
    /// Feature value is not a list, or a list element is not a string.
    InvalidValueType,
    /// Same token listed twice for one feature.
    DuplicateValue,
    /// Reserved keyword written in the form the dialect forbids.
    KeywordQuoting,
    /// Non-keyword token that violates the dialect's quoting rule.
    UnquotedValue,
    /// Wildcard or none keyword combined with other values.
    ExclusiveValueMixed,
    /// Nothing was serialized.
    EmptyHeader,
    /// Compiled value rejected by the HTTP header type.
    InvalidHeader,
    /// Config could not be read or parsed.
    Config,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidShape => "INVALID_SHAPE",
            ErrorCode::NoFeatures => "NO_FEATURES",
            ErrorCode::UnsupportedFeature => "UNSUPPORTED_FEATURE",
            ErrorCode::InvalidValueType => "INVALID_VALUE_TYPE",
            ErrorCode::DuplicateValue => "DUPLICATE_VALUE",
            ErrorCode::KeywordQuoting => "KEYWORD_QUOTING",
            ErrorCode::UnquotedValue => "UNQUOTED_VALUE",
            ErrorCode::ExclusiveValueMixed => "EXCLUSIVE_VALUE_MIXED",
            ErrorCode::EmptyHeader => "EMPTY_HEADER",
            ErrorCode::InvalidHeader => "INVALID_HEADER",
            ErrorCode::Config => "CONFIG",
        }
    }
}

/// How a reserved keyword has to be written in a given dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordForm {
    /// `self`
    Bare,
    /// `'self'`
    SingleQuoted,
}

impl std::fmt::Display for KeywordForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeywordForm::Bare => f.write_str("not be quoted"),
            KeywordForm::SingleQuoted => f.write_str("be quoted"),
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PolicyError>;

/// Unified error type used by the compiler and the gateway.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("policy options must be an object")]
    NotAnObject,
    #[error("policy options must have a single key, \"features\", which is an object of features")]
    FeaturesNotAnObject,
    #[error("at least one feature is required")]
    NoFeatures,
    #[error("the \"{0}\" feature is not supported")]
    UnsupportedFeature(String),
    #[error("the value of the \"{0}\" feature must be an array of strings")]
    NotAnArray(String),
    #[error("the value of the \"{0}\" feature contains a non-string, which is not supported")]
    NonString(String),
    #[error("the value of the \"{0}\" feature contains duplicates")]
    Duplicate(String),
    #[error("{keyword} must {required}")]
    MisquotedKeyword {
        keyword: &'static str,
        required: KeywordForm,
    },
    #[error("values beside reserved keywords must be quoted: {0}")]
    Unquoted(String),
    #[error("the value of the \"{feature}\" feature cannot contain {keyword} and other values")]
    Mixed {
        feature: String,
        keyword: &'static str,
    },
    #[error("no features produced output")]
    EmptyHeader,
    #[error("invalid header value: {0}")]
    InvalidHeader(String),
    #[error("config: {0}")]
    Config(String),
}

impl PolicyError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            PolicyError::NotAnObject | PolicyError::FeaturesNotAnObject => ErrorCode::InvalidShape,
            PolicyError::NoFeatures => ErrorCode::NoFeatures,
            PolicyError::UnsupportedFeature(_) => ErrorCode::UnsupportedFeature,
            PolicyError::NotAnArray(_) | PolicyError::NonString(_) => ErrorCode::InvalidValueType,
            PolicyError::Duplicate(_) => ErrorCode::DuplicateValue,
            PolicyError::MisquotedKeyword { .. } => ErrorCode::KeywordQuoting,
            PolicyError::Unquoted(_) => ErrorCode::UnquotedValue,
            PolicyError::Mixed { .. } => ErrorCode::ExclusiveValueMixed,
            PolicyError::EmptyHeader => ErrorCode::EmptyHeader,
            PolicyError::InvalidHeader(_) => ErrorCode::InvalidHeader,
            PolicyError::Config(_) => ErrorCode::Config,
        }
    }
}
