//! Header dialects.

use std::fmt;

use serde::Deserialize;

use crate::grammar::{Grammar, FEATURE_POLICY, PERMISSIONS_POLICY};

/// Which header the compiler produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// `Permissions-Policy` (open vocabulary).
    Permissions,
    /// `Feature-Policy` (legacy, closed vocabulary).
    Feature,
}

impl Dialect {
    pub fn grammar(self) -> &'static Grammar {
        match self {
            Dialect::Permissions => &PERMISSIONS_POLICY,
            Dialect::Feature => &FEATURE_POLICY,
        }
    }

    /// Response header name carrying the compiled value.
    pub fn header_name(self) -> &'static str {
        match self {
            Dialect::Permissions => "Permissions-Policy",
            Dialect::Feature => "Feature-Policy",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Permissions => "permissions",
            Dialect::Feature => "feature",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
