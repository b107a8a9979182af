use std::collections::HashSet;
use std::net::SocketAddr;

use fpolicy_core::error::{PolicyError, Result};
use fpolicy_core::Dialect;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub policies: Vec<PolicyConfig>,
}

impl GatewayConfig {
    /// Structural checks only; feature maps are compiled by `AppState::new`.
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PolicyError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        if self.policies.is_empty() {
            return Err(PolicyError::Config("policies must not be empty".into()));
        }

        let mut seen = HashSet::new();
        for p in &self.policies {
            if !seen.insert(p.dialect) {
                return Err(PolicyError::Config(format!(
                    "duplicate policy for dialect: {}",
                    p.dialect
                )));
            }
        }

        self.gateway.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            PolicyError::Config(format!("gateway.listen must be a socket address: {e}"))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

/// One header to install. `features` is kept untyped so the compiler reports
/// shape problems (non-list values, non-string tokens) itself.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    pub dialect: Dialect,
    pub features: serde_json::Value,
}
