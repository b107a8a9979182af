//! Shared application state for the fpolicy gateway.
//!
//! Every configured policy is compiled here, once, at startup. A bad policy
//! fails construction; there is no degraded mode without the header.

use std::sync::Arc;

use fpolicy_core::error::Result;

use crate::config::PolicyConfig;
use crate::middleware::PolicyHeader;

#[derive(Clone)]
pub struct AppState {
    headers: Arc<[PolicyHeader]>,
}

impl AppState {
    /// Build application state.
    /// Returns Result so main can report policy errors instead of panicking.
    pub fn new(policies: &[PolicyConfig]) -> Result<Self> {
        let mut headers = Vec::with_capacity(policies.len());
        for p in policies {
            let header = PolicyHeader::compile(p.dialect, &p.features).map_err(|e| {
                tracing::warn!(dialect = %p.dialect, code = e.code().as_str(), error = %e, "policy compile failed");
                e
            })?;
            tracing::info!(header = %header.name(), value = ?header.value(), "policy header installed");
            headers.push(header);
        }

        Ok(Self {
            headers: headers.into(),
        })
    }

    pub fn policy_headers(&self) -> Arc<[PolicyHeader]> {
        Arc::clone(&self.headers)
    }
}
