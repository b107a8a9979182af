//! Policy header middleware.
//!
//! Policies are compiled once, before the router is built. The per-request
//! handler only copies the precomputed name/value pairs onto the response;
//! it never looks at the request and never fails.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue},
    middleware::{self, Next},
    response::Response,
    Router,
};
use fpolicy_core::error::{PolicyError, Result};
use fpolicy_core::{compile_features, CompiledPolicy, Dialect};

/// A compiled policy ready to be written on every response.
#[derive(Debug, Clone)]
pub struct PolicyHeader {
    name: HeaderName,
    value: HeaderValue,
}

impl PolicyHeader {
    pub fn new(policy: &CompiledPolicy) -> Result<Self> {
        let name = HeaderName::from_bytes(policy.header_name().as_bytes())
            .map_err(|e| PolicyError::InvalidHeader(format!("{}: {e}", policy.header_name())))?;
        let value = HeaderValue::from_str(policy.value())
            .map_err(|e| PolicyError::InvalidHeader(format!("{}: {e}", policy.value())))?;
        Ok(Self { name, value })
    }

    /// Compile a `features` object and wrap the result.
    pub fn compile(dialect: Dialect, features: &serde_json::Value) -> Result<Self> {
        Self::new(&compile_features(dialect, features)?)
    }

    pub fn name(&self) -> &HeaderName {
        &self.name
    }

    pub fn value(&self) -> &HeaderValue {
        &self.value
    }
}

/// Run the rest of the stack, then set every policy header on the response.
pub async fn set_policy_headers(
    State(headers): State<Arc<[PolicyHeader]>>,
    req: Request,
    next: Next,
) -> Response {
    let mut res = next.run(req).await;
    let out = res.headers_mut();
    for h in headers.iter() {
        out.insert(h.name.clone(), h.value.clone());
    }
    res
}

/// Wrap `router` so all of its responses carry `headers`.
pub fn layer<S>(router: Router<S>, headers: impl Into<Arc<[PolicyHeader]>>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let headers: Arc<[PolicyHeader]> = headers.into();
    router.layer(middleware::from_fn_with_state(headers, set_policy_headers))
}
