//! Response middleware.

pub mod policy_header;

pub use policy_header::{layer, set_policy_headers, PolicyHeader};
