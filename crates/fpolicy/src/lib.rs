//! Top-level facade crate for fpolicy.
//!
//! Re-exports the policy compiler and the gateway library so users can depend on a single crate.

pub mod core {
    pub use fpolicy_core::*;
}

pub mod gateway {
    pub use fpolicy_gateway::*;
}
