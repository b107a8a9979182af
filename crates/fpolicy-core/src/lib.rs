//! fpolicy core: compiles per-feature allow-lists into `Permissions-Policy`
//! and `Feature-Policy` header values.
//!
//! The compiler is a pure function of its input: no I/O, no shared mutable
//! state. Both dialects share one algorithm and differ only in their
//! [`grammar::Grammar`] record.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every invalid configuration surfaces as a `PolicyError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod compiler;
pub mod dialect;
pub mod error;
pub mod grammar;

pub use compiler::{compile, compile_features, compile_value, CompiledPolicy, FeatureMap};
pub use dialect::Dialect;
/// Shared result type.
pub use error::{ErrorCode, PolicyError, Result};
