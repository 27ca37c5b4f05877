//! Multris (workspace facade crate).
//!
//! Re-exports the member crates under stable module names; the
//! implementation lives in dedicated crates under `crates/`.

pub use multris_core as core;
pub use multris_term as term;
pub use multris_types as types;
