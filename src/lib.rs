//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under one name so the binary, the
//! integration tests and the benches can use `blockfall::{core, input, ...}`
//! while the implementation lives in dedicated crates under `crates/`.

pub use blockfall_audio as audio;
pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
