//! CLI command implementations.

pub mod common;
pub mod count;
pub mod sweep;
pub mod synth;
pub mod verify;
pub mod version;
