//! Adapter implementations of the board ports.

pub mod filesystem;
pub mod memory;
pub mod tracing_notifier;
