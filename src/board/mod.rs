//! Kanban task board engine.
//!
//! Columns and tasks live in one [`domain::BoardState`]; the order of the
//! single global task list defines the order of every column. The module
//! follows hexagonal architecture:
//!
//! - Domain types and the text codec in [`domain`]
//! - Storage, clipboard, and notification contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The board store, drag controller, editor hand-off, and export in
//!   [`services`]
//! - Tunables in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
