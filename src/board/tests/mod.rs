//! Unit tests for the board module.
//!
//! Tests are organised by concern: domain ordering rules, the text codec,
//! persistence, the board store, drag gestures, the editor hand-off, export,
//! and configuration.
