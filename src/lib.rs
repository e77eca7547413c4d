//! Scholar Clickers library crate — re-exports all modules for integration testing.
//!
//! The binary crate (`main.rs`) is the actual game entry point.
//! This library crate exposes the same modules so that `tests/` integration
//! tests can import game types, systems, and resources without needing a
//! window or GPU.

pub mod shared;
pub mod provider;
pub mod quiz;
pub mod clicker;
pub mod session;
pub mod ui;
pub mod data;
