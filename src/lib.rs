//! Tori's Tray library crate: re-exports all modules for integration testing.
//!
//! The binary crate (`main.rs`) is the terminal front end.
//! This library crate exposes the game core so that `tests/` integration
//! tests (or any other front end) can build a headless session without a
//! window or GPU.

pub mod shared;
pub mod data;
pub mod tray;
pub mod decoration;
pub mod balance;
pub mod wizard;
pub mod session;
pub mod config;
pub mod console;
