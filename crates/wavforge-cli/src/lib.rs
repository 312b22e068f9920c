//! WavForge CLI library.
//!
//! Argument-independent pieces of the `wavforge` binary: configuration
//! resolution and the command implementations.

pub mod commands;
pub mod settings;
