//! Beatkit CLI library.
//!
//! This crate provides the command implementations behind the `beatkit`
//! binary, plus log setup shared by every command.

pub mod commands;
pub mod logging;
