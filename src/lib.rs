//! # op-bindings - Embedded contract artifacts
//!
//! Compiled contract artifacts (deployed bytecode and solc storage layouts) embedded as
//! constants, plus an immutable name-keyed [`registry::Registry`] built once at startup.

pub mod artifact;
pub mod bindings;
pub mod cli;
pub mod commands;
pub mod layout;
pub mod logging;
pub mod output;
pub mod registry;
