//! Core library for the `capture-probe` CLI.
//!
//! This crate provides the building blocks used by the binary: CLI argument
//! types, configuration loading, job payload construction, the capture HTTP
//! adapter, and the interactive test session. The primary user-facing
//! interface is the `capture-probe` command-line application; library APIs
//! may evolve as the CLI grows.
pub mod args;
pub mod config;
pub mod console;
pub mod entry;
pub mod error;
pub mod http;
pub mod payload;
pub mod probe;

pub(crate) mod system;
