//! services/api/src/lib.rs
//!
//! The receipt processor HTTP service: adapters for the core ports, configuration,
//! and the web layer. The binaries in `src/bin` assemble these at startup.

pub mod adapters;
pub mod config;
pub mod error;
pub mod web;
