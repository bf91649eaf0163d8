//! # acme-core
//!
//! Core types, traits, configuration, and error handling shared by the
//! ACME Learning Center locale catalog, router, and application shell.

pub mod config;
pub mod error;
pub mod traits;
