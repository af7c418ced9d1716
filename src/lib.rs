//! Core library for the `sensor-filler` CLI.
//!
//! The binary seeds a sensor-data service with synthetic readings: it builds
//! one shared HTTP client, fires a configurable number of concurrent JSON
//! POST requests and reports progress and a run summary. The modules here are
//! the building blocks used by the binary: argument types, configuration
//! loading, reading generation, request sending and the driver.
pub mod args;
pub mod config;
pub mod driver;
pub mod entry;
pub mod error;
pub mod http;
pub mod reading;
pub mod shutdown;
pub mod shutdown_handlers;
pub mod system;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
