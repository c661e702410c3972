//! CURA agent backend library.
//!
//! Exposed as a library so the integration tests can build the router
//! in-process; the binary entry point lives in `main.rs`.

pub mod agent;
pub mod analysis;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod services;
