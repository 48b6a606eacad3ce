//! pixdot - palette dot-art generator
//!
//! HTTP service and CLI around the `dot-grid` library.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
pub mod services;
