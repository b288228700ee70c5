//! Color Oven - color harmony schemes and color-filtered product search
//!
//! HTTP service around the `color-harmony` crate.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
