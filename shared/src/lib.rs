//! Shared library for the shipment-tracking Lambda functions.
//!
//! This crate provides the configuration, Google credential flow, Sheets
//! client, and wire models used by the function binaries.

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod sheets;

pub use config::Config;
pub use error::{Error, Result};
pub use http::json_response;
pub use models::{find_row, ErrorResponse, TrackResponse};
