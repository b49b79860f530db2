//! Articles API - a small JSON service over a fixed article catalog
//!
//! The service exposes:
//! - `GET /` with a welcome message
//! - `GET /articles` with the catalog, or a fixed 500 when running the
//!   faulty variant used to exercise CI failure detection

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use error::{Error, Result};
