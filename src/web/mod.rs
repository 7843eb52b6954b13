//! HTTP front end: parses request parameters, calls the library and formats
//! its results as JSON. Nothing in the algorithms depends on this module.

pub mod api;
pub mod models;
pub mod server;
