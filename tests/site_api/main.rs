//! Site API Tests
//!
//! End-to-end tests through the HTTP binding:
//! - routes decode to commands and render wire bodies
//! - client errors map to 400/404/405
//! - persistence failures map to 500 and change nothing
//! - documents survive reopening the data directory

mod common;

mod errors;
mod persistence;
mod routes;
