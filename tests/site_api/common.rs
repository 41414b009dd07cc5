//! Common test utilities for site API tests

use std::sync::Arc;

use folio::{Executor, HttpResponse, Site, SiteConfig};
use folio_core::ManualClock;
use serde_json::Value;
use tempfile::TempDir;

/// Executor over a fresh site whose messages are stamped by `clock`
pub fn create_executor_with_clock(clock: Arc<ManualClock>) -> (Executor, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let site = Site::open_with_clock(temp_dir.path(), SiteConfig::for_testing(), clock).unwrap();
    (Executor::new(site), temp_dir)
}

/// Executor over a fresh site
pub fn create_executor() -> (Executor, TempDir) {
    create_executor_with_clock(Arc::new(ManualClock::at(1_000)))
}

/// POST `body` to `path`
pub fn post(executor: &Executor, path: &str, body: Value) -> HttpResponse {
    executor.handle("POST", path, Some(&body))
}

/// GET `path`
pub fn get(executor: &Executor, path: &str) -> HttpResponse {
    executor.handle("GET", path, None)
}
