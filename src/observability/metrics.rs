//! Metrics collection.
//!
//! # Metrics
//! - `shell_navigations_total` (counter): navigations by outcome
//! - `shell_navigation_duration_seconds` (histogram): resolve + load latency
//! - `shell_view_cache_total` (counter): loader cache hits and misses
//! - `shell_view_cache_size` (gauge): loaded components currently held
//!
//! # Design Decisions
//! - Facade only: the host installs a recorder, the shell never binds one
//! - Low-overhead updates; no labels beyond outcome/result

use std::time::Instant;

/// Record a completed navigation and its latency.
pub fn record_navigation(outcome: &'static str, started: Instant) {
    metrics::counter!("shell_navigations_total", "outcome" => outcome).increment(1);
    metrics::histogram!("shell_navigation_duration_seconds")
        .record(started.elapsed().as_secs_f64());
}

/// Record a loader cache hit or miss.
pub fn record_view_cache(result: &'static str) {
    metrics::counter!("shell_view_cache_total", "result" => result).increment(1);
}

/// Record the number of components held by the loader cache.
pub fn record_view_cache_size(size: usize) {
    metrics::gauge!("shell_view_cache_size").set(size as f64);
}
