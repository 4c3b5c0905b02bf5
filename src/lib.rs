//! Lala Trie Library
//!
//! A string-keyed map built on a left-child/right-sibling trie, together with
//! the configuration, error reporting and workload tooling used to drive it.
//!
//! # Architecture
//!
//! - [`data_structures`] holds the trie itself and has no dependency on the
//!   rest of the crate beyond its own error type.
//! - [`config`] loads layered settings for the trie and the workload driver.
//! - [`workload`] exercises the trie through its public `get`/`set` API.
//! - [`error`] aggregates component errors and routes them to a reporter.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod workload;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Lala Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Installs the tracing-backed error reporter.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
