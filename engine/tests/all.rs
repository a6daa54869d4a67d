//! Integration test aggregator
//!
//! End-to-end scenarios driving the site host. Individual test modules are
//! declared in `suite/mod.rs`.

mod common;
mod suite;
