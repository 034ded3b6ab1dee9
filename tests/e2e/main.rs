//! E2E test suite entry point.

mod catalog_workflow;
#[path = "../common/mod.rs"]
mod common;
