//! Result formatters for CLI output.

pub mod providers;

pub use providers::ProviderResults;
