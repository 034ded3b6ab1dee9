//! provider-catalog - faceted filtering and name search over a provider directory
//!
//! Records are flat attribute maps loaded from JSON. A [`Catalog`] narrows them
//! by facet criteria or a full-text search on the provider name, and notifies
//! subscribed views whenever the filtered set changes.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod load;
pub mod record;
pub mod search;
pub mod views;

#[cfg(test)]
pub mod test_utils;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
