//! Error types for the provider catalog.
//!
//! Facet, search and reset operations never fail on user input; everything
//! here comes from loading the dataset, reading configuration, or the
//! search backend.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("read dataset {path}: {source}")]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid dataset: {0}")]
    Dataset(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("missing config: {0}")]
    MissingConfig(String),

    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    #[error("search index error: {0}")]
    Index(#[from] tantivy::TantivyError),
}

impl CatalogError {
    /// Stable machine-readable code used by robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::DatasetRead { .. } => "dataset_read",
            Self::Json(_) => "dataset_parse",
            Self::Dataset(_) => "dataset_invalid",
            Self::Config(_) => "config",
            Self::MissingConfig(_) => "missing_config",
            Self::InvalidFilter(_) => "invalid_filter",
            Self::Index(_) => "search_index",
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
