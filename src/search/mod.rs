//! Name search for providers.
//!
//! A Tantivy index (BM25, English stemming) built in RAM over the
//! `providername` field. The index is rebuilt whenever the catalog is
//! loaded; facet changes never touch it.

pub mod tantivy_index;

pub use tantivy_index::SearchIndex;
