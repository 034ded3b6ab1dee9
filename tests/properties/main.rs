//! Property test suite entry point.

mod catalog_tests;
mod matching_tests;
mod strategies;
