//! Data provider adapters. Implement DataProvider.
//!
//! JSON file (bundled sample data), PostgREST-style HTTP API, in-memory snapshot.

pub mod in_memory;
pub mod json_file;
pub mod rest;

pub use in_memory::InMemoryProvider;
pub use json_file::JsonFileProvider;
pub use rest::RestProvider;
