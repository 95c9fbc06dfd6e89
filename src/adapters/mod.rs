//! Infrastructure adapters. Implement ports.
//!
//! Reference-data providers and the terminal chat surface. Map errors to DomainError.

pub mod provider;
pub mod ui;
