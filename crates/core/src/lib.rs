//! `biblio-core` — shared building blocks for the catalog crates.
//!
//! This crate contains **pure** primitives (no IO, no parsing of sources).

pub mod error;
pub mod id;

pub use error::{CatalogError, CatalogResult};
pub use id::MaterialCode;
