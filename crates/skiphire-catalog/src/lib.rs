//! # skiphire-catalog
//!
//! Sources for the skip catalog: the remote pricing API and local fixtures.

pub mod http;
pub mod source;

pub use http::{CatalogQuery, HttpCatalog};
pub use source::{decode_catalog, CatalogSource, FileCatalog, StaticCatalog};
