//! # skiphire-core
//!
//! Core model for the heavy waste skip selector: the waste type and
//! percentage band catalogs, skip records, and the selection controller
//! that keeps user choices consistent with the fetched skip catalog.

pub mod action;
pub mod band;
pub mod constants;
pub mod controller;
pub mod error;
pub mod filter;
pub mod skip;
pub mod waste;

// Re-exports
pub use action::SelectionAction;
pub use band::PercentageBand;
pub use constants::{exit_codes, DEFAULT_AREA, DEFAULT_ENDPOINT, DEFAULT_POSTCODE};
pub use controller::{CatalogStatus, SelectionController, SelectionState};
pub use error::CatalogError;
pub use filter::{available_skips, format_total};
pub use skip::SkipOption;
pub use waste::WasteType;
