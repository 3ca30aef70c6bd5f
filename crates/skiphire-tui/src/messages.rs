//! TUI message types (Elm Messages).

use skiphire_core::{CatalogError, SkipOption};

/// Messages posted to the TUI from background threads.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Outcome of catalog fetch `generation`.
    CatalogLoaded {
        generation: u64,
        result: Result<Vec<SkipOption>, CatalogError>,
    },
}
