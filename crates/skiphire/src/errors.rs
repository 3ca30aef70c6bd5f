//! Error handling and exit codes.

use skiphire_core::constants::exit_codes;
use skiphire_core::CatalogError;

/// Handle a catalog error and return the appropriate exit code.
#[must_use]
pub fn handle_error(err: &CatalogError) -> i32 {
    match err {
        CatalogError::Status(_) | CatalogError::Transport(_) | CatalogError::Decode(_) => {
            exit_codes::ERROR_FETCH
        }
        CatalogError::Io(_) => exit_codes::ERROR_CONFIG,
    }
}
