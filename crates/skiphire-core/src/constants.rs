//! Endpoint defaults and fixed user-facing copy.

/// Pricing endpoint queried for skip options.
pub const DEFAULT_ENDPOINT: &str = "https://app.wewantwaste.co.uk/api/skips/by-location";

/// Postcode sent with the catalog request.
pub const DEFAULT_POSTCODE: &str = "NR32";

/// Area sent with the catalog request.
pub const DEFAULT_AREA: &str = "Lowestoft";

/// Message shown in place of the skip grid when the catalog fetch fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load skip options. Please try again later.";

/// Warning banner copy.
pub const WARNING_TITLE: &str = "Important Notice";
pub const WARNING_TEXT: &str = "Heavy waste types have specific requirements and restrictions. \
Some skip sizes may not be available for heavy waste disposal.";

/// Notice shown in the visual panel while no waste type is selected.
pub const RESTRICTION_TITLE: &str = "Skip Size Restrictions";
pub const RESTRICTION_TEXT: &str = "For safety reasons, heavy waste can only be disposed of in \
skips up to 8 yards. Larger skips will not be available if heavy waste is selected.";

/// Shown when filtering leaves no skip.
pub const NO_SKIPS_TITLE: &str = "No Skips Available";
pub const NO_SKIPS_TEXT: &str =
    "Based on your heavy waste selection, there are no suitable skips available.";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The skip catalog could not be fetched.
    pub const ERROR_FETCH: i32 = 2;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Interrupted by the user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
