//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use skiphire_catalog::CatalogQuery;
use skiphire_core::{WasteType, DEFAULT_AREA, DEFAULT_ENDPOINT, DEFAULT_POSTCODE};

/// Pick a skip that can take your heavy waste.
#[derive(Parser, Debug)]
#[command(name = "skiphire", version, about)]
pub struct AppConfig {
    /// Pricing endpoint (without query string).
    #[arg(long, default_value = DEFAULT_ENDPOINT, env = "SKIPHIRE_ENDPOINT")]
    pub endpoint: String,

    /// Postcode to price skips for.
    #[arg(long, default_value = DEFAULT_POSTCODE, env = "SKIPHIRE_POSTCODE")]
    pub postcode: String,

    /// Area to price skips for.
    #[arg(long, default_value = DEFAULT_AREA, env = "SKIPHIRE_AREA")]
    pub area: String,

    /// Request timeout (e.g., "30s", "500ms", "1m").
    #[arg(long, default_value = "30s", value_parser = parse_duration)]
    pub timeout: Duration,

    /// Read the skip catalog from a local JSON file instead of the endpoint.
    #[arg(long)]
    pub catalog_file: Option<PathBuf>,

    /// Print the available skips and exit instead of opening the popup.
    #[arg(long)]
    pub list: bool,

    /// Print the listing as JSON.
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Heavy waste types to select up front, comma separated.
    #[arg(short, long, value_delimiter = ',')]
    pub waste: Vec<WasteType>,

    /// Write logs to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Request timeout for the catalog endpoint.
    #[must_use]
    pub fn timeout_duration(&self) -> Duration {
        self.timeout
    }

    /// Location the catalog is requested for.
    #[must_use]
    pub fn query(&self) -> CatalogQuery {
        CatalogQuery {
            endpoint: self.endpoint.clone(),
            postcode: self.postcode.clone(),
            area: self.area.clone(),
        }
    }

    /// Whether the interactive popup owns the terminal.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !self.list && self.completion.is_none()
    }
}

/// Parse a duration string like "5m", "1h", "30s", "500ms" or bare seconds.
fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let number = |digits: &str| {
        digits
            .parse::<u64>()
            .map_err(|_| format!("invalid duration: {s}"))
    };

    if let Some(ms) = s.strip_suffix("ms") {
        return number(ms).map(Duration::from_millis);
    }
    let (n, unit_secs) = if let Some(mins) = s.strip_suffix('m') {
        (number(mins)?, 60)
    } else if let Some(hours) = s.strip_suffix('h') {
        (number(hours)?, 3600)
    } else if let Some(secs) = s.strip_suffix('s') {
        (number(secs)?, 1)
    } else {
        (number(s)?, 1)
    };
    n.checked_mul(unit_secs)
        .map(Duration::from_secs)
        .ok_or_else(|| format!("duration too large: {s}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration_formats() {
        assert_eq!(parse_duration("1m"), Ok(Duration::from_secs(60)));
        assert_eq!(parse_duration("1h"), Ok(Duration::from_secs(3600)));
        assert_eq!(parse_duration("30s"), Ok(Duration::from_secs(30)));
        assert_eq!(parse_duration("12"), Ok(Duration::from_secs(12)));
    }

    #[test]
    fn parse_duration_ms() {
        assert_eq!(parse_duration("500ms"), Ok(Duration::from_millis(500)));
    }

    #[test]
    fn parse_duration_garbage() {
        assert!(parse_duration("soon").is_err());
        assert!(parse_duration("ten seconds").is_err());
        assert!(parse_duration("-5s").is_err());
    }

    #[test]
    fn parse_duration_overflow() {
        assert!(parse_duration("307445734561825861m").is_err());
        assert!(parse_duration(&format!("{}h", u64::MAX)).is_err());
        assert_eq!(
            parse_duration(&format!("{}s", u64::MAX)),
            Ok(Duration::from_secs(u64::MAX))
        );
    }

    #[test]
    fn bad_timeout_is_usage_error() {
        let err = AppConfig::try_parse_from(["skiphire", "--timeout", "ten seconds"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(AppConfig::try_parse_from(["skiphire", "--timeout", "307445734561825861m"]).is_err());
    }

    #[test]
    fn timeout_flag_parses() {
        let config = AppConfig::try_parse_from(["skiphire", "--timeout", "2m"]).unwrap();
        assert_eq!(config.timeout_duration(), Duration::from_secs(120));
    }

    #[test]
    fn defaults() {
        let config = AppConfig::try_parse_from(["skiphire"]).unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.postcode, "NR32");
        assert_eq!(config.area, "Lowestoft");
        assert_eq!(config.timeout_duration(), Duration::from_secs(30));
        assert!(config.waste.is_empty());
        assert!(config.is_interactive());
    }

    #[test]
    fn waste_list_parses() {
        let config =
            AppConfig::try_parse_from(["skiphire", "--list", "--waste", "soil,Rubble"]).unwrap();
        assert_eq!(config.waste, [WasteType::Soil, WasteType::Rubble]);
        assert!(!config.is_interactive());
    }

    #[test]
    fn unknown_waste_rejected() {
        assert!(AppConfig::try_parse_from(["skiphire", "--waste", "asbestos"]).is_err());
    }

    #[test]
    fn json_requires_list() {
        assert!(AppConfig::try_parse_from(["skiphire", "--json"]).is_err());
        assert!(AppConfig::try_parse_from(["skiphire", "--list", "--json"]).is_ok());
    }

    #[test]
    fn query_uses_overrides() {
        let config =
            AppConfig::try_parse_from(["skiphire", "--postcode", "NR1", "--area", "Norwich"])
                .unwrap();
        let query = config.query();
        assert_eq!(query.postcode, "NR1");
        assert_eq!(query.area, "Norwich");
    }
}
