//! Heavy waste type catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A heavy waste material the user can declare.
///
/// Ordering follows catalog order, so a `BTreeSet<WasteType>` iterates the
/// same way the picker displays them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WasteType {
    Soil,
    Concrete,
    Bricks,
    Tiles,
    Sand,
    Gravel,
    Rubble,
}

impl WasteType {
    /// Every waste type in display order.
    pub const ALL: [WasteType; 7] = [
        WasteType::Soil,
        WasteType::Concrete,
        WasteType::Bricks,
        WasteType::Tiles,
        WasteType::Sand,
        WasteType::Gravel,
        WasteType::Rubble,
    ];

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            WasteType::Soil => "Soil",
            WasteType::Concrete => "Concrete",
            WasteType::Bricks => "Bricks",
            WasteType::Tiles => "Tiles",
            WasteType::Sand => "Sand",
            WasteType::Gravel => "Gravel",
            WasteType::Rubble => "Rubble",
        }
    }
}

impl fmt::Display for WasteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known waste type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown waste type: {0}")]
pub struct UnknownWasteType(pub String);

impl FromStr for WasteType {
    type Err = UnknownWasteType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        WasteType::ALL
            .into_iter()
            .find(|w| w.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownWasteType(needle.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order() {
        let names: Vec<&str> = WasteType::ALL.iter().map(|w| w.name()).collect();
        assert_eq!(
            names,
            ["Soil", "Concrete", "Bricks", "Tiles", "Sand", "Gravel", "Rubble"]
        );
    }

    #[test]
    fn ord_matches_catalog() {
        let mut sorted = WasteType::ALL;
        sorted.sort();
        assert_eq!(sorted, WasteType::ALL);
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!("soil".parse::<WasteType>(), Ok(WasteType::Soil));
        assert_eq!(" RUBBLE ".parse::<WasteType>(), Ok(WasteType::Rubble));
    }

    #[test]
    fn parse_unknown() {
        let err = "asbestos".parse::<WasteType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown waste type: asbestos");
    }

    #[test]
    fn display_round_trips_through_parse() {
        for w in WasteType::ALL {
            assert_eq!(w.to_string().parse::<WasteType>(), Ok(w));
        }
    }
}
