//! Heavy waste percentage bands.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Approximate share of heavy waste in the skip.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PercentageBand {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl PercentageBand {
    /// Every band in display order.
    pub const ALL: [PercentageBand; 4] = [
        PercentageBand::None,
        PercentageBand::Low,
        PercentageBand::Medium,
        PercentageBand::High,
    ];

    /// Stable identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            PercentageBand::None => "none",
            PercentageBand::Low => "low",
            PercentageBand::Medium => "medium",
            PercentageBand::High => "high",
        }
    }

    /// Short label shown on the picker button.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PercentageBand::None => "No heavy waste",
            PercentageBand::Low => "Up to 5%",
            PercentageBand::Medium => "5-20%",
            PercentageBand::High => "Over 20%",
        }
    }

    /// Sentence shown under the picker for the current band.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            PercentageBand::None => "No heavy waste in your skip",
            PercentageBand::Low => "A small amount of heavy waste",
            PercentageBand::Medium => "A moderate amount of heavy waste",
            PercentageBand::High => "A large amount of heavy waste",
        }
    }

    /// Illustration for the visual panel, if the band has one.
    #[must_use]
    pub fn image(self) -> Option<&'static str> {
        match self {
            PercentageBand::None => None,
            PercentageBand::Low => Some("/src/assets/heavywaste-up-to-5.png"),
            PercentageBand::Medium => Some("/src/assets/heavywaste-5-to-20.png"),
            PercentageBand::High => Some("/src/assets/heavywaste-over20.png"),
        }
    }

    /// Caption under the illustration.
    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            PercentageBand::None => "Regular skip without heavy waste",
            PercentageBand::Low => "Skip with a small amount of heavy waste (up to 5%)",
            PercentageBand::Medium => "Skip with a moderate amount of heavy waste (5-20%)",
            PercentageBand::High => "Skip with a large amount of heavy waste (over 20%)",
        }
    }

    #[must_use]
    pub fn is_none(self) -> bool {
        self == PercentageBand::None
    }
}

impl fmt::Display for PercentageBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        assert_eq!(PercentageBand::default(), PercentageBand::None);
        assert!(PercentageBand::default().is_none());
    }

    #[test]
    fn only_none_lacks_image() {
        for band in PercentageBand::ALL {
            assert_eq!(band.image().is_none(), band.is_none());
        }
    }

    #[test]
    fn labels() {
        assert_eq!(PercentageBand::Low.label(), "Up to 5%");
        assert_eq!(PercentageBand::Medium.label(), "5-20%");
        assert_eq!(PercentageBand::High.label(), "Over 20%");
    }

    #[test]
    fn serde_uses_ids() {
        let json = serde_json::to_string(&PercentageBand::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
