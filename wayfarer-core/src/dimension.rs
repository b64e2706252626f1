//! Dimensions describing the fixed axes of travel preference.
//!
//! The enum offers compile-time safety for rating lookups. Every preference
//! and destination record is expressed over exactly these six axes.
//!
//! # Examples
//! ```
//! use wayfarer_core::Dimension;
//!
//! assert_eq!(Dimension::Climate.as_str(), "climate");
//! assert_eq!(Dimension::Nightlife.to_string(), "nightlife");
//! assert_eq!(Dimension::ALL.len(), 6);
//! ```

use thiserror::Error;

/// One named travel-preference axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dimension {
    /// Warmth of the climate, from cold to tropical.
    Climate,
    /// Cost level, from very cheap to luxury.
    Budget,
    /// Intensity of outdoor and adventure activities.
    Adventure,
    /// Depth of cultural and historical offering.
    Culture,
    /// Access to natural landscapes.
    Nature,
    /// Liveliness of the nightlife scene.
    Nightlife,
}

/// Error returned when parsing an unknown dimension name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dimension '{name}'")]
pub struct ParseDimensionError {
    /// The rejected input.
    pub name: String,
}

impl Dimension {
    /// Every dimension in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Climate,
        Self::Budget,
        Self::Adventure,
        Self::Culture,
        Self::Nature,
        Self::Nightlife,
    ];

    /// Number of dimensions in the closed set.
    pub const COUNT: usize = Self::ALL.len();

    /// Return the dimension as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Climate => "climate",
            Self::Budget => "budget",
            Self::Adventure => "adventure",
            Self::Culture => "culture",
            Self::Nature => "nature",
            Self::Nightlife => "nightlife",
        }
    }

    /// Human-facing name used when explaining factor matches.
    ///
    /// # Examples
    /// ```
    /// use wayfarer_core::Dimension;
    ///
    /// assert_eq!(Dimension::Culture.display_name(), "cultural richness");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Climate => "climate",
            Self::Budget => "budget",
            Self::Adventure => "adventure level",
            Self::Culture => "cultural richness",
            Self::Nature => "natural beauty",
            Self::Nightlife => "nightlife scene",
        }
    }

    /// Position of the dimension within [`Dimension::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Climate => 0,
            Self::Budget => 1,
            Self::Adventure => 2,
            Self::Culture => 3,
            Self::Nature => 4,
            Self::Nightlife => 5,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Dimension {
    type Err = ParseDimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "climate" => Ok(Self::Climate),
            "budget" => Ok(Self::Budget),
            "adventure" => Ok(Self::Adventure),
            "culture" => Ok(Self::Culture),
            "nature" => Ok(Self::Nature),
            "nightlife" => Ok(Self::Nightlife),
            _ => Err(ParseDimensionError { name: s.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    fn display_matches_as_str() {
        for dimension in Dimension::ALL {
            assert_eq!(dimension.to_string(), dimension.as_str());
        }
    }

    #[rstest]
    fn index_matches_canonical_order() {
        for (position, dimension) in Dimension::ALL.iter().enumerate() {
            assert_eq!(dimension.index(), position);
        }
    }

    #[rstest]
    #[case("climate", Dimension::Climate)]
    #[case("NightLife", Dimension::Nightlife)]
    #[case(" nature ", Dimension::Nature)]
    fn parsing_is_case_insensitive(#[case] input: &str, #[case] expected: Dimension) {
        assert_eq!(Dimension::from_str(input), Ok(expected));
    }

    #[rstest]
    fn parsing_rejects_unknown() {
        let err = Dimension::from_str("shopping").unwrap_err();
        assert!(err.to_string().contains("unknown dimension"));
    }
}
