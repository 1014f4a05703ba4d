use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

/// Severity band of an Air Quality Index reading.
///
/// The six named bands cover AQI 0 through 500 inclusive. Anything outside
/// that span (negative, or above 500) falls into `Unknown` rather than being
/// clamped to the nearest band.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
    Unknown,
}

/// Display color associated with an `AqiCategory`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum AqiColor {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Maroon,
    Gray,
}

/// The (category, color, advisory) triple derived from an AQI value.
///
/// Never stored alongside a record; recompute it with [`classify`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct Classification {
    pub category: AqiCategory,
    pub color: AqiColor,
    pub advisory: &'static str,
}

/// Classify an AQI value. Total over `i32`: out-of-range input yields
/// `Unknown` / `Gray` / "Invalid AQI value.".
pub fn classify(aqi: i32) -> Classification {
    let category = AqiCategory::from_aqi(aqi);
    Classification {
        category,
        color: category.color(),
        advisory: category.advisory(),
    }
}

impl AqiCategory {
    /// The six named categories in order of increasing severity.
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthyForSensitiveGroups,
        AqiCategory::Unhealthy,
        AqiCategory::VeryUnhealthy,
        AqiCategory::Hazardous,
    ];

    /// First band whose inclusive range contains `aqi`, else `Unknown`.
    pub fn from_aqi(aqi: i32) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.range().is_some_and(|r| r.contains(&aqi)))
            .unwrap_or(AqiCategory::Unknown)
    }

    /// Inclusive AQI range of the band. `None` for `Unknown`.
    pub fn range(&self) -> Option<RangeInclusive<i32>> {
        match self {
            AqiCategory::Good => Some(0..=50),
            AqiCategory::Moderate => Some(51..=100),
            AqiCategory::UnhealthyForSensitiveGroups => Some(101..=150),
            AqiCategory::Unhealthy => Some(151..=200),
            AqiCategory::VeryUnhealthy => Some(201..=300),
            AqiCategory::Hazardous => Some(301..=500),
            AqiCategory::Unknown => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
            AqiCategory::VeryUnhealthy => "Very Unhealthy",
            AqiCategory::Hazardous => "Hazardous",
            AqiCategory::Unknown => "Unknown",
        }
    }

    pub fn color(&self) -> AqiColor {
        match self {
            AqiCategory::Good => AqiColor::Green,
            AqiCategory::Moderate => AqiColor::Yellow,
            AqiCategory::UnhealthyForSensitiveGroups => AqiColor::Orange,
            AqiCategory::Unhealthy => AqiColor::Red,
            AqiCategory::VeryUnhealthy => AqiColor::Purple,
            AqiCategory::Hazardous => AqiColor::Maroon,
            AqiCategory::Unknown => AqiColor::Gray,
        }
    }

    /// Health implications text shown to the user.
    pub fn advisory(&self) -> &'static str {
        match self {
            AqiCategory::Good => {
                "Air quality is considered satisfactory and poses little or no risk."
            }
            AqiCategory::Moderate => {
                "Acceptable air quality, but there may be a concern for some sensitive individuals."
            }
            AqiCategory::UnhealthyForSensitiveGroups => {
                "People with respiratory conditions, children, and elderly may be affected."
            }
            AqiCategory::Unhealthy => "Everyone may begin to experience health effects.",
            AqiCategory::VeryUnhealthy => "Health alert: serious effects for everyone.",
            AqiCategory::Hazardous => {
                "Emergency conditions. Everyone should avoid outdoor exposure."
            }
            AqiCategory::Unknown => "Invalid AQI value.",
        }
    }
}

impl AqiColor {
    /// Capitalized color name, e.g. "Green".
    pub fn name(&self) -> &'static str {
        match self {
            AqiColor::Green => "Green",
            AqiColor::Yellow => "Yellow",
            AqiColor::Orange => "Orange",
            AqiColor::Red => "Red",
            AqiColor::Purple => "Purple",
            AqiColor::Maroon => "Maroon",
            AqiColor::Gray => "Gray",
        }
    }

    /// Lowercased CSS named color used when rendering, e.g. "green".
    pub fn css(&self) -> &'static str {
        match self {
            AqiColor::Green => "green",
            AqiColor::Yellow => "yellow",
            AqiColor::Orange => "orange",
            AqiColor::Red => "red",
            AqiColor::Purple => "purple",
            AqiColor::Maroon => "maroon",
            AqiColor::Gray => "gray",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for AqiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "Good", "Green")]
    #[case(50, "Good", "Green")]
    #[case(51, "Moderate", "Yellow")]
    #[case(100, "Moderate", "Yellow")]
    #[case(101, "Unhealthy for Sensitive Groups", "Orange")]
    #[case(150, "Unhealthy for Sensitive Groups", "Orange")]
    #[case(151, "Unhealthy", "Red")]
    #[case(200, "Unhealthy", "Red")]
    #[case(201, "Very Unhealthy", "Purple")]
    #[case(300, "Very Unhealthy", "Purple")]
    #[case(301, "Hazardous", "Maroon")]
    #[case(500, "Hazardous", "Maroon")]
    #[case(-1, "Unknown", "Gray")]
    #[case(501, "Unknown", "Gray")]
    fn test_classify_boundaries(#[case] aqi: i32, #[case] label: &str, #[case] color: &str) {
        let c = classify(aqi);
        assert_eq!(c.category.label(), label);
        assert_eq!(c.color.name(), color);
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        for aqi in [i32::MIN, -500, -1, 501, 1000, i32::MAX] {
            let c = classify(aqi);
            assert_eq!(c.category, AqiCategory::Unknown);
            assert_eq!(c.color, AqiColor::Gray);
            assert_eq!(c.advisory, "Invalid AQI value.");
        }
    }

    #[test]
    fn test_advisory_text() {
        assert_eq!(
            classify(151).advisory,
            "Everyone may begin to experience health effects."
        );
        assert_eq!(
            classify(89).advisory,
            "Acceptable air quality, but there may be a concern for some sensitive individuals."
        );
        assert_eq!(
            classify(450).advisory,
            "Emergency conditions. Everyone should avoid outdoor exposure."
        );
    }

    #[test]
    fn test_named_ranges_tile_zero_to_five_hundred() {
        let mut next = 0;
        for category in AqiCategory::ALL {
            let range = category.range().unwrap();
            assert_eq!(*range.start(), next, "gap before {}", category);
            next = range.end() + 1;
        }
        assert_eq!(next, 501);
        assert!(AqiCategory::Unknown.range().is_none());
    }

    #[test]
    fn test_css_is_lowercased_name() {
        for category in AqiCategory::ALL {
            let color = category.color();
            assert_eq!(color.css(), color.name().to_lowercase());
        }
        assert_eq!(AqiColor::Gray.css(), "gray");
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AqiCategory::UnhealthyForSensitiveGroups.to_string(),
            "Unhealthy for Sensitive Groups"
        );
        assert_eq!(AqiColor::Maroon.to_string(), "Maroon");
    }

    proptest! {
        #[test]
        fn classify_matches_range_membership(aqi in any::<i32>()) {
            let c = classify(aqi);
            if (0..=500).contains(&aqi) {
                prop_assert_ne!(c.category, AqiCategory::Unknown);
                prop_assert!(c.category.range().unwrap().contains(&aqi));
            } else {
                prop_assert_eq!(c.category, AqiCategory::Unknown);
                prop_assert_eq!(c.color, AqiColor::Gray);
            }
            prop_assert_eq!(c.color, c.category.color());
        }

        #[test]
        fn classify_is_deterministic(aqi in -1000i32..1000) {
            prop_assert_eq!(classify(aqi), classify(aqi));
        }
    }
}
