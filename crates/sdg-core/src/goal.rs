//! Goal Registry: the static mapping behind the badge.
//!
//! `SdgGoal` enumerates the 19 known identifiers (17 numbered goals plus
//! `all` and `circle`); `record()` is the enum-indexed configuration table
//! for asset, label, link, and color. String-keyed resolution is total:
//! unknown identifiers resolve through documented fallbacks instead of
//! errors, so a badge always renders.

use serde::{Deserialize, Serialize};

/// Generic top-level reference used when an identifier has no link entry.
pub const GENERIC_GOAL_LINK: &str = "https://www.un.org/sustainabledevelopment/";

/// Asset file served when an identifier has no image entry.
pub const DEFAULT_ASSET_FILE: &str = "default.svg";

// ---------------------------------------------------------------------------
// ColorToken: resolved background color for the badge container
// ---------------------------------------------------------------------------

/// Background color token. Only identifiers that parse to an integer in
/// 1..=17 carry a goal color; everything else (including `all`, `circle`,
/// and malformed input) is `Transparent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorToken {
    #[default]
    Transparent,
    Rgb(u8, u8, u8),
}

impl ColorToken {
    /// CSS-style rendition: `#rrggbb` or `transparent`.
    pub fn as_css(&self) -> String {
        match self {
            ColorToken::Transparent => "transparent".to_string(),
            ColorToken::Rgb(r, g, b) => format!("#{r:02x}{g:02x}{b:02x}"),
        }
    }

    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        match self {
            ColorToken::Transparent => None,
            ColorToken::Rgb(r, g, b) => Some((*r, *g, *b)),
        }
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        matches!(self, ColorToken::Transparent)
    }
}

// ---------------------------------------------------------------------------
// SdgGoal: the 19 known identifiers
// ---------------------------------------------------------------------------

/// One entry of the goal registry. Identifier strings are `"1"`..`"17"`,
/// `"all"`, and `"circle"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SdgGoal {
    Goal1,
    Goal2,
    Goal3,
    Goal4,
    Goal5,
    Goal6,
    Goal7,
    Goal8,
    Goal9,
    Goal10,
    Goal11,
    Goal12,
    Goal13,
    Goal14,
    Goal15,
    Goal16,
    Goal17,
    /// Composite badge showing all 17 goals.
    All,
    /// SDG color-wheel logo; the instantiation default.
    Circle,
}

/// Registry row for one goal: asset file name (joined to a base by
/// `AssetSource`), accessible label, reference link, and color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalRecord {
    pub asset_file: &'static str,
    pub label: &'static str,
    pub link: &'static str,
    pub color: ColorToken,
}

impl GoalRecord {
    const fn new(
        asset_file: &'static str,
        label: &'static str,
        link: &'static str,
        color: ColorToken,
    ) -> Self {
        Self { asset_file, label, link, color }
    }
}

impl SdgGoal {
    /// Exact match on the 19 known identifiers. Unknown input is `None`;
    /// callers that need total resolution go through [`resolve_goal`].
    pub fn from_identifier(s: &str) -> Option<Self> {
        match s {
            "1" => Some(SdgGoal::Goal1),
            "2" => Some(SdgGoal::Goal2),
            "3" => Some(SdgGoal::Goal3),
            "4" => Some(SdgGoal::Goal4),
            "5" => Some(SdgGoal::Goal5),
            "6" => Some(SdgGoal::Goal6),
            "7" => Some(SdgGoal::Goal7),
            "8" => Some(SdgGoal::Goal8),
            "9" => Some(SdgGoal::Goal9),
            "10" => Some(SdgGoal::Goal10),
            "11" => Some(SdgGoal::Goal11),
            "12" => Some(SdgGoal::Goal12),
            "13" => Some(SdgGoal::Goal13),
            "14" => Some(SdgGoal::Goal14),
            "15" => Some(SdgGoal::Goal15),
            "16" => Some(SdgGoal::Goal16),
            "17" => Some(SdgGoal::Goal17),
            "all" => Some(SdgGoal::All),
            "circle" => Some(SdgGoal::Circle),
            _ => None,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(SdgGoal::Goal1),
            2 => Some(SdgGoal::Goal2),
            3 => Some(SdgGoal::Goal3),
            4 => Some(SdgGoal::Goal4),
            5 => Some(SdgGoal::Goal5),
            6 => Some(SdgGoal::Goal6),
            7 => Some(SdgGoal::Goal7),
            8 => Some(SdgGoal::Goal8),
            9 => Some(SdgGoal::Goal9),
            10 => Some(SdgGoal::Goal10),
            11 => Some(SdgGoal::Goal11),
            12 => Some(SdgGoal::Goal12),
            13 => Some(SdgGoal::Goal13),
            14 => Some(SdgGoal::Goal14),
            15 => Some(SdgGoal::Goal15),
            16 => Some(SdgGoal::Goal16),
            17 => Some(SdgGoal::Goal17),
            _ => None,
        }
    }

    pub fn identifier(&self) -> &'static str {
        match self {
            SdgGoal::Goal1 => "1",
            SdgGoal::Goal2 => "2",
            SdgGoal::Goal3 => "3",
            SdgGoal::Goal4 => "4",
            SdgGoal::Goal5 => "5",
            SdgGoal::Goal6 => "6",
            SdgGoal::Goal7 => "7",
            SdgGoal::Goal8 => "8",
            SdgGoal::Goal9 => "9",
            SdgGoal::Goal10 => "10",
            SdgGoal::Goal11 => "11",
            SdgGoal::Goal12 => "12",
            SdgGoal::Goal13 => "13",
            SdgGoal::Goal14 => "14",
            SdgGoal::Goal15 => "15",
            SdgGoal::Goal16 => "16",
            SdgGoal::Goal17 => "17",
            SdgGoal::All => "all",
            SdgGoal::Circle => "circle",
        }
    }

    /// Goal number for the numbered goals; `None` for `all`/`circle`.
    pub fn number(&self) -> Option<u8> {
        self.identifier().parse().ok()
    }

    /// All 17 numbered goals in order. Used by swatch strips and tests.
    pub fn numbered() -> impl Iterator<Item = SdgGoal> {
        (1..=17).filter_map(SdgGoal::from_number)
    }

    /// The registry table. `circle` carries no link entry of its own and
    /// falls through to the generic reference; `all` and `circle` carry no
    /// goal color.
    pub fn record(&self) -> GoalRecord {
        use ColorToken::Rgb;
        match self {
            SdgGoal::Goal1 => GoalRecord::new("goal-1.svg", "Goal 1: No Poverty", "https://www.un.org/sustainabledevelopment/poverty/", Rgb(229, 36, 59)),
            SdgGoal::Goal2 => GoalRecord::new("goal-2.svg", "Goal 2: Zero Hunger", "https://www.un.org/sustainabledevelopment/hunger/", Rgb(221, 166, 58)),
            SdgGoal::Goal3 => GoalRecord::new("goal-3.svg", "Goal 3: Good Health and Well-being", "https://www.un.org/sustainabledevelopment/health/", Rgb(76, 159, 56)),
            SdgGoal::Goal4 => GoalRecord::new("goal-4.svg", "Goal 4: Quality Education", "https://www.un.org/sustainabledevelopment/education/", Rgb(197, 25, 45)),
            SdgGoal::Goal5 => GoalRecord::new("goal-5.svg", "Goal 5: Gender Equality", "https://www.un.org/sustainabledevelopment/gender-equality/", Rgb(255, 58, 33)),
            SdgGoal::Goal6 => GoalRecord::new("goal-6.svg", "Goal 6: Clean Water and Sanitation", "https://www.un.org/sustainabledevelopment/water-and-sanitation/", Rgb(38, 189, 226)),
            SdgGoal::Goal7 => GoalRecord::new("goal-7.svg", "Goal 7: Affordable and Clean Energy", "https://www.un.org/sustainabledevelopment/energy/", Rgb(252, 195, 11)),
            SdgGoal::Goal8 => GoalRecord::new("goal-8.svg", "Goal 8: Decent Work and Economic Growth", "https://www.un.org/sustainabledevelopment/economic-growth/", Rgb(162, 25, 66)),
            SdgGoal::Goal9 => GoalRecord::new("goal-9.svg", "Goal 9: Industry, Innovation and Infrastructure", "https://www.un.org/sustainabledevelopment/infrastructure-industrialization/", Rgb(253, 105, 37)),
            SdgGoal::Goal10 => GoalRecord::new("goal-10.svg", "Goal 10: Reduced Inequalities", "https://www.un.org/sustainabledevelopment/inequality/", Rgb(221, 19, 103)),
            SdgGoal::Goal11 => GoalRecord::new("goal-11.svg", "Goal 11: Sustainable Cities and Communities", "https://www.un.org/sustainabledevelopment/cities/", Rgb(253, 157, 36)),
            SdgGoal::Goal12 => GoalRecord::new("goal-12.svg", "Goal 12: Responsible Consumption and Production", "https://www.un.org/sustainabledevelopment/sustainable-consumption-production/", Rgb(191, 139, 46)),
            SdgGoal::Goal13 => GoalRecord::new("goal-13.svg", "Goal 13: Climate Action", "https://www.un.org/sustainabledevelopment/climate-change/", Rgb(63, 126, 68)),
            SdgGoal::Goal14 => GoalRecord::new("goal-14.svg", "Goal 14: Life Below Water", "https://www.un.org/sustainabledevelopment/oceans/", Rgb(10, 151, 217)),
            SdgGoal::Goal15 => GoalRecord::new("goal-15.svg", "Goal 15: Life on Land", "https://www.un.org/sustainabledevelopment/biodiversity/", Rgb(86, 192, 43)),
            SdgGoal::Goal16 => GoalRecord::new("goal-16.svg", "Goal 16: Peace, Justice and Strong Institutions", "https://www.un.org/sustainabledevelopment/peace-justice/", Rgb(0, 104, 157)),
            SdgGoal::Goal17 => GoalRecord::new("goal-17.svg", "Goal 17: Partnerships for the Goals", "https://www.un.org/sustainabledevelopment/globalpartnerships/", Rgb(25, 72, 106)),
            SdgGoal::All => GoalRecord::new("all.svg", "All 17 Sustainable Development Goals", "https://www.un.org/sustainabledevelopment/sustainable-development-goals/", ColorToken::Transparent),
            SdgGoal::Circle => GoalRecord::new("circle.png", "Sustainable Development Goals logo", GENERIC_GOAL_LINK, ColorToken::Transparent),
        }
    }
}

// ---------------------------------------------------------------------------
// Total resolution: never fails, falls back per field
// ---------------------------------------------------------------------------

/// Lookup product for one identifier. Cached on `GoalSelection` and
/// recomputed on every identifier change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedGoal {
    pub asset_file: String,
    pub label: String,
    pub link: String,
    pub color: ColorToken,
}

impl Default for ResolvedGoal {
    fn default() -> Self {
        resolve_goal(SdgGoal::Circle.identifier())
    }
}

/// Color resolution is independent of the exact-match tables: the identifier
/// is parsed as an integer and only 1..=17 select a goal color.
pub fn color_for_identifier(identifier: &str) -> ColorToken {
    match identifier.trim().parse::<u8>().ok().and_then(SdgGoal::from_number) {
        Some(goal) => goal.record().color,
        None => ColorToken::Transparent,
    }
}

/// Resolves an identifier to `(imageRef, label, link, colorToken)`. Total:
/// a miss yields the default asset, a synthesized label, and the generic
/// link rather than an error.
pub fn resolve_goal(identifier: &str) -> ResolvedGoal {
    match SdgGoal::from_identifier(identifier) {
        Some(goal) => {
            let record = goal.record();
            ResolvedGoal {
                asset_file: record.asset_file.to_string(),
                label: record.label.to_string(),
                link: record.link.to_string(),
                color: record.color,
            }
        }
        None => {
            tracing::debug!(identifier, "unknown goal identifier; resolving via fallbacks");
            ResolvedGoal {
                asset_file: DEFAULT_ASSET_FILE.to_string(),
                label: format!("Sustainable Development Goal {identifier}"),
                link: GENERIC_GOAL_LINK.to_string(),
                color: color_for_identifier(identifier),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_round_trip() {
        for id in ["1", "9", "17", "all", "circle"] {
            let goal = SdgGoal::from_identifier(id).unwrap();
            assert_eq!(goal.identifier(), id);
        }
        assert!(SdgGoal::from_identifier("0").is_none());
        assert!(SdgGoal::from_identifier("18").is_none());
        assert!(SdgGoal::from_identifier("ALL").is_none());
    }

    #[test]
    fn test_numbered_goals_have_colors() {
        for goal in SdgGoal::numbered() {
            assert!(goal.record().color.rgb().is_some(), "{:?}", goal);
        }
        assert!(SdgGoal::All.record().color.is_transparent());
        assert!(SdgGoal::Circle.record().color.is_transparent());
    }

    #[test]
    fn test_color_css() {
        assert_eq!(SdgGoal::Goal1.record().color.as_css(), "#e5243b");
        assert_eq!(SdgGoal::Goal17.record().color.as_css(), "#19486a");
        assert_eq!(ColorToken::Transparent.as_css(), "transparent");
    }

    #[test]
    fn test_color_for_identifier_parses_integer() {
        assert_eq!(color_for_identifier("3"), SdgGoal::Goal3.record().color);
        assert_eq!(color_for_identifier(" 7 "), SdgGoal::Goal7.record().color);
        assert_eq!(color_for_identifier("0"), ColorToken::Transparent);
        assert_eq!(color_for_identifier("18"), ColorToken::Transparent);
        assert_eq!(color_for_identifier("all"), ColorToken::Transparent);
        assert_eq!(color_for_identifier("circle"), ColorToken::Transparent);
    }

    #[test]
    fn test_circle_link_is_generic() {
        assert_eq!(SdgGoal::Circle.record().link, GENERIC_GOAL_LINK);
        assert_ne!(SdgGoal::All.record().link, GENERIC_GOAL_LINK);
    }

    #[test]
    fn test_resolve_known() {
        let resolved = resolve_goal("4");
        assert_eq!(resolved.asset_file, "goal-4.svg");
        assert_eq!(resolved.label, "Goal 4: Quality Education");
        assert_eq!(resolved.link, "https://www.un.org/sustainabledevelopment/education/");
        assert_eq!(resolved.color, ColorToken::Rgb(197, 25, 45));
    }

    #[test]
    fn test_resolve_unknown_falls_back() {
        let resolved = resolve_goal("99");
        assert_eq!(resolved.asset_file, DEFAULT_ASSET_FILE);
        assert_eq!(resolved.label, "Sustainable Development Goal 99");
        assert_eq!(resolved.link, GENERIC_GOAL_LINK);
        assert_eq!(resolved.color, ColorToken::Transparent);
    }
}
