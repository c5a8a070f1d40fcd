//! Render Projector: selection state -> view tree.
//!
//! The projector combines the registry-derived attributes with the
//! instance-level overrides and produces a plain data `BadgeView`. The egui
//! add-on paints this tree; tests inspect it directly, so rendering logic is
//! exercised without a GUI.

use serde::Serialize;

use crate::config::AssetSource;
use crate::goal::ColorToken;
use crate::selection::{GoalSelection, LoadingHint};

/// Relationship attributes on the badge hyperlink: the link opens in a new
/// context and must not leak an opener handle or referrer.
pub const LINK_REL: &str = "noopener noreferrer";

/// Pixel fallback when a dimension string does not parse.
pub const DEFAULT_DIMENSION_PX: f32 = 254.0;

/// Sized container with a background color token, optionally holding the
/// link-wrapped image. `content` is `None` in color-only mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeView {
    pub width_px: f32,
    pub height_px: f32,
    pub background: ColorToken,
    pub content: Option<BadgeContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeContent {
    pub link: LinkNode,
    pub image: ImageNode,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkNode {
    pub href: String,
    pub new_tab: bool,
    pub rel: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageNode {
    pub src: String,
    /// Accessible text: the effective (override or derived) label.
    pub alt: String,
    pub loading: LoadingHint,
    /// Carried verbatim from the selection; the host loader may ignore it.
    pub fetch_priority: String,
}

/// Parses a free-form dimension string ("254px", "120", " 40.5 px ") to
/// pixels. Malformed or negative input falls back to the default edge
/// length; the badge never fails to size itself.
pub fn parse_dimension(s: &str) -> f32 {
    s.trim()
        .trim_end_matches("px")
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(DEFAULT_DIMENSION_PX)
}

/// Projects the current selection into a view tree. Pure: no state is
/// mutated, and repeated projection of the same selection yields the same
/// tree.
pub fn project(selection: &GoalSelection, assets: &AssetSource) -> BadgeView {
    let derived = selection.derived();
    let content = if selection.color_only {
        None
    } else {
        Some(BadgeContent {
            link: LinkNode {
                href: derived.link.clone(),
                new_tab: true,
                rel: LINK_REL,
            },
            image: ImageNode {
                src: assets.resolve(&derived.asset_file),
                alt: selection.effective_label().to_string(),
                loading: selection.loading,
                fetch_priority: selection.fetch_priority.clone(),
            },
        })
    };
    BadgeView {
        width_px: parse_dimension(&selection.width),
        height_px: parse_dimension(&selection.height),
        background: derived.color,
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("254px"), 254.0);
        assert_eq!(parse_dimension("120"), 120.0);
        assert_eq!(parse_dimension(" 40.5 px "), 40.5);
        assert_eq!(parse_dimension(""), DEFAULT_DIMENSION_PX);
        assert_eq!(parse_dimension("wide"), DEFAULT_DIMENSION_PX);
        assert_eq!(parse_dimension("-10px"), DEFAULT_DIMENSION_PX);
    }

    #[test]
    fn test_project_full_card() {
        let mut selection = GoalSelection::default();
        selection.set_goal("5");
        let view = project(&selection, &AssetSource::default());

        assert_eq!(view.width_px, 254.0);
        assert_eq!(view.background, ColorToken::Rgb(255, 58, 33));
        let content = view.content.expect("full card has link and image");
        assert_eq!(content.link.href, "https://www.un.org/sustainabledevelopment/gender-equality/");
        assert!(content.link.new_tab);
        assert_eq!(content.link.rel, "noopener noreferrer");
        assert_eq!(content.image.src, "file://./lib/goal-5.svg");
        assert_eq!(content.image.alt, "Goal 5: Gender Equality");
        assert_eq!(content.image.loading, LoadingHint::Lazy);
        assert_eq!(content.image.fetch_priority, "low");
    }

    #[test]
    fn test_project_color_only() {
        let mut selection = GoalSelection::default();
        selection.set_goal("7");
        selection.color_only = true;
        let view = project(&selection, &AssetSource::default());
        assert_eq!(view.background, ColorToken::Rgb(252, 195, 11));
        assert!(view.content.is_none());
    }

    #[test]
    fn test_project_uses_override_label_and_size() {
        let mut selection = GoalSelection::default();
        selection.set_goal("3");
        selection.set_label("Health badge");
        selection.width = "96px".to_string();
        selection.height = "48".to_string();
        let view = project(&selection, &AssetSource::remote("https://example.org/lib"));
        assert_eq!(view.width_px, 96.0);
        assert_eq!(view.height_px, 48.0);
        let content = view.content.unwrap();
        assert_eq!(content.image.alt, "Health badge");
        assert_eq!(content.image.src, "https://example.org/lib/goal-3.svg");
    }

    #[test]
    fn test_view_tree_is_inspectable_as_json() {
        let mut selection = GoalSelection::default();
        selection.set_goal("16");
        let view = project(&selection, &AssetSource::default());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["width_px"], 254.0);
        assert_eq!(json["content"]["link"]["rel"], "noopener noreferrer");
        assert_eq!(json["content"]["image"]["loading"], "lazy");
    }

    #[test]
    fn test_projection_is_pure() {
        let mut selection = GoalSelection::default();
        selection.set_goal("11");
        let assets = AssetSource::default();
        assert_eq!(project(&selection, &assets), project(&selection, &assets));
    }
}
