//! GoalSelection: the single component entity.
//!
//! Holds the raw identifier, the instance-level overrides (size, label,
//! loading hints, color-only mode), and the registry-derived attributes.
//! Derived attributes are recomputed whenever the identifier changes, so
//! they never diverge from the registry between renders.

use serde::{Deserialize, Serialize};

use crate::goal::{resolve_goal, ColorToken, ResolvedGoal, SdgGoal};

/// Default edge length of the badge container.
pub const DEFAULT_DIMENSION: &str = "254px";

/// Default fetch-priority hint, carried verbatim to the image node.
pub const DEFAULT_FETCH_PRIORITY: &str = "low";

// ---------------------------------------------------------------------------
// LoadingHint
// ---------------------------------------------------------------------------

/// Image load hint. The default is `Lazy`, but anything other than the exact
/// string `lazy` renders eagerly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingHint {
    #[default]
    Lazy,
    Eager,
}

impl LoadingHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadingHint::Lazy => "lazy",
            LoadingHint::Eager => "eager",
        }
    }

    pub fn from_str(s: &str) -> Self {
        if s == "lazy" {
            LoadingHint::Lazy
        } else {
            LoadingHint::Eager
        }
    }
}

// ---------------------------------------------------------------------------
// GoalSelection
// ---------------------------------------------------------------------------

/// Selection state for one badge instance. Created with defaults, mutated by
/// setters (or `BadgeMessage` via the component protocol), dropped with the
/// instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalSelection {
    identifier: String,
    /// Free-form dimension strings, e.g. "254px" or "120".
    pub width: String,
    pub height: String,
    /// Explicit label override; empty means the derived label applies.
    label_override: String,
    pub loading: LoadingHint,
    /// Fetch-priority hint, passed through verbatim.
    pub fetch_priority: String,
    /// Color-swatch-only mode: suppresses the link and image.
    pub color_only: bool,
    derived: ResolvedGoal,
}

impl Default for GoalSelection {
    fn default() -> Self {
        let identifier = SdgGoal::Circle.identifier().to_string();
        let derived = resolve_goal(&identifier);
        Self {
            identifier,
            width: DEFAULT_DIMENSION.to_string(),
            height: DEFAULT_DIMENSION.to_string(),
            label_override: String::new(),
            loading: LoadingHint::Lazy,
            fetch_priority: DEFAULT_FETCH_PRIORITY.to_string(),
            color_only: false,
            derived,
        }
    }
}

impl GoalSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style constructor for a known goal.
    pub fn with_goal(goal: SdgGoal) -> Self {
        let mut selection = Self::default();
        selection.set_goal(goal.identifier());
        selection
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Changes the identifier and re-runs the registry lookup, updating all
    /// derived attributes before the next render. Unknown identifiers are
    /// accepted and resolve through the registry fallbacks.
    pub fn set_goal(&mut self, identifier: &str) {
        if self.identifier == identifier {
            return;
        }
        self.identifier = identifier.to_string();
        self.derived = resolve_goal(&self.identifier);
        tracing::debug!(
            identifier = %self.identifier,
            asset = %self.derived.asset_file,
            "goal changed; derived attributes recomputed"
        );
    }

    /// Sets the explicit label override. A non-empty override wins over the
    /// derived label no matter the order it was set in relative to the goal;
    /// an empty string clears it.
    pub fn set_label(&mut self, label: &str) {
        self.label_override = label.to_string();
    }

    pub fn set_loading(&mut self, hint: &str) {
        self.loading = LoadingHint::from_str(hint);
    }

    /// Re-runs the registry lookup for the current identifier. Called from
    /// the component `init` hook so deserialized instances cannot carry
    /// derived attributes that diverge from the registry.
    pub fn refresh_derived(&mut self) {
        self.derived = resolve_goal(&self.identifier);
    }

    /// Registry-derived attributes for the current identifier.
    pub fn derived(&self) -> &ResolvedGoal {
        &self.derived
    }

    /// Accessible label: the explicit override when non-empty, else the
    /// derived (table or synthesized) label.
    pub fn effective_label(&self) -> &str {
        if self.label_override.is_empty() {
            &self.derived.label
        } else {
            &self.label_override
        }
    }

    pub fn label_override(&self) -> &str {
        &self.label_override
    }

    pub fn color(&self) -> ColorToken {
        self.derived.color
    }
}
