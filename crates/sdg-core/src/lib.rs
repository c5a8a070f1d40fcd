//! sdg-core: UN SDG badge core (goal registry, selection state, view
//! projection, component protocol, configuration).
//!
//! UI-agnostic: the egui add-on paints the `BadgeView` this crate projects.

mod component;
mod config;
mod error;
mod goal;
mod selection;
mod view;

// Goal Registry
pub use goal::{
    color_for_identifier, resolve_goal, ColorToken, GoalRecord, ResolvedGoal, SdgGoal,
    DEFAULT_ASSET_FILE, GENERIC_GOAL_LINK,
};

// Selection state
pub use selection::{GoalSelection, LoadingHint, DEFAULT_DIMENSION, DEFAULT_FETCH_PRIORITY};

// Render Projector
pub use view::{
    parse_dimension, project, BadgeContent, BadgeView, ImageNode, LinkNode,
    DEFAULT_DIMENSION_PX, LINK_REL,
};

// Component protocol (BadgeMessage is the UI bridge protocol; the add-on
// re-exports it)
pub use component::{
    register_badge_element, BadgeComponent, BadgeMessage, ElementRegistry, BADGE_TAG,
    ELEMENT_REGISTRY,
};

// Configuration
pub use config::{AssetMode, AssetSource, BadgeConfig, DEFAULT_ASSET_BASE};

// Errors (config path only; goal resolution is total)
pub use error::{BadgeError, BadgeResult};
