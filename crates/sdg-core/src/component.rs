//! Component protocol: lifecycle capability, attribute-change messages, and
//! element registration.
//!
//! `BadgeComponent` is the explicit "renderable UI component" capability
//! (init / on-attribute-change / render) implemented by composition on
//! `GoalSelection`. `BadgeMessage` is the protocol carried by the UI bridge;
//! it lives here so host code and the add-on use one type. `ElementRegistry`
//! holds tag registrations behind an explicit, guarded call made once at
//! process initialization.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::config::AssetSource;
use crate::selection::GoalSelection;
use crate::view::{project, BadgeView};

/// Tag under which the badge element registers.
pub const BADGE_TAG: &str = "un-sdg";

// ---------------------------------------------------------------------------
// BadgeMessage: one variant per public attribute
// ---------------------------------------------------------------------------

/// Attribute change applied to a badge instance. Host code sends these over
/// the UI bridge; the widget applies them before the next render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BadgeMessage {
    /// Selects the registry entry; unknown identifiers resolve via fallbacks.
    Goal(String),
    Width(String),
    Height(String),
    /// Non-empty overrides the derived label; empty clears the override.
    Label(String),
    /// "lazy" or "eager"; anything else renders eagerly.
    Loading(String),
    FetchPriority(String),
    ColorOnly(bool),
}

// ---------------------------------------------------------------------------
// BadgeComponent: lifecycle capability
// ---------------------------------------------------------------------------

/// Renderable-component capability: lifecycle hooks by composition instead
/// of host-framework inheritance.
pub trait BadgeComponent {
    /// One-time setup after instantiation (or after deserialization).
    fn init(&mut self);

    /// Applies one attribute change. Identifier changes re-run the registry
    /// lookup; other attributes affect rendering directly.
    fn on_attribute_change(&mut self, change: BadgeMessage);

    /// Projects the current state into a view tree.
    fn render(&self, assets: &AssetSource) -> BadgeView;
}

impl BadgeComponent for GoalSelection {
    fn init(&mut self) {
        // Deserialized instances may carry stale derived attributes.
        self.refresh_derived();
    }

    fn on_attribute_change(&mut self, change: BadgeMessage) {
        match change {
            BadgeMessage::Goal(identifier) => self.set_goal(&identifier),
            BadgeMessage::Width(width) => self.width = width,
            BadgeMessage::Height(height) => self.height = height,
            BadgeMessage::Label(label) => self.set_label(&label),
            BadgeMessage::Loading(hint) => self.set_loading(&hint),
            BadgeMessage::FetchPriority(priority) => self.fetch_priority = priority,
            BadgeMessage::ColorOnly(on) => self.color_only = on,
        }
    }

    fn render(&self, assets: &AssetSource) -> BadgeView {
        project(self, assets)
    }
}

// ---------------------------------------------------------------------------
// ElementRegistry: explicit, guarded registration
// ---------------------------------------------------------------------------

type ElementCtor = fn() -> GoalSelection;

/// Tag -> constructor registry. Registration is idempotent-guarded: a tag
/// registers once and later attempts are refused.
#[derive(Debug, Default)]
pub struct ElementRegistry {
    index: RwLock<HashMap<String, ElementCtor>>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self { index: RwLock::new(HashMap::new()) }
    }

    /// Registers a constructor under `tag`. Returns false (and leaves the
    /// existing entry untouched) when the tag is already registered.
    pub fn register(&self, tag: &str, ctor: ElementCtor) -> bool {
        let mut guard = match self.index.write() {
            Ok(g) => g,
            Err(_) => return false,
        };
        if guard.contains_key(tag) {
            tracing::debug!(tag, "element tag already registered; refusing duplicate");
            return false;
        }
        guard.insert(tag.to_string(), ctor);
        tracing::debug!(tag, "element tag registered");
        true
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.index
            .read()
            .map(|g| g.contains_key(tag))
            .unwrap_or(false)
    }

    /// Constructs and initializes an instance of the element registered
    /// under `tag`.
    pub fn instantiate(&self, tag: &str) -> Option<GoalSelection> {
        let ctor = {
            let guard = match self.index.read() {
                Ok(g) => g,
                Err(_) => return None,
            };
            guard.get(tag).copied()
        };
        ctor.map(|ctor| {
            let mut element = ctor();
            element.init();
            element
        })
    }

    pub fn tags(&self) -> Vec<String> {
        self.index
            .read()
            .map(|g| {
                let mut tags: Vec<String> = g.keys().cloned().collect();
                tags.sort();
                tags
            })
            .unwrap_or_default()
    }
}

/// Process-wide element registry.
pub static ELEMENT_REGISTRY: Lazy<ElementRegistry> = Lazy::new(ElementRegistry::new);

/// Registers the badge element under [`BADGE_TAG`]. Call once at process or
/// module initialization; duplicate calls return false and change nothing.
pub fn register_badge_element() -> bool {
    ELEMENT_REGISTRY.register(BADGE_TAG, GoalSelection::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::ColorToken;

    #[test]
    fn test_messages_match_direct_setters() {
        let mut by_message = GoalSelection::new();
        by_message.on_attribute_change(BadgeMessage::Goal("8".to_string()));
        by_message.on_attribute_change(BadgeMessage::Width("100px".to_string()));
        by_message.on_attribute_change(BadgeMessage::Label("Work".to_string()));
        by_message.on_attribute_change(BadgeMessage::Loading("eager".to_string()));
        by_message.on_attribute_change(BadgeMessage::FetchPriority("high".to_string()));
        by_message.on_attribute_change(BadgeMessage::ColorOnly(true));

        let mut direct = GoalSelection::new();
        direct.set_goal("8");
        direct.width = "100px".to_string();
        direct.set_label("Work");
        direct.set_loading("eager");
        direct.fetch_priority = "high".to_string();
        direct.color_only = true;

        let assets = AssetSource::default();
        assert_eq!(by_message.render(&assets), direct.render(&assets));
    }

    #[test]
    fn test_render_reflects_goal() {
        let mut element = GoalSelection::new();
        element.on_attribute_change(BadgeMessage::Goal("10".to_string()));
        let view = element.render(&AssetSource::default());
        assert_eq!(view.background, ColorToken::Rgb(221, 19, 103));
        assert_eq!(view.content.unwrap().image.src, "file://./lib/goal-10.svg");
    }

    #[test]
    fn test_registry_guards_duplicates() {
        let registry = ElementRegistry::new();
        assert!(registry.register("un-sdg", GoalSelection::new));
        assert!(!registry.register("un-sdg", GoalSelection::new));
        assert!(registry.is_registered("un-sdg"));
        assert_eq!(registry.tags(), vec!["un-sdg".to_string()]);
    }

    #[test]
    fn test_registry_instantiates_with_defaults() {
        let registry = ElementRegistry::new();
        registry.register("un-sdg", GoalSelection::new);
        let element = registry.instantiate("un-sdg").unwrap();
        assert_eq!(element.identifier(), "circle");
        assert!(registry.instantiate("other-tag").is_none());
    }

    #[test]
    fn test_global_registration_once() {
        // First call wins; any further call (from tests or hosts) is refused.
        let first = register_badge_element();
        let second = register_badge_element();
        assert!(first || ELEMENT_REGISTRY.is_registered(BADGE_TAG));
        assert!(!second);
    }
}
