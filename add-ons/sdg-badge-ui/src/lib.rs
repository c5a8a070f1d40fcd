//! sdg-badge-ui: bare-metal egui widget for the UN SDG badge component.
//!
//! Single binary demo; host code communicates with the widget via tokio mpsc
//! (badge bridge) or direct setters.

pub mod sdg_badge;

pub use sdg_badge::{
    badge_channel, BadgeBridgeReceiver, BadgeBridgeSender, SdgBadge, SdgBadgeMessage,
};
