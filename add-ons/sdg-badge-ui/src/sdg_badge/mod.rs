//! Bare-metal egui badge widget for the UN SDG goal registry.
//!
//! Paints the view tree projected by sdg-core: a sized container filled with
//! the resolved color token, and (unless color-only) the goal image wrapped
//! in a click-to-open hyperlink. Attribute changes arrive either through
//! direct setters or over the badge bridge (tokio mpsc).

mod bridge;

pub use bridge::{badge_channel, BadgeBridgeReceiver, BadgeBridgeSender, SdgBadgeMessage};

use egui::{Color32, Rect, Sense, Ui};
use sdg_core::{
    AssetSource, BadgeComponent, BadgeConfig, BadgeMessage, BadgeView, GoalSelection, LoadingHint,
};

/// One badge instance: selection state, asset resolution, and an optional
/// bridge receiver drained each frame. Render with `ui()` from your eframe
/// app; call each frame (immediate mode).
#[derive(Debug)]
pub struct SdgBadge {
    selection: GoalSelection,
    assets: AssetSource,
    receiver: Option<BadgeBridgeReceiver>,
}

impl Default for SdgBadge {
    fn default() -> Self {
        let mut selection = GoalSelection::new();
        selection.init();
        Self {
            selection,
            assets: AssetSource::default(),
            receiver: None,
        }
    }
}

impl SdgBadge {
    /// Creates a badge with default selection (circle logo) and local assets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a badge resolving assets and initial size from host config.
    pub fn from_config(config: &BadgeConfig) -> Self {
        let mut badge = Self::new();
        badge.assets = config.asset_source();
        badge.selection.width = config.width.clone();
        badge.selection.height = config.height.clone();
        badge
    }

    /// Overrides the asset source (e.g. a remote base URL).
    pub fn with_assets(mut self, assets: AssetSource) -> Self {
        self.assets = assets;
        self
    }

    /// Attaches a bridge receiver so host-sent attribute changes are applied
    /// before each render.
    pub fn with_bridge(mut self, receiver: BadgeBridgeReceiver) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn selection(&self) -> &GoalSelection {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut GoalSelection {
        &mut self.selection
    }

    pub fn assets(&self) -> &AssetSource {
        &self.assets
    }

    /// Applies one attribute change directly (same path the bridge takes).
    pub fn apply(&mut self, message: BadgeMessage) {
        self.selection.on_attribute_change(message);
    }

    fn drain_bridge(&mut self) {
        let Some(receiver) = self.receiver.as_mut() else {
            return;
        };
        while let Ok(message) = receiver.try_recv() {
            self.selection.on_attribute_change(message);
        }
    }

    /// Renders the badge (egui immediate mode). Drains pending bridge
    /// messages, projects the view tree, and paints it. Clicking the image
    /// opens the resolved goal link in a new browser tab.
    pub fn ui(&mut self, ui: &mut Ui) -> egui::Response {
        self.drain_bridge();
        let view = self.selection.render(&self.assets);
        self.paint(ui, &view)
    }

    fn paint(&self, ui: &mut Ui, view: &BadgeView) -> egui::Response {
        let size = egui::vec2(view.width_px, view.height_px);
        let sense = if view.content.is_some() {
            Sense::click()
        } else {
            Sense::hover()
        };
        let (rect, response) = ui.allocate_exact_size(size, sense);
        if !ui.is_rect_visible(rect) {
            return response;
        }

        if let Some((r, g, b)) = view.background.rgb() {
            ui.painter().rect_filled(rect, 0.0, Color32::from_rgb(r, g, b));
        }

        let Some(content) = view.content.as_ref() else {
            // color-only swatch: no link, no image
            return response;
        };

        if content.image.loading == LoadingHint::Eager {
            // pre-warm the texture so the first visible frame already has it
            let _ = ui
                .ctx()
                .try_load_image(&content.image.src, egui::load::SizeHint::default());
        }
        self.paint_image(ui, rect, &content.image.src);

        let response = response.on_hover_text(content.image.alt.as_str());
        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Link, true, content.image.alt.as_str())
        });
        if response.clicked() {
            tracing::debug!(href = %content.link.href, "badge clicked; opening goal link");
            ui.ctx().open_url(egui::OpenUrl {
                url: content.link.href.clone(),
                new_tab: content.link.new_tab,
            });
        }
        response
    }

    fn paint_image(&self, ui: &Ui, rect: Rect, src: &str) {
        egui::Image::from_uri(src.to_string()).paint_at(ui, rect);
    }
}
