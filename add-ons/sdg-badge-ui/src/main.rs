//! UN SDG Badge — standalone egui demo for the goal registry widget.
//!
//! Run with: cargo run -p sdg-badge-ui
//! Controls send BadgeMessage over the badge bridge; the widget drains the
//! channel each frame, so the demo exercises the same protocol a host app
//! would use.

use eframe::egui;
use sdg_badge_ui::{badge_channel, BadgeBridgeSender, SdgBadge};
use sdg_core::{BadgeConfig, BadgeMessage, GoalSelection, SdgGoal};

const GOAL_CHOICES: [&str; 19] = [
    "circle", "all", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14",
    "15", "16", "17",
];

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    // Explicit one-time element registration; duplicate calls are refused.
    if !sdg_core::register_badge_element() {
        tracing::warn!("badge element tag was already registered");
    }

    let config = BadgeConfig::load();
    let (tx, rx) = badge_channel(64);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 560.0])
            .with_title("UN SDG Badge — goal registry demo"),
        ..Default::default()
    };

    eframe::run_native(
        "UN SDG Badge",
        options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            let badge = SdgBadge::from_config(&config).with_bridge(rx);
            Ok(Box::new(BadgeDemoApp::new(badge, tx)))
        }),
    )
}

struct BadgeDemoApp {
    badge: SdgBadge,
    tx: BadgeBridgeSender,
    goal_choice: String,
    width: String,
    height: String,
    label: String,
    loading: String,
    fetch_priority: String,
    color_only: bool,
    /// Color-only swatches for all 17 numbered goals.
    swatches: Vec<SdgBadge>,
}

impl BadgeDemoApp {
    fn new(badge: SdgBadge, tx: BadgeBridgeSender) -> Self {
        let swatches = SdgGoal::numbered()
            .map(|goal| {
                let mut selection = GoalSelection::with_goal(goal);
                selection.color_only = true;
                selection.width = "36px".to_string();
                selection.height = "36px".to_string();
                let mut swatch = SdgBadge::new();
                *swatch.selection_mut() = selection;
                swatch
            })
            .collect();
        Self {
            goal_choice: badge.selection().identifier().to_string(),
            width: badge.selection().width.clone(),
            height: badge.selection().height.clone(),
            label: String::new(),
            loading: badge.selection().loading.as_str().to_string(),
            fetch_priority: badge.selection().fetch_priority.clone(),
            color_only: false,
            badge,
            tx,
            swatches,
        }
    }

    fn send(&self, message: BadgeMessage) {
        let _ = self.tx.try_send(message);
    }
}

impl eframe::App for BadgeDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("badge_controls")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Badge attributes");
                ui.separator();

                egui::ComboBox::from_label("goal")
                    .selected_text(self.goal_choice.as_str())
                    .show_ui(ui, |ui| {
                        for choice in GOAL_CHOICES {
                            if ui
                                .selectable_value(&mut self.goal_choice, choice.to_string(), choice)
                                .changed()
                            {
                                self.send(BadgeMessage::Goal(choice.to_string()));
                            }
                        }
                    });

                ui.horizontal(|ui| {
                    ui.label("width:");
                    if ui.text_edit_singleline(&mut self.width).changed() {
                        self.send(BadgeMessage::Width(self.width.clone()));
                    }
                });
                ui.horizontal(|ui| {
                    ui.label("height:");
                    if ui.text_edit_singleline(&mut self.height).changed() {
                        self.send(BadgeMessage::Height(self.height.clone()));
                    }
                });
                ui.horizontal(|ui| {
                    ui.label("label:");
                    if ui.text_edit_singleline(&mut self.label).changed() {
                        self.send(BadgeMessage::Label(self.label.clone()));
                    }
                });

                egui::ComboBox::from_label("loading")
                    .selected_text(self.loading.as_str())
                    .show_ui(ui, |ui| {
                        for choice in ["lazy", "eager"] {
                            if ui
                                .selectable_value(&mut self.loading, choice.to_string(), choice)
                                .changed()
                            {
                                self.send(BadgeMessage::Loading(choice.to_string()));
                            }
                        }
                    });

                ui.horizontal(|ui| {
                    ui.label("fetch priority:");
                    if ui.text_edit_singleline(&mut self.fetch_priority).changed() {
                        self.send(BadgeMessage::FetchPriority(self.fetch_priority.clone()));
                    }
                });

                if ui.checkbox(&mut self.color_only, "color-only swatch").changed() {
                    self.send(BadgeMessage::ColorOnly(self.color_only));
                }

                ui.add_space(8.0);
                ui.separator();
                let derived = self.badge.selection().derived().clone();
                ui.label(format!("label: {}", self.badge.selection().effective_label()));
                ui.label(format!("link: {}", derived.link));
                ui.label(format!("color: {}", derived.color.as_css()));
            });

        egui::TopBottomPanel::bottom("swatch_strip").show(ctx, |ui| {
            ui.label("Goal palette (color-only mode):");
            ui.horizontal_wrapped(|ui| {
                for swatch in &mut self.swatches {
                    swatch.ui(ui);
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("un-sdg");
            ui.add_space(8.0);
            self.badge.ui(ui);
        });
    }
}
