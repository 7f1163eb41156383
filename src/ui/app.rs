//! Main application struct and eframe integration

use crate::catalog;
use crate::ui::components::{CategoryGrid, InputBar, MessageList, RecipeCard};
use crate::ui::state::{AppState, ViewState};
use crate::ui::theme::Theme;
use egui::{self, CentralPanel, RichText, TopBottomPanel};
use std::time::{Duration, Instant};

/// Main QuickRecipe application
pub struct QuickRecipeApp {
    /// Application state
    state: AppState,
    /// Visual theme
    theme: Theme,
}

impl QuickRecipeApp {
    /// Create a new QuickRecipe application
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        let theme = Theme::warm();
        theme.apply(&cc.egui_ctx);

        Self { state, theme }
    }

    /// Show the top header bar
    fn show_header(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("header")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_secondary)
                    .inner_margin(12.0),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("🍳 QuickRecipe")
                            .size(20.0)
                            .strong()
                            .color(self.theme.primary),
                    );

                    ui.label(
                        RichText::new("Cooking Assistant")
                            .size(14.0)
                            .color(self.theme.text_muted),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("💬").on_hover_text("Open chat").clicked() {
                            self.state.go_to_chat();
                        }

                        if ui.button("🏠").on_hover_text("Back to home").clicked() {
                            self.state.go_to_home();
                        }
                    });
                });
            });
    }

    /// Show the home screen: category grid plus chat entry point
    fn show_home(&mut self, ctx: &egui::Context) {
        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing_lg),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(self.theme.spacing);
                    ui.label(
                        RichText::new("What would you like to cook today?")
                            .size(24.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    ui.label(
                        RichText::new("Pick a category or ask the assistant directly.")
                            .size(14.0)
                            .color(self.theme.text_secondary),
                    );
                });

                ui.add_space(self.theme.spacing_lg);

                CategoryGrid::new(&mut self.state, &self.theme).show(ui);

                ui.add_space(self.theme.spacing);

                ui.vertical_centered(|ui| {
                    let button = egui::Button::new(
                        RichText::new("Ask QuickRecipe")
                            .size(15.0)
                            .color(egui::Color32::WHITE),
                    )
                    .fill(self.theme.primary)
                    .rounding(self.theme.button_rounding)
                    .min_size(egui::Vec2::new(180.0, 40.0));

                    if ui.add(button).clicked() {
                        self.state.go_to_chat();
                    }
                });
            });
    }

    /// Show the recipe list for the selected category
    fn show_category(&mut self, ctx: &egui::Context) {
        let (category_id, category_label) = match &self.state.selected_category {
            Some(category) => (category.id.clone(), category.label.clone()),
            None => ("all".to_string(), "All Recipes".to_string()),
        };

        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing_lg),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("← Back").clicked() {
                        self.state.go_to_home();
                    }

                    ui.label(
                        RichText::new(&category_label)
                            .size(20.0)
                            .strong()
                            .color(self.theme.text_primary),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Ask for Help").clicked() {
                            self.state.go_to_chat();
                        }
                    });
                });

                ui.add_space(self.theme.spacing);

                let recipes = catalog::recipes_for_category(&category_id);
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        for recipe in &recipes {
                            if RecipeCard::new(recipe, &self.theme).show(ui) {
                                self.state.select_recipe(recipe.clone());
                            }
                            ui.add_space(self.theme.spacing_sm);
                        }
                    });
            });
    }

    /// Show the chat screen: message list above the input area
    fn show_chat(&mut self, ctx: &egui::Context) {
        TopBottomPanel::bottom("input_area")
            .frame(
                egui::Frame::none()
                    .fill(self.theme.bg_primary)
                    .inner_margin(self.theme.spacing),
            )
            .show(ctx, |ui| {
                ui.vertical(|ui| {
                    if self.state.voice_mode {
                        self.show_voice_widget_container(ui);
                        ui.add_space(self.theme.spacing_sm);
                    }

                    InputBar::new(&mut self.state, &self.theme).show(ui);

                    self.show_status_line(ui);
                });
            });

        CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.bg_primary))
            .show(ctx, |ui| {
                MessageList::new(&self.state, &self.theme).show(ui);
            });
    }

    /// Container the external voice widget renders into.
    ///
    /// Must exist whenever voice mode is on, so the widget has a mount
    /// point by the time the greeting fires.
    fn show_voice_widget_container(&self, ui: &mut egui::Ui) {
        let mount_point = self.state.config.bridge.mount_point.clone();
        ui.push_id(mount_point, |ui| {
            egui::Frame::none()
                .fill(self.theme.bg_secondary)
                .rounding(self.theme.card_rounding)
                .inner_margin(self.theme.spacing)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new("🎙").size(28.0).color(self.theme.voice_active));
                        ui.label(
                            RichText::new("Voice assistant is listening")
                                .size(13.0)
                                .color(self.theme.text_primary),
                        );
                        ui.label(
                            RichText::new("Powered by Eleven Labs")
                                .size(11.0)
                                .color(self.theme.text_muted),
                        );
                    });
                });
        });
    }

    fn show_status_line(&self, ui: &mut egui::Ui) {
        let status = if self.state.voice_mode {
            "Voice mode on".to_string()
        } else if let Some(recipe) = &self.state.selected_recipe {
            format!("Talking about {}", recipe.title)
        } else {
            "Ask me anything about cooking".to_string()
        };

        ui.label(
            RichText::new(status)
                .size(11.0)
                .color(self.theme.text_muted),
        );
    }
}

impl eframe::App for QuickRecipeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Fire due timers and drain bridge events before rendering
        self.state.poll_timers(now);
        self.state.poll_events();

        self.show_header(ctx);

        match self.state.view_state {
            ViewState::Home => self.show_home(ctx),
            ViewState::Category => self.show_category(ctx),
            ViewState::Chat => self.show_chat(ctx),
        }

        // Wake up for the earliest pending deadline
        if let Some(deadline) = self.state.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }

        // Inbound widget messages arrive out-of-band; keep polling while
        // voice mode is on
        if self.state.voice_mode {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
