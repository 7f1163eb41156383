//! Recipe card component

use crate::catalog::Recipe;
use crate::ui::theme::Theme;
use egui::{self, RichText};

/// Card summarizing one recipe, with a button to open its walkthrough.
pub struct RecipeCard<'a> {
    recipe: &'a Recipe,
    theme: &'a Theme,
}

impl<'a> RecipeCard<'a> {
    pub fn new(recipe: &'a Recipe, theme: &'a Theme) -> Self {
        Self { recipe, theme }
    }

    /// Render the card. Returns true when "View Recipe" was clicked.
    pub fn show(self, ui: &mut egui::Ui) -> bool {
        let mut clicked = false;

        egui::Frame::none()
            .fill(self.theme.assistant_bubble)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(&self.recipe.title)
                                .size(16.0)
                                .strong()
                                .color(self.theme.text_primary),
                        );

                        ui.add_space(2.0);

                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(format!("⏱ {}", self.recipe.cook_time))
                                    .size(12.0)
                                    .color(self.theme.text_secondary),
                            );
                            ui.label(
                                RichText::new(format!("🍽 {}", self.recipe.servings))
                                    .size(12.0)
                                    .color(self.theme.text_secondary),
                            );
                            self.show_difficulty_badge(ui);
                        });
                    });

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let button = egui::Button::new(
                            RichText::new("View Recipe").color(egui::Color32::WHITE),
                        )
                        .fill(self.theme.primary)
                        .rounding(self.theme.button_rounding);

                        if ui.add(button).clicked() {
                            clicked = true;
                        }
                    });
                });
            });

        clicked
    }

    fn show_difficulty_badge(&self, ui: &mut egui::Ui) {
        let color = self.theme.difficulty_color(self.recipe.difficulty);
        egui::Frame::none()
            .fill(color)
            .rounding(self.theme.button_rounding)
            .inner_margin(egui::Margin::symmetric(8.0, 2.0))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(self.recipe.difficulty.to_string())
                        .size(11.0)
                        .color(egui::Color32::WHITE),
                );
            });
    }
}
