//! Category grid component
//!
//! Displays the home screen's category cards.

use crate::catalog::{self, Category};
use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, RichText, Sense, Vec2};

const CARDS_PER_ROW: usize = 5;

/// Grid of category cards for the home screen
pub struct CategoryGrid<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> CategoryGrid<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(self, ui: &mut egui::Ui) {
        let categories = catalog::categories();
        let mut clicked: Option<Category> = None;

        for row in categories.chunks(CARDS_PER_ROW) {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing = Vec2::splat(self.theme.spacing_sm);
                for category in row {
                    if Self::show_card(ui, self.theme, category) {
                        clicked = Some(category.clone());
                    }
                }
            });
            ui.add_space(self.theme.spacing_sm);
        }

        if let Some(category) = clicked {
            self.state.select_category(category);
        }
    }

    fn show_card(ui: &mut egui::Ui, theme: &Theme, category: &Category) -> bool {
        let response = egui::Frame::none()
            .fill(theme.bg_secondary)
            .rounding(theme.card_rounding)
            .inner_margin(theme.spacing)
            .show(ui, |ui| {
                ui.set_width(128.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(category.icon.glyph()).size(28.0));
                    ui.label(
                        RichText::new(&category.label)
                            .size(13.0)
                            .strong()
                            .color(theme.text_primary),
                    );
                });
            })
            .response;

        let response = response.interact(Sense::click());
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }
        response.clicked()
    }
}
