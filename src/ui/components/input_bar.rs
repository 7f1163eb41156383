//! Input bar component
//!
//! Provides the voice mode toggle, text input, and send button. The text
//! input and send button are disabled while the voice widget is active.

use crate::ui::state::AppState;
use crate::ui::theme::Theme;
use egui::{self, Key, RichText, Vec2};

/// Input bar for the chat screen
pub struct InputBar<'a> {
    state: &'a mut AppState,
    theme: &'a Theme,
}

impl<'a> InputBar<'a> {
    pub fn new(state: &'a mut AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn show(mut self, ui: &mut egui::Ui) {
        egui::Frame::none()
            .fill(self.theme.bg_secondary)
            .rounding(self.theme.card_rounding)
            .inner_margin(self.theme.spacing)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    self.show_voice_toggle(ui);

                    ui.add_space(self.theme.spacing_sm);

                    self.show_text_input(ui);

                    ui.add_space(self.theme.spacing_sm);

                    self.show_send_button(ui);
                });
            });
    }

    fn show_voice_toggle(&mut self, ui: &mut egui::Ui) {
        let voice_on = self.state.voice_mode;

        let (color, tooltip) = if voice_on {
            (self.theme.voice_active, "Switch back to typing")
        } else {
            (self.theme.text_secondary, "Talk to the assistant")
        };

        let button = egui::Button::new(RichText::new("🎤").size(20.0).color(color))
            .min_size(Vec2::splat(44.0))
            .rounding(self.theme.button_rounding);

        let button = if voice_on {
            button.fill(self.theme.voice_active.gamma_multiply(0.2))
        } else {
            button
        };

        let response = ui.add(button);
        if response.clicked() {
            self.state.toggle_voice_mode();
        }
        response.on_hover_text(tooltip);
    }

    fn show_text_input(&mut self, ui: &mut egui::Ui) {
        let voice_on = self.state.voice_mode;

        let hint = if voice_on {
            "Voice mode is on, speak to the assistant..."
        } else {
            "Ask about a recipe..."
        };

        // Reserve space for the send button
        let available_width = ui.available_width() - 60.0;

        let text_edit = egui::TextEdit::singleline(&mut self.state.input_text)
            .hint_text(hint)
            .desired_width(available_width)
            .font(egui::TextStyle::Body)
            .margin(egui::Margin::symmetric(12.0, 8.0));

        let response = ui.add_enabled(!voice_on, text_edit);

        // Enter sends; Shift+Enter is reserved for newlines
        if response.lost_focus() {
            let enter_pressed = ui.input(|i| i.key_pressed(Key::Enter));
            let shift_held = ui.input(|i| i.modifiers.shift);

            if enter_pressed && !shift_held && !self.state.input_text.trim().is_empty() {
                self.state.send_message();
                response.request_focus();
            }
        }
    }

    fn show_send_button(&mut self, ui: &mut egui::Ui) {
        let can_send = !self.state.voice_mode && !self.state.input_text.trim().is_empty();

        let button_color = if can_send {
            self.theme.primary
        } else {
            self.theme.text_muted
        };

        let button = egui::Button::new(RichText::new("➤").size(18.0).color(egui::Color32::WHITE))
            .min_size(Vec2::splat(44.0))
            .rounding(self.theme.button_rounding)
            .fill(button_color);

        let response = ui.add_enabled(can_send, button);

        if response.clicked() {
            self.state.send_message();
        }

        response.on_hover_text("Send message (Enter)");
    }
}
