//! Theme and styling for the QuickRecipe UI

use crate::catalog::Difficulty;
use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Primary accent color
    pub primary: Color32,
    /// Secondary accent color
    pub secondary: Color32,
    /// Success color (green)
    pub success: Color32,
    /// Warning color (amber)
    pub warning: Color32,
    /// Error color (red)
    pub error: Color32,

    /// Background colors
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,

    /// Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    /// Chat bubble fills
    pub user_bubble: Color32,
    pub assistant_bubble: Color32,

    /// Indicator for active voice mode
    pub voice_active: Color32,

    /// Border radius for buttons
    pub button_rounding: Rounding,
    /// Border radius for cards/panels
    pub card_rounding: Rounding,
    /// Border radius for chat bubbles
    pub bubble_rounding: Rounding,

    /// Standard spacing
    pub spacing: f32,
    /// Large spacing
    pub spacing_lg: f32,
    /// Small spacing
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::warm()
    }
}

impl Theme {
    /// Create the warm kitchen theme
    pub fn warm() -> Self {
        Self {
            primary: Color32::from_rgb(234, 88, 12),    // Orange
            secondary: Color32::from_rgb(217, 119, 6),  // Amber
            success: Color32::from_rgb(22, 163, 74),    // Green
            warning: Color32::from_rgb(202, 138, 4),    // Amber
            error: Color32::from_rgb(220, 38, 38),      // Red

            bg_primary: Color32::from_rgb(255, 251, 245),   // Warm white
            bg_secondary: Color32::from_rgb(255, 243, 228), // Light peach
            bg_tertiary: Color32::from_rgb(253, 230, 206),  // Deeper peach

            text_primary: Color32::from_rgb(41, 37, 36),    // Near black
            text_secondary: Color32::from_rgb(87, 83, 78),  // Warm gray
            text_muted: Color32::from_rgb(168, 162, 158),   // Light warm gray

            user_bubble: Color32::from_rgb(234, 88, 12),      // Orange (matches primary)
            assistant_bubble: Color32::from_rgb(255, 255, 255), // White card

            voice_active: Color32::from_rgb(22, 163, 74), // Green

            button_rounding: Rounding::same(8.0),
            card_rounding: Rounding::same(12.0),
            bubble_rounding: Rounding::same(12.0),

            spacing: 16.0,
            spacing_lg: 24.0,
            spacing_sm: 8.0,
        }
    }

    /// Badge color for a recipe difficulty
    pub fn difficulty_color(&self, difficulty: Difficulty) -> Color32 {
        match difficulty {
            Difficulty::Easy => self.success,
            Difficulty::Medium => self.warning,
            Difficulty::Hard => self.error,
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::light();

        // Panel backgrounds
        visuals.panel_fill = self.bg_primary;
        visuals.window_fill = self.bg_secondary;
        visuals.extreme_bg_color = Color32::WHITE;

        // Widget colors
        visuals.widgets.noninteractive.bg_fill = self.bg_secondary;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.inactive.bg_fill = self.bg_tertiary;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.hovered.bg_fill = self.primary.gamma_multiply(0.85);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::WHITE);

        visuals.widgets.active.bg_fill = self.primary;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);

        // Text selection
        visuals.selection.bg_fill = self.primary.gamma_multiply(0.3);
        visuals.selection.stroke = Stroke::new(1.0, self.primary);

        // Hyperlinks
        visuals.hyperlink_color = self.primary;

        // Window styling
        visuals.window_rounding = self.card_rounding;
        visuals.window_stroke = Stroke::new(1.0, self.bg_tertiary);

        ctx.set_visuals(visuals);

        ctx.set_fonts(egui::FontDefinitions::default());

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.window_margin = egui::Margin::same(self.spacing);
        style.spacing.button_padding = Vec2::new(self.spacing, self.spacing_sm);

        style.text_styles.insert(
            egui::TextStyle::Heading,
            FontId::new(24.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Monospace,
            FontId::new(13.0, FontFamily::Monospace),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(14.0, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Small,
            FontId::new(12.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_colors_are_distinct() {
        let theme = Theme::warm();
        let easy = theme.difficulty_color(Difficulty::Easy);
        let medium = theme.difficulty_color(Difficulty::Medium);
        let hard = theme.difficulty_color(Difficulty::Hard);
        assert_ne!(easy, medium);
        assert_ne!(medium, hard);
        assert_ne!(easy, hard);
    }
}
