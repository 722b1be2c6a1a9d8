//! Black on white theme
//!
//! Two colors, 1px black outlines, square corners, no shadows.

use egui::{Color32, FontId, Rounding, Stroke, TextStyle, Visuals};

/// The palette.
pub struct TallyColors;

impl TallyColors {
    pub const WHITE: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BLACK: Color32 = Color32::from_rgb(0, 0, 0);
}

/// Theme configuration
pub struct TallyTheme {
    pub font_size_body: f32,
    pub font_size_heading: f32,
    pub item_spacing: f32,
}

impl Default for TallyTheme {
    fn default() -> Self {
        Self {
            font_size_body: 14.0,
            font_size_heading: 22.0,
            item_spacing: 10.0,
        }
    }
}

impl TallyTheme {
    /// Apply the theme to an egui context. Only the menu, the about window
    /// and their text are styled here; the display and keypad paint
    /// themselves.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        for (text_style, size) in [
            (TextStyle::Body, self.font_size_body),
            (TextStyle::Button, self.font_size_body),
            (TextStyle::Heading, self.font_size_heading),
        ] {
            style.text_styles.insert(text_style, FontId::proportional(size));
        }

        let visuals = &mut style.visuals;
        *visuals = Visuals::light();
        visuals.window_fill = TallyColors::WHITE;
        visuals.panel_fill = TallyColors::WHITE;
        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::new(1.0, TallyColors::BLACK);
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        let widgets = &mut visuals.widgets;
        for ws in [
            &mut widgets.noninteractive,
            &mut widgets.inactive,
            &mut widgets.hovered,
            &mut widgets.active,
            &mut widgets.open,
        ] {
            ws.bg_fill = TallyColors::WHITE;
            ws.weak_bg_fill = TallyColors::WHITE;
            ws.bg_stroke = Stroke::new(1.0, TallyColors::BLACK);
            ws.fg_stroke = Stroke::new(1.0, TallyColors::BLACK);
            ws.rounding = Rounding::ZERO;
        }

        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        ctx.set_style(style);
    }

    /// Frame for the expression display: white fill, 1px black outline.
    pub fn display_frame() -> egui::Frame {
        egui::Frame::none()
            .fill(TallyColors::WHITE)
            .stroke(Stroke::new(1.0, TallyColors::BLACK))
            .inner_margin(egui::Margin::symmetric(8.0, 4.0))
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(TallyColors::WHITE)
        .stroke(Stroke::new(1.0, TallyColors::BLACK))
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| ui.horizontal(add_contents).inner)
}
