//! Keypad button and stipple overlays

use crate::theme::TallyColors;
use egui::{Color32, Painter, Pos2, Rect, Response, Ui, Widget};

/// Fill every `step`-th pixel of `rect` in a checkerboard, so the white
/// underneath still shows through.
pub fn stipple(painter: &Painter, rect: Rect, color: Color32, step: u32) {
    let step = step.max(1) as i32;
    let x0 = rect.min.x.ceil() as i32;
    let y0 = rect.min.y.ceil() as i32;
    let x1 = rect.max.x.floor() as i32;
    let y1 = rect.max.y.floor() as i32;
    let pixel = egui::Vec2::splat(1.0);

    for (row, y) in (y0..y1).step_by(step as usize).enumerate() {
        let offset = if row % 2 == 0 { 0 } else { step };
        for x in (x0 + offset..x1).step_by(2 * step as usize) {
            painter.rect_filled(Rect::from_min_size(Pos2::new(x as f32, y as f32), pixel), 0.0, color);
        }
    }
}

/// A fixed-size keypad button: white, 1px outline, dense stipple while
/// pressed, light stipple while hovered.
pub struct KeyButton<'a> {
    label: &'a str,
    size: egui::Vec2,
    font_size: f32,
}

impl<'a> KeyButton<'a> {
    pub fn new(label: &'a str, size: egui::Vec2) -> Self {
        Self { label, size, font_size: 14.0 }
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}

impl<'a> Widget for KeyButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, TallyColors::WHITE);
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, TallyColors::BLACK));

            let pressed = response.is_pointer_button_down_on();
            if pressed {
                stipple(painter, rect.shrink(1.0), TallyColors::BLACK, 1);
            } else if response.hovered() {
                stipple(painter, rect.shrink(1.0), TallyColors::BLACK, 2);
            }

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                egui::FontId::proportional(self.font_size),
                if pressed { TallyColors::WHITE } else { TallyColors::BLACK },
            );
        }

        response
    }
}
