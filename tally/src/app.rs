//! tally application

use crate::calculator::{Calculator, Symbol};
use crate::keypad::{Keypad, COLUMNS};
use crate::settings::Settings;
use egui::Context;
use tallycore::repaint::RepaintController;
use tallycore::theme::{menu_bar, TallyColors, TallyTheme};
use tallycore::widgets::KeyButton;

pub struct TallyApp {
    calculator: Calculator,
    settings: Settings,
    show_about: bool,
    repaint: RepaintController,
}

impl TallyApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        TallyTheme::default().apply(&cc.egui_ctx);
        Self::with_settings(settings)
    }

    fn with_settings(settings: Settings) -> Self {
        Self {
            calculator: Calculator::new(),
            settings,
            show_about: false,
            repaint: RepaintController::new(),
        }
    }

    /// Forward one button press to the calculator.
    fn press(&mut self, symbol: Symbol) {
        self.calculator.press(symbol);
        self.repaint.mark_needs_repaint();
    }

    fn render_display(&self, ui: &mut egui::Ui) {
        let height = self.settings.display_font_size * 1.7;
        let text = egui::RichText::new(self.calculator.expression())
            .font(egui::FontId::proportional(self.settings.display_font_size))
            .color(TallyColors::BLACK);
        let text = if self.calculator.is_error() { text.italics() } else { text.strong() };

        TallyTheme::display_frame().show(ui, |ui| {
            ui.set_min_height(height);
            ui.set_max_height(height);
            ui.set_width(ui.available_width());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add(egui::Label::new(text).truncate(true));
            });
        });
    }

    fn render_keypad(&mut self, ui: &mut egui::Ui) {
        let gap = ui.spacing().item_spacing.x;
        let btn_w = (ui.available_width() - gap * (COLUMNS as f32 - 1.0)) / COLUMNS as f32;
        let size = egui::vec2(btn_w, self.settings.button_height);

        for row in Keypad::rows() {
            ui.horizontal(|ui| {
                for &symbol in row {
                    let label = symbol.label();
                    let button = KeyButton::new(&label, size).font_size(self.settings.button_font_size);
                    if ui.add(button).clicked() {
                        self.press(symbol);
                    }
                }
            });
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("calculator");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                });
                ui.add_space(4.0);
                ui.separator();
                ui.label("enter a number, one operator, and a number, then press =");
                ui.add_space(2.0);
                ui.label("operators are checked in the order + - * /");
                ui.label("the first one that appears exactly once is used");
                ui.add_space(2.0);
                ui.label("anything else shows Error");
                ui.add_space(2.0);
                let keys: Vec<String> = Keypad::symbols().map(Symbol::label).collect();
                ui.label(format!("keys: {}", keys.join(" ")));
                ui.add_space(4.0);
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }
}

impl eframe::App for TallyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(TallyColors::WHITE).inner_margin(egui::Margin::same(10.0)))
            .show(ctx, |ui| {
                self.render_display(ui);
                ui.add_space(10.0);
                self.render_keypad(ui);
            });

        if self.show_about {
            self.render_about(ctx);
        }

        self.repaint.end_frame(ctx);
    }
}
