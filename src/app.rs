use egui::{Key, KeyboardShortcut, Modifiers};

use crate::brush::DrawMode;
use crate::engine::CanvasEngine;
use crate::panels;

const SAVE_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);
const OPEN_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::O);
const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const POINT_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::P);
const LINE_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::L);

/// The application shell: menu bar, tool panel, canvas panel and dialogs.
///
/// All canvas state lives in the engine; the shell only forwards events and
/// composites the surface. Brush settings and draw mode deliberately reset
/// to defaults on restart, so nothing here is persisted.
pub struct PaintApp {
    engine: CanvasEngine,
    texture: Option<egui::TextureHandle>,
    last_error: Option<String>,
    show_about: bool,
}

impl PaintApp {
    /// Called once before the first frame. The initial surface size is a
    /// placeholder; the first canvas layout pass rescales it to the real
    /// viewport.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            engine: CanvasEngine::new(640, 480),
            texture: None,
            last_error: None,
            show_about: false,
        }
    }

    pub fn engine(&self) -> &CanvasEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut CanvasEngine {
        &mut self.engine
    }

    /// Uploads the surface into a texture when the engine reports a change
    /// and returns the id to paint with.
    pub fn canvas_texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        if self.engine.take_dirty() || self.texture.is_none() {
            let image = self.engine.surface().to_color_image();
            match &mut self.texture {
                Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
                None => {
                    self.texture =
                        Some(ctx.load_texture("canvas", image, egui::TextureOptions::NEAREST));
                }
            }
        }
        self.texture.as_ref().map(|t| t.id()).unwrap_or_default()
    }

    pub fn report_error(&mut self, err: impl std::fmt::Display) {
        let message = err.to_string();
        log::error!("{message}");
        self.last_error = Some(message);
    }

    fn save(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("PNG image", &["png"])
            .add_filter("JPEG image", &["jpg", "jpeg"])
            .save_file();
        if let Some(path) = picked {
            if let Err(err) = self.engine.save_to(&path) {
                self.report_error(err);
            }
        }
    }

    fn open(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg"])
            .pick_file();
        if let Some(path) = picked {
            if let Err(err) = self.engine.open_from(&path) {
                self.report_error(err);
            }
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&SAVE_SHORTCUT)) {
            self.save();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&OPEN_SHORTCUT)) {
            self.open();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            self.engine.undo();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&POINT_SHORTCUT)) {
            self.engine.set_mode(DrawMode::Point);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&LINE_SHORTCUT)) {
            self.engine.set_mode(DrawMode::Line);
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let save = egui::Button::new("Save…")
                        .shortcut_text(ctx.format_shortcut(&SAVE_SHORTCUT));
                    if ui.add(save).clicked() {
                        self.save();
                        ui.close_menu();
                    }
                    let open = egui::Button::new("Open…")
                        .shortcut_text(ctx.format_shortcut(&OPEN_SHORTCUT));
                    if ui.add(open).clicked() {
                        self.open();
                        ui.close_menu();
                    }
                    let undo = egui::Button::new("Undo")
                        .shortcut_text(ctx.format_shortcut(&UNDO_SHORTCUT));
                    if ui.add(undo).clicked() {
                        self.engine.undo();
                        ui.close_menu();
                    }
                    if ui.button("Clear").clicked() {
                        self.engine.clear();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Draw", |ui| {
                    for mode in DrawMode::ALL {
                        let selected = self.engine.mode() == mode;
                        if ui.radio(selected, mode.label()).clicked() {
                            self.engine.set_mode(mode);
                            ui.close_menu();
                        }
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn dialogs(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.last_error.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(message);
                    if ui.button("Close").clicked() {
                        self.last_error = None;
                    }
                });
        }

        if self.show_about {
            egui::Window::new("About Brushboard")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(
                        "A small raster paint program. Pick a brush in the left \
                         panel, draw points or lines on the canvas, and save the \
                         result as a PNG or JPEG image.",
                    );
                    if ui.button("Close").clicked() {
                        self.show_about = false;
                    }
                });
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        self.menu_bar(ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
        self.dialogs(ctx);
    }
}
