use crate::PaintApp;
use crate::brush::{
    CapStyle, DrawMode, JoinStyle, MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH, StrokeStyle,
};

/// The toolbox on the left: draw mode, brush settings, undo and clear.
///
/// Every enumerated choice is matched by value against the engine's state;
/// the labels are display-only.
pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(150.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            ui.separator();
            ui.label("Draw mode");
            for mode in DrawMode::ALL {
                let selected = app.engine().mode() == mode;
                if ui.selectable_label(selected, mode.label()).clicked() {
                    app.engine_mut().set_mode(mode);
                }
            }

            ui.separator();
            ui.label("Brush size");
            let mut width = app.engine().brush().width;
            let slider = egui::Slider::new(&mut width, MIN_BRUSH_WIDTH..=MAX_BRUSH_WIDTH)
                .suffix(" px");
            if ui.add(slider).changed() {
                app.engine_mut().set_brush_width(width);
            }

            ui.separator();
            ui.label("Color");
            let mut color = app.engine().brush().color;
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut color,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                app.engine_mut().set_brush_color(color);
            }

            ui.separator();
            ui.label("Brush style");
            for style in StrokeStyle::ALL {
                let selected = app.engine().brush().style == style;
                if ui.radio(selected, style.label()).clicked() {
                    app.engine_mut().set_brush_style(style);
                }
            }

            ui.separator();
            ui.label("Brush cap");
            for cap in CapStyle::ALL {
                let selected = app.engine().brush().cap == cap;
                if ui.radio(selected, cap.label()).clicked() {
                    app.engine_mut().set_brush_cap(cap);
                }
            }

            ui.separator();
            ui.label("Brush join");
            for join in JoinStyle::ALL {
                let selected = app.engine().brush().join == join;
                if ui.radio(selected, join.label()).clicked() {
                    app.engine_mut().set_brush_join(join);
                }
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Undo").clicked() {
                    app.engine_mut().undo();
                }
                if ui.button("Clear").clicked() {
                    app.engine_mut().clear();
                }
            });
        });
}
