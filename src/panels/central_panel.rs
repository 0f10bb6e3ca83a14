use egui::PointerButton;

use crate::PaintApp;

/// The canvas: keeps the engine's surface sized to the panel, forwards
/// pointer events in surface coordinates, and paints the composited texture.
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let size = ui.available_size();
            let width = size.x.max(1.0) as u32;
            let height = size.y.max(1.0) as u32;
            if let Err(err) = app.engine_mut().viewport_resized(width, height) {
                // A transient degenerate layout; the prior surface is kept.
                log::warn!("canvas resize refused: {err}");
            }

            let (response, painter) =
                ui.allocate_painter(size, egui::Sense::click_and_drag());
            let rect = response.rect;

            let (pressed, released, down, pointer_pos) = ctx.input(|i| {
                (
                    i.pointer.button_pressed(PointerButton::Primary),
                    i.pointer.button_released(PointerButton::Primary),
                    i.pointer.primary_down(),
                    i.pointer.interact_pos(),
                )
            });

            if let Some(pos) = pointer_pos {
                if rect.contains(pos) {
                    let local = (pos - rect.min).to_pos2();
                    if pressed {
                        app.engine_mut().pointer_pressed(local, PointerButton::Primary);
                    } else if down {
                        app.engine_mut().pointer_moved(local, true);
                    }
                }
            }
            if released {
                app.engine_mut().pointer_released(PointerButton::Primary);
            }

            let texture = app.canvas_texture(ctx);
            painter.image(
                texture,
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        });
}
