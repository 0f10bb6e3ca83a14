use brushboard::{BrushSettings, CanvasEngine, History, Surface};
use egui::{Color32, PointerButton, Pos2};

fn px(engine: &CanvasEngine, x: i32, y: i32) -> Color32 {
    engine.surface().pixel(x, y).unwrap()
}

fn stroke(engine: &mut CanvasEngine, x: f32, y: f32) {
    engine.pointer_pressed(Pos2::new(x, y), PointerButton::Primary);
    engine.pointer_released(PointerButton::Primary);
}

#[test]
fn undo_without_a_snapshot_whites_the_canvas() {
    let mut history = History::default();
    let mut live = Surface::new(8, 8);
    live.draw_point(Pos2::new(3.0, 3.0), &BrushSettings::default());
    assert!(!history.has_snapshot());

    history.undo(&mut live);

    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(live.pixel(x, y), Some(Color32::WHITE), "pixel ({x}, {y})");
        }
    }

    // the replaced canvas became the snapshot, so undo is invertible
    history.undo(&mut live);
    assert_eq!(live.pixel(3, 3), Some(Color32::BLACK));
}

#[test]
fn undo_restores_the_state_before_the_last_stroke() {
    let mut engine = CanvasEngine::new(64, 64);
    assert!(!engine.can_undo());

    stroke(&mut engine, 10.0, 10.0); // stroke A
    stroke(&mut engine, 30.0, 30.0); // stroke B
    assert!(engine.can_undo());

    engine.undo();
    assert_eq!(px(&engine, 10, 10), Color32::BLACK, "A survives");
    assert_eq!(px(&engine, 30, 30), Color32::WHITE, "B undone");

    // a second undo toggles back to the post-B state
    engine.undo();
    assert_eq!(px(&engine, 10, 10), Color32::BLACK);
    assert_eq!(px(&engine, 30, 30), Color32::BLACK);
}

#[test]
fn freehand_stroke_is_undone_as_a_unit() {
    let mut engine = CanvasEngine::new(64, 64);
    engine.pointer_pressed(Pos2::new(10.0, 10.0), PointerButton::Primary);
    engine.pointer_moved(Pos2::new(20.0, 10.0), true);
    engine.pointer_moved(Pos2::new(20.0, 20.0), true);
    engine.pointer_released(PointerButton::Primary);

    engine.undo();

    for (x, y) in [(10, 10), (15, 10), (20, 10), (20, 15), (20, 20)] {
        assert_eq!(px(&engine, x, y), Color32::WHITE, "pixel ({x}, {y})");
    }
}

#[test]
fn clear_can_be_undone() {
    let mut engine = CanvasEngine::new(64, 64);
    stroke(&mut engine, 10.0, 10.0);

    engine.clear();
    assert_eq!(px(&engine, 10, 10), Color32::WHITE);

    engine.undo();
    assert_eq!(px(&engine, 10, 10), Color32::BLACK);
}

#[test]
fn undo_rescales_the_snapshot_to_the_current_viewport() {
    let mut engine = CanvasEngine::new(64, 64);
    stroke(&mut engine, 10.0, 10.0);

    engine.viewport_resized(128, 128).unwrap();
    engine.undo();

    assert_eq!(engine.surface().width(), 128);
    assert_eq!(engine.surface().height(), 128);

    // toggling back restores the stretched stroke
    engine.undo();
    let mut any_ink = false;
    for y in 17..=24 {
        for x in 17..=24 {
            if px(&engine, x, y) != Color32::WHITE {
                any_ink = true;
            }
        }
    }
    assert!(any_ink, "stretched stroke should survive the undo toggle");
}
