use brushboard::{CanvasEngine, PaintError};
use egui::{Color32, PointerButton, Pos2};

fn px(engine: &CanvasEngine, x: i32, y: i32) -> Color32 {
    engine.surface().pixel(x, y).unwrap()
}

fn draw_mark(engine: &mut CanvasEngine) {
    engine.pointer_pressed(Pos2::new(8.0, 8.0), PointerButton::Primary);
    engine.pointer_released(PointerButton::Primary);
}

#[test]
fn save_then_open_reproduces_the_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("work.png");

    let mut first = CanvasEngine::new(32, 32);
    draw_mark(&mut first);
    first.save_to(&path).unwrap();

    let mut second = CanvasEngine::new(32, 32);
    second.open_from(&path).unwrap();

    assert!(second.surface() == first.surface());
}

#[test]
fn open_rescales_to_the_viewport_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.png");

    let mut source = CanvasEngine::new(16, 16);
    source.save_to(&path).unwrap();

    let mut target = CanvasEngine::new(48, 24);
    target.open_from(&path).unwrap();

    assert_eq!(target.surface().width(), 48);
    assert_eq!(target.surface().height(), 24);
}

#[test]
fn open_failure_leaves_the_canvas_untouched() {
    let dir = tempfile::tempdir().unwrap();

    let mut engine = CanvasEngine::new(32, 32);
    draw_mark(&mut engine);

    let missing = dir.path().join("nope.png");
    assert!(matches!(engine.open_from(&missing), Err(PaintError::Io { .. })));
    assert_eq!(px(&engine, 8, 8), Color32::BLACK);

    let garbage = dir.path().join("garbage.png");
    std::fs::write(&garbage, b"not an image at all").unwrap();
    assert!(matches!(
        engine.open_from(&garbage),
        Err(PaintError::Decode { .. })
    ));
    assert_eq!(px(&engine, 8, 8), Color32::BLACK);
}

#[test]
fn open_can_be_undone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blank.png");

    CanvasEngine::new(32, 32).save_to(&path).unwrap();

    let mut engine = CanvasEngine::new(32, 32);
    draw_mark(&mut engine);
    engine.open_from(&path).unwrap();
    assert_eq!(px(&engine, 8, 8), Color32::WHITE);

    engine.undo();
    assert_eq!(px(&engine, 8, 8), Color32::BLACK);
}

#[test]
fn save_never_mutates_the_surface() {
    let dir = tempfile::tempdir().unwrap();

    let mut engine = CanvasEngine::new(32, 32);
    draw_mark(&mut engine);
    let before = engine.surface().clone();

    engine.save_to(&dir.path().join("a.png")).unwrap();
    assert!(engine.surface() == &before);

    // a failed save leaves it untouched too
    assert!(engine.save_to(std::path::Path::new("/nonexistent/b.png")).is_err());
    assert!(engine.surface() == &before);
}
