use std::path::Path;

use egui::{Color32, PointerButton, Pos2};

use crate::brush::{BrushSettings, CapStyle, DrawMode, JoinStyle, StrokeStyle};
use crate::error::{PaintError, Result};
use crate::history::History;
use crate::surface::Surface;

/// Where the stroke input machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokePhase {
    #[default]
    Idle,
    /// Freehand stroke in progress (primary button held in Point mode).
    PointDrawing,
    /// First line endpoint recorded, waiting for the second click.
    LinePending,
}

/// The canvas drawing and history engine.
///
/// Owns the raster surface exclusively and mutates it in response to host
/// events; the host reads [`CanvasEngine::take_dirty`] and composites
/// [`CanvasEngine::surface`] onto the window at its next paint. All
/// operations run to completion synchronously on the event thread.
pub struct CanvasEngine {
    surface: Surface,
    brush: BrushSettings,
    mode: DrawMode,
    phase: StrokePhase,
    /// Pending first endpoint in Line mode, or the last sampled point of a
    /// freehand stroke. Unset whenever no stroke/line is pending.
    anchor: Option<Pos2>,
    /// Canvas as it was before the stroke currently in progress; committed
    /// to history on release.
    pending_snapshot: Option<Surface>,
    history: History,
    dirty: bool,
}

impl CanvasEngine {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: Surface::new(width, height),
            brush: BrushSettings::default(),
            mode: DrawMode::default(),
            phase: StrokePhase::default(),
            anchor: None,
            pending_snapshot: None,
            history: History::default(),
            dirty: true,
        }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn brush(&self) -> &BrushSettings {
        &self.brush
    }

    pub fn mode(&self) -> DrawMode {
        self.mode
    }

    pub fn phase(&self) -> StrokePhase {
        self.phase
    }

    pub fn can_undo(&self) -> bool {
        self.history.has_snapshot()
    }

    /// True once since the last call if the surface changed and the host
    /// should re-composite it.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn set_brush_color(&mut self, color: Color32) {
        self.brush.color = color;
    }

    pub fn set_brush_width(&mut self, width: u32) {
        self.brush.set_width(width);
    }

    pub fn set_brush_style(&mut self, style: StrokeStyle) {
        self.brush.style = style;
    }

    pub fn set_brush_cap(&mut self, cap: CapStyle) {
        self.brush.cap = cap;
    }

    pub fn set_brush_join(&mut self, join: JoinStyle) {
        self.brush.join = join;
    }

    /// Switches the drawing tool. Always forces the stroke machine back to
    /// idle, discarding any pending line anchor without drawing.
    pub fn set_mode(&mut self, mode: DrawMode) {
        self.mode = mode;
        self.reset_stroke();
    }

    fn reset_stroke(&mut self) {
        self.phase = StrokePhase::Idle;
        self.anchor = None;
        self.pending_snapshot = None;
    }

    pub fn pointer_pressed(&mut self, pos: Pos2, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }
        match self.mode {
            DrawMode::Point => {
                self.pending_snapshot = Some(self.surface.clone());
                self.surface.draw_point(pos, &self.brush);
                self.phase = StrokePhase::PointDrawing;
                self.anchor = Some(pos);
                self.dirty = true;
            }
            DrawMode::Line => match self.anchor {
                None => {
                    // First click only arms the line; nothing is drawn yet.
                    self.anchor = Some(pos);
                    self.phase = StrokePhase::LinePending;
                }
                Some(anchor) => {
                    let before = self.surface.clone();
                    self.surface.draw_line(anchor, pos, &self.brush);
                    self.history.commit(before);
                    self.anchor = None;
                    self.phase = StrokePhase::Idle;
                    self.dirty = true;
                }
            },
        }
    }

    /// Extends a freehand stroke by chaining a short segment from the last
    /// sampled point. Ignored in Line mode and whenever the primary button
    /// is not held.
    pub fn pointer_moved(&mut self, pos: Pos2, primary_down: bool) {
        if !primary_down || self.mode != DrawMode::Point || self.phase != StrokePhase::PointDrawing
        {
            return;
        }
        if let Some(anchor) = self.anchor {
            self.surface.draw_line(anchor, pos, &self.brush);
            self.anchor = Some(pos);
            self.dirty = true;
        }
    }

    /// Ends a freehand stroke, committing the press-time snapshot. Line-mode
    /// releases commit nothing beyond what the press already did.
    pub fn pointer_released(&mut self, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }
        if self.phase == StrokePhase::PointDrawing {
            if let Some(before) = self.pending_snapshot.take() {
                self.history.commit(before);
            }
            self.phase = StrokePhase::Idle;
            self.anchor = None;
        }
    }

    /// Keeps the surface in sync with the on-screen canvas size, stretching
    /// existing content to the new dimensions. A zero dimension is refused
    /// and the prior surface kept.
    pub fn viewport_resized(&mut self, width: u32, height: u32) -> Result<()> {
        if width == self.surface.width() && height == self.surface.height() {
            return Ok(());
        }
        self.surface = self.surface.resized_to(width, height)?;
        self.dirty = true;
        Ok(())
    }

    /// Restores the snapshot taken before the last completed stroke, or
    /// whites the canvas if none exists. Invoking undo again toggles back.
    pub fn undo(&mut self) {
        self.history.undo(&mut self.surface);
        self.reset_stroke();
        self.dirty = true;
    }

    /// Fills the canvas white. The pre-clear content is committed so the
    /// clear itself can be undone.
    pub fn clear(&mut self) {
        self.history.commit(self.surface.clone());
        self.surface.clear();
        self.reset_stroke();
        self.dirty = true;
    }

    /// Encodes the canvas to `path` (format from the extension, PNG
    /// fallback). The surface is unaffected either way.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.surface.save_to(path)?;
        log::info!(
            "saved {}x{} canvas to {}",
            self.surface.width(),
            self.surface.height(),
            path.display()
        );
        Ok(())
    }

    /// Replaces the canvas with the decoded image at `path`, stretched to
    /// the current viewport dimensions. Any failure leaves the canvas
    /// unmodified; the pre-open content is committed so the open can be
    /// undone.
    pub fn open_from(&mut self, path: &Path) -> Result<()> {
        let bytes = std::fs::read(path).map_err(|source| PaintError::Io {
            path: path.to_owned(),
            source,
        })?;
        let loaded = Surface::from_encoded_bytes(&bytes)?;
        let (width, height) = (self.surface.width(), self.surface.height());
        let loaded = if width > 0 && height > 0 {
            loaded.resized_to(width, height)?
        } else {
            loaded
        };
        log::info!("opened image from {}", path.display());
        self.history.commit(std::mem::replace(&mut self.surface, loaded));
        self.reset_stroke();
        self.dirty = true;
        Ok(())
    }
}
