use egui::Color32;

/// Slider bounds for the brush width, in pixels.
pub const MIN_BRUSH_WIDTH: u32 = 1;
pub const MAX_BRUSH_WIDTH: u32 = 40;

/// Pattern applied along a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeStyle {
    #[default]
    Solid,
    Dash,
    Dot,
}

impl StrokeStyle {
    pub const ALL: [StrokeStyle; 3] = [StrokeStyle::Solid, StrokeStyle::Dash, StrokeStyle::Dot];

    pub fn label(self) -> &'static str {
        match self {
            StrokeStyle::Solid => "Solid",
            StrokeStyle::Dash => "Dash",
            StrokeStyle::Dot => "Dot",
        }
    }
}

/// Shape stamped at the endpoints of a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapStyle {
    Square,
    Flat,
    #[default]
    Round,
}

impl CapStyle {
    pub const ALL: [CapStyle; 3] = [CapStyle::Square, CapStyle::Flat, CapStyle::Round];

    pub fn label(self) -> &'static str {
        match self {
            CapStyle::Square => "Square",
            CapStyle::Flat => "Flat",
            CapStyle::Round => "Round",
        }
    }
}

/// Shape stamped where chained segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinStyle {
    #[default]
    Round,
    Miter,
    Bevel,
}

impl JoinStyle {
    pub const ALL: [JoinStyle; 3] = [JoinStyle::Round, JoinStyle::Miter, JoinStyle::Bevel];

    pub fn label(self) -> &'static str {
        match self {
            JoinStyle::Round => "Round",
            JoinStyle::Miter => "Miter",
            JoinStyle::Bevel => "Bevel",
        }
    }
}

/// Active drawing tool: freehand points or click-to-click lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawMode {
    #[default]
    Point,
    Line,
}

impl DrawMode {
    pub const ALL: [DrawMode; 2] = [DrawMode::Point, DrawMode::Line];

    pub fn label(self) -> &'static str {
        match self {
            DrawMode::Point => "Point",
            DrawMode::Line => "Line",
        }
    }
}

/// The active stroke configuration.
///
/// Mutated only through [`crate::CanvasEngine`] setters; the stroke machine
/// reads it when committing a stroke and never writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushSettings {
    pub color: Color32,
    /// Tip diameter in pixels, always within 1..=40.
    pub width: u32,
    pub style: StrokeStyle,
    pub cap: CapStyle,
    pub join: JoinStyle,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            width: MIN_BRUSH_WIDTH,
            style: StrokeStyle::default(),
            cap: CapStyle::default(),
            join: JoinStyle::default(),
        }
    }
}

impl BrushSettings {
    pub fn set_width(&mut self, width: u32) {
        self.width = width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH);
    }
}
