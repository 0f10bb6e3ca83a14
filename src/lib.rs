#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod engine;
pub mod error;
pub mod history;
pub mod panels;
pub mod surface;

pub use app::PaintApp;
pub use brush::{BrushSettings, CapStyle, DrawMode, JoinStyle, StrokeStyle};
pub use engine::{CanvasEngine, StrokePhase};
pub use error::{PaintError, Result};
pub use history::History;
pub use surface::Surface;
