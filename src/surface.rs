use std::path::Path;

use egui::{Color32, Pos2};
use image::imageops::FilterType;
use image::{ImageError, ImageFormat, Rgb, RgbImage};

use crate::brush::{BrushSettings, CapStyle, JoinStyle, StrokeStyle};
use crate::error::{PaintError, Result};

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Shape of the brush tip stamped at a single rasterized pixel.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Tip {
    Disc,
    Square,
}

/// An owned RGB raster buffer the engine draws into.
///
/// The surface never touches the screen; the host composites it via
/// [`Surface::to_color_image`]. Every pixel is defined (white) immediately
/// after creation.
#[derive(Clone, PartialEq)]
pub struct Surface {
    pixels: RgbImage,
}

impl Surface {
    /// Creates an all-white surface. Zero dimensions yield an empty buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbImage::from_pixel(width, height, BACKGROUND),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Reads the pixel at (x, y), or `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color32> {
        if x < 0 || y < 0 || x as u32 >= self.width() || y as u32 >= self.height() {
            return None;
        }
        let Rgb([r, g, b]) = *self.pixels.get_pixel(x as u32, y as u32);
        Some(Color32::from_rgb(r, g, b))
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
            self.pixels.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Fills every pixel with the white background in place.
    pub fn clear(&mut self) {
        for px in self.pixels.pixels_mut() {
            *px = BACKGROUND;
        }
    }

    /// Returns a new surface with this one's content stretched to the given
    /// dimensions, ignoring aspect ratio. Rescaling to the current
    /// dimensions is an exact no-op on pixel content.
    pub fn resized_to(&self, width: u32, height: u32) -> Result<Surface> {
        if width == 0 || height == 0 {
            return Err(PaintError::InvalidDimension { width, height });
        }
        if width == self.width() && height == self.height() {
            return Ok(self.clone());
        }
        Ok(Surface {
            pixels: image::imageops::resize(&self.pixels, width, height, FilterType::Triangle),
        })
    }

    /// Stamps the brush tip at `pos`. A width-1 brush sets exactly the
    /// single pixel under the position, regardless of cap.
    pub fn draw_point(&mut self, pos: Pos2, brush: &BrushSettings) {
        let (x, y) = round_pos(pos);
        let tip = match brush.cap {
            CapStyle::Round => Tip::Disc,
            CapStyle::Square | CapStyle::Flat => Tip::Square,
        };
        self.stamp(x, y, brush.width, tip, rgb(brush.color));
    }

    /// Rasterizes a straight segment from `from` to `to`, stamping the brush
    /// tip along a Bresenham walk. A degenerate segment (`from == to`) is
    /// pixel-identical to [`Surface::draw_point`].
    pub fn draw_line(&mut self, from: Pos2, to: Pos2, brush: &BrushSettings) {
        let (x0, y0) = round_pos(from);
        let (x1, y1) = round_pos(to);
        if (x0, y0) == (x1, y1) {
            self.draw_point(from, brush);
            return;
        }

        let color = rgb(brush.color);
        let interior = match brush.join {
            JoinStyle::Round => Tip::Disc,
            JoinStyle::Miter | JoinStyle::Bevel => Tip::Square,
        };
        let cap = match brush.cap {
            CapStyle::Round => Tip::Disc,
            CapStyle::Square => Tip::Square,
            // Flat gets no dedicated endpoint stamp beyond the interior shape.
            CapStyle::Flat => interior,
        };

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        let mut step: u32 = 0;

        loop {
            let at_end = (x, y) == (x0, y0) || (x, y) == (x1, y1);
            if pattern_on(brush.style, brush.width, step) {
                let tip = if at_end { cap } else { interior };
                self.stamp(x, y, brush.width, tip, color);
            }
            if (x, y) == (x1, y1) {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
            step += 1;
        }
    }

    fn stamp(&mut self, cx: i32, cy: i32, width: u32, tip: Tip, color: Rgb<u8>) {
        if width <= 1 {
            self.put_pixel(cx, cy, color);
            return;
        }
        let w = width as i32;
        match tip {
            Tip::Square => {
                // w pixels per axis, biased low for even widths.
                for dy in -((w - 1) / 2)..=(w / 2) {
                    for dx in -((w - 1) / 2)..=(w / 2) {
                        self.put_pixel(cx + dx, cy + dy, color);
                    }
                }
            }
            Tip::Disc => {
                let r = width as f32 / 2.0;
                let reach = w / 2 + 1;
                for dy in -reach..=reach {
                    for dx in -reach..=reach {
                        if (dx * dx + dy * dy) as f32 <= r * r {
                            self.put_pixel(cx + dx, cy + dy, color);
                        }
                    }
                }
            }
        }
    }

    /// Decodes a PNG/JPEG (or any format the `image` crate recognizes) byte
    /// stream into a surface at the image's native dimensions.
    pub fn from_encoded_bytes(bytes: &[u8]) -> Result<Surface> {
        let decoded =
            image::load_from_memory(bytes).map_err(|source| PaintError::Decode { source })?;
        Ok(Surface {
            pixels: decoded.to_rgb8(),
        })
    }

    /// Writes the pixel buffer to disk in the format implied by the path's
    /// extension, defaulting to PNG. Never mutates the surface.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
        self.pixels
            .save_with_format(path, format)
            .map_err(|err| match err {
                ImageError::IoError(source) => PaintError::Io {
                    path: path.to_owned(),
                    source,
                },
                source => PaintError::Encode {
                    path: path.to_owned(),
                    source,
                },
            })
    }

    /// The buffer in egui's texture upload form.
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgb(
            [self.width() as usize, self.height() as usize],
            self.pixels.as_raw(),
        )
    }
}

fn round_pos(pos: Pos2) -> (i32, i32) {
    (pos.x.round() as i32, pos.y.round() as i32)
}

fn rgb(color: Color32) -> Rgb<u8> {
    Rgb([color.r(), color.g(), color.b()])
}

/// Dash/dot on-off decision for the `step`-th pixel of a Bresenham walk.
/// Pattern lengths scale with the pen width.
fn pattern_on(style: StrokeStyle, width: u32, step: u32) -> bool {
    let w = width.max(1);
    match style {
        StrokeStyle::Solid => true,
        StrokeStyle::Dash => step % (6 * w) < 4 * w,
        StrokeStyle::Dot => step % (3 * w) < w,
    }
}
