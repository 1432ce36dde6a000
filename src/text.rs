use ab_glyph::{Font, FontArc, OutlinedGlyph, ScaleFont, point};
use image::{Rgb, RgbImage};

use crate::{
    builtin,
    font::{Face, FontHandle, em_scale},
};

/// Coverage at or above this is painted as solid ink.
const SOLID_COVERAGE: f32 = 0.5;

enum Ink {
    Outline(Vec<OutlinedGlyph>),
    Cells { cells: Vec<(u32, u32)>, scale: u32 },
}

/// A string laid out under a font, measured by its ink bounding box.
pub struct TextLayout {
    ink: Ink,
    min_x: i32,
    min_y: i32,
    width: u32,
    height: u32,
}

impl TextLayout {
    pub fn new(text: &str, font: &FontHandle) -> Self {
        match &font.face {
            Face::Outline(face) => Self::outline(text, face, font.px),
            Face::Builtin => Self::builtin(text, font.px),
        }
    }

    fn outline(text: &str, font: &FontArc, px: u32) -> Self {
        let scale = em_scale(font, px);
        let scaled = font.as_scaled(scale);

        let mut glyphs = Vec::new();
        let mut caret = 0.0;
        let mut previous = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, scaled.ascent()));
            caret += scaled.h_advance(id);
            previous = Some(id);
            if let Some(outlined) = font.outline_glyph(glyph) {
                glyphs.push(outlined);
            }
        }

        let mut bounds: Option<(i32, i32, i32, i32)> = None;
        for glyph in &glyphs {
            let rect = glyph.px_bounds();
            let (x0, y0) = (rect.min.x.floor() as i32, rect.min.y.floor() as i32);
            let (x1, y1) = (rect.max.x.ceil() as i32, rect.max.y.ceil() as i32);
            bounds = Some(match bounds {
                None => (x0, y0, x1, y1),
                Some((a, b, c, d)) => (a.min(x0), b.min(y0), c.max(x1), d.max(y1)),
            });
        }
        Self::with_bounds(Ink::Outline(glyphs), bounds)
    }

    fn builtin(text: &str, px: u32) -> Self {
        let scale = builtin::scale_for_px(px);
        let cells = builtin::ink_cells(text);

        let mut bounds: Option<(i32, i32, i32, i32)> = None;
        for &(col, row) in &cells {
            let (x0, y0) = ((col * scale) as i32, (row * scale) as i32);
            let (x1, y1) = (x0 + scale as i32, y0 + scale as i32);
            bounds = Some(match bounds {
                None => (x0, y0, x1, y1),
                Some((a, b, c, d)) => (a.min(x0), b.min(y0), c.max(x1), d.max(y1)),
            });
        }
        Self::with_bounds(Ink::Cells { cells, scale }, bounds)
    }

    fn with_bounds(ink: Ink, bounds: Option<(i32, i32, i32, i32)>) -> Self {
        let (min_x, min_y, max_x, max_y) = bounds.unwrap_or_default();
        Self {
            ink,
            min_x,
            min_y,
            width: (max_x - min_x) as u32,
            height: (max_y - min_y) as u32,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Draws the text with the top-left corner of its ink box at (`x`, `y`).
    /// Pixels falling outside the image are clipped.
    pub fn draw(&self, img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
        let dx = x - self.min_x;
        let dy = y - self.min_y;
        match &self.ink {
            Ink::Outline(glyphs) => {
                for glyph in glyphs {
                    let rect = glyph.px_bounds();
                    let gx0 = rect.min.x.floor() as i32 + dx;
                    let gy0 = rect.min.y.floor() as i32 + dy;
                    glyph.draw(|gx, gy, coverage| {
                        blend(img, gx0 + gx as i32, gy0 + gy as i32, color, coverage);
                    });
                }
            }
            Ink::Cells { cells, scale } => {
                let scale = *scale as i32;
                for &(col, row) in cells {
                    let cx = col as i32 * scale + dx;
                    let cy = row as i32 * scale + dy;
                    for py in cy..cy + scale {
                        for px in cx..cx + scale {
                            blend(img, px, py, color, 1.0);
                        }
                    }
                }
            }
        }
    }
}

fn blend(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x as u32 >= img.width() || y as u32 >= img.height() {
        return;
    }
    let alpha = if coverage >= SOLID_COVERAGE {
        1.0
    } else {
        coverage.max(0.0)
    };
    let pixel = img.get_pixel_mut(x as u32, y as u32);
    for (dst, src) in pixel.0.iter_mut().zip(color.0) {
        let mixed = *dst as f32 + (src as f32 - *dst as f32) * alpha;
        *dst = mixed.round().clamp(0.0, 255.0) as u8;
    }
}
