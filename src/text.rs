//! Text measurement surfaces used by the layout providers.
//!
//! A measurer is scratch state: each call overwrites whatever the previous
//! call left behind, so one measurer must only be driven from one thread.

use eframe::egui::epaint::text::Fonts;
use eframe::egui::{vec2, Color32, FontDefinitions, FontId, Vec2};

/// Texture side passed to the font atlas. Nothing is uploaded from here, the
/// atlas only needs to be large enough to rasterize measured glyphs.
const MEASURE_TEXTURE_SIDE: usize = 4096;

/// Fits text into a width with unbounded height and reports the used size.
///
/// Implementations must reflow: widening `max_width` never increases the
/// returned height.
pub trait TextMeasurer {
    fn measure(&mut self, text: &str, max_width: f32) -> Vec2;
}

/// Measures through an egui galley, matching what the painter will draw.
pub struct GalleyMeasurer {
    fonts: Fonts,
    font_id: FontId,
    pixels_per_point: f32,
}

impl GalleyMeasurer {
    pub fn new(definitions: FontDefinitions, font_id: FontId, pixels_per_point: f32) -> Self {
        Self {
            fonts: Fonts::new(pixels_per_point, MEASURE_TEXTURE_SIDE, definitions),
            font_id,
            pixels_per_point,
        }
    }

    /// egui's default proportional font at `size` points.
    pub fn proportional(size: f32, pixels_per_point: f32) -> Self {
        Self::new(FontDefinitions::default(), FontId::proportional(size), pixels_per_point)
    }

    pub fn font_id(&self) -> &FontId {
        &self.font_id
    }
}

impl TextMeasurer for GalleyMeasurer {
    fn measure(&mut self, text: &str, max_width: f32) -> Vec2 {
        // New pass every call so the galley cache only ever holds the last text.
        self.fonts.begin_pass(self.pixels_per_point, MEASURE_TEXTURE_SIDE);
        let galley = self
            .fonts
            .layout(text.to_owned(), self.font_id.clone(), Color32::PLACEHOLDER, max_width);
        let size = galley.size();
        // Whole points, never wider than offered. Re-wrapping at the reported
        // width then breaks lines the same way.
        let width = size.x.ceil().min(max_width.max(0.0));
        vec2(width, size.y.ceil())
    }
}

/// Fixed-advance measurer with greedy word wrap.
///
/// Deterministic and font-free, for headless height estimation.
#[derive(Clone, Debug)]
pub struct MonospaceMeasurer {
    pub glyph_width: f32,
    pub line_height: f32,
}

impl MonospaceMeasurer {
    pub fn new(glyph_width: f32, line_height: f32) -> Self {
        Self {
            glyph_width,
            line_height,
        }
    }

    /// Character count of each wrapped line.
    fn wrap_lines(&self, text: &str, max_width: f32) -> Vec<usize> {
        let capacity = ((max_width / self.glyph_width).floor() as usize).max(1);
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let mut current = 0usize;
            for word in paragraph.split_whitespace() {
                let mut len = word.chars().count();
                if current > 0 && current + 1 + len <= capacity {
                    current += 1 + len;
                    continue;
                }
                if current > 0 {
                    lines.push(current);
                }
                // Words longer than a line are broken at the capacity
                while len > capacity {
                    lines.push(capacity);
                    len -= capacity;
                }
                current = len;
            }
            lines.push(current);
        }

        lines
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&mut self, text: &str, max_width: f32) -> Vec2 {
        if text.is_empty() {
            return Vec2::ZERO;
        }
        let lines = self.wrap_lines(text, max_width);
        let widest = lines.iter().copied().max().unwrap_or(0);
        vec2(
            widest as f32 * self.glyph_width,
            lines.len() as f32 * self.line_height,
        )
    }
}
