use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::units::Pt;
use crate::LabelError;
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use rusttype::{point, Scale};
use std::path::Path;

/// Measures and paints text. Implementations own whatever font resources they
/// need; the layout engine only ever borrows them.
pub trait TextRasterizer {
    /// The width in pixels of `text` set on a single line at `size`
    fn measure_width(&self, text: &str, size: Pt, dpi: u32) -> u32;

    /// The distance in pixels between the baselines of two consecutive lines
    fn line_height(&self, size: Pt, dpi: u32) -> u32;

    /// Paint `text` with `origin` at the left end of its baseline. Anything
    /// outside the canvas is clipped.
    fn draw(
        &self,
        canvas: &mut Canvas,
        text: &str,
        origin: (i32, i32),
        size: Pt,
        dpi: u32,
        colour: Colour,
    );
}

/// The font used when no other font is supplied
pub static DEFAULT_FONT: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Glyph coverage at or above which a pixel is painted. Thermal printers burn a
/// dot or don't, so antialiased edges are thresholded.
const COVERAGE_THRESHOLD: f32 = 0.5;

/// A [TextRasterizer] backed by a parsed TrueType or OpenType font. The font is
/// parsed once, when the rasterizer is created: metrics come from `face`, glyph
/// coverage from [rusttype].
pub struct TtfRasterizer {
    pub face: OwnedFace,
    glyphs: rusttype::Font<'static>,
}

impl TtfRasterizer {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<TtfRasterizer, LabelError> {
        let glyphs = rusttype::Font::try_from_vec(bytes.clone());
        let face = OwnedFace::from_vec(bytes, 0)?;
        let glyphs = glyphs.ok_or(LabelError::UnsupportedFont)?;

        Ok(TtfRasterizer { face, glyphs })
    }

    /// Load a font file from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<TtfRasterizer, LabelError> {
        let bytes = std::fs::read(path)?;
        Self::load(bytes)
    }

    /// The embedded default font
    pub fn embedded() -> Result<TtfRasterizer, LabelError> {
        Self::load(DEFAULT_FONT.to_vec())
    }

    /// Pixels per font unit at the given size and resolution
    fn scaling(&self, size: Pt, dpi: u32) -> f32 {
        size.pixels_per_em(dpi) / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) in pixels
    pub fn ascent(&self, size: Pt, dpi: u32) -> f32 {
        self.scaling(size, dpi) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) in
    /// pixels. Note: this is usually negative
    pub fn descent(&self, size: Pt, dpi: u32) -> f32 {
        self.scaling(size, dpi) * self.face.as_face_ref().descender() as f32
    }

    /// The [rusttype] scale that gives the em square `size` at `dpi`. rusttype
    /// scales by the ascender to descender height, not by the em.
    fn raster_scale(&self, size: Pt, dpi: u32) -> Scale {
        let face = self.face.as_face_ref();
        let height = face.ascender() as f32 - face.descender() as f32;
        Scale::uniform(self.scaling(size, dpi) * height)
    }

    /// The glyph for `ch`, falling back to the replacement character, then `?`,
    /// then `.notdef`
    fn glyph(&self, ch: char) -> GlyphId {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
            .unwrap_or(GlyphId(0))
    }

    fn advance(&self, gid: GlyphId) -> f32 {
        self.face
            .as_face_ref()
            .glyph_hor_advance(gid)
            .unwrap_or_default() as f32
    }
}

impl TextRasterizer for TtfRasterizer {
    fn measure_width(&self, text: &str, size: Pt, dpi: u32) -> u32 {
        let scaling = self.scaling(size, dpi);
        let width: f32 = text
            .chars()
            .map(|ch| scaling * self.advance(self.glyph(ch)))
            .sum();
        width.max(0.0).ceil() as u32
    }

    fn line_height(&self, size: Pt, dpi: u32) -> u32 {
        let scaling = self.scaling(size, dpi);
        let face = self.face.as_face_ref();
        let leading = scaling * face.line_gap() as f32;
        let ascent = scaling * face.ascender() as f32;
        let descent = scaling * face.descender() as f32;
        (leading + ascent - descent).max(0.0).ceil() as u32
    }

    fn draw(
        &self,
        canvas: &mut Canvas,
        text: &str,
        origin: (i32, i32),
        size: Pt,
        dpi: u32,
        colour: Colour,
    ) {
        let scaling = self.scaling(size, dpi);
        let scale = self.raster_scale(size, dpi);
        let baseline = origin.1 as f32;
        let mut pen = origin.0 as f32;

        for ch in text.chars() {
            let gid = self.glyph(ch);
            let glyph = self
                .glyphs
                .glyph(rusttype::GlyphId(gid.0))
                .scaled(scale)
                .positioned(point(pen, baseline));
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    if coverage >= COVERAGE_THRESHOLD {
                        canvas.paint(bb.min.x + gx as i32, bb.min.y + gy as i32, colour);
                    }
                });
            }
            pen += scaling * self.advance(gid);
        }
    }
}
