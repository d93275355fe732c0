use crate::colour::Colour;
use crate::rect::PixelRect;
use crate::symbol::SymbolBitmap;
use image::{Rgba, RgbaImage};

/// The pixel buffer of a whole label. A canvas is only mutated while a label is
/// being composed; exporters receive it by shared reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocate a canvas uniformly filled with `background`
    pub fn new(width: u32, height: u32, background: Colour) -> Canvas {
        Canvas {
            image: RgbaImage::from_pixel(width, height, background.to_rgba()),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The bounds of the canvas, anchored at the origin
    pub fn bounds(&self) -> PixelRect {
        PixelRect::sized(self.width(), self.height())
    }

    /// Read-only access to the underlying pixels
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// The pixel at (x, y), or `None` outside the canvas
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba<u8>> {
        if self.bounds().contains(x, y) {
            Some(*self.image.get_pixel(x as u32, y as u32))
        } else {
            None
        }
    }

    /// Paint a single pixel; coordinates outside the canvas are clipped.
    ///
    /// All [Colour]s are opaque, so source-over compositing reduces to replacing
    /// the destination pixel.
    pub fn paint(&mut self, x: i32, y: i32, colour: Colour) {
        if self.bounds().contains(x, y) {
            self.image.put_pixel(x as u32, y as u32, colour.to_rgba());
        }
    }

    /// Paint a horizontal run of pixels `[x0, x1)` on row `y`, clipped to the canvas
    pub fn paint_span(&mut self, x0: i32, x1: i32, y: i32, colour: Colour) {
        if y < 0 || y >= self.height() as i32 {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width() as i32);
        let pixel = colour.to_rgba();
        for x in x0..x1 {
            self.image.put_pixel(x as u32, y as u32, pixel);
        }
    }

    /// Paint a symbol with its top-left corner at `(rect.x, rect.y)`: dark modules
    /// in `ink`, light modules in `paper`
    pub fn draw_symbol(&mut self, symbol: &SymbolBitmap, rect: PixelRect, ink: Colour, paper: Colour) {
        for sy in 0..symbol.height().min(rect.height) {
            for sx in 0..symbol.width().min(rect.width) {
                let colour = if symbol.is_dark(sx, sy) { ink } else { paper };
                self.paint(rect.x + sx as i32, rect.y + sy as i32, colour);
            }
        }
    }

    /// Whether the pixel is darker than mid-grey, the threshold printers use to
    /// decide whether a dot is burned
    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        let Rgba([r, g, b, a]) = *self.image.get_pixel(x, y);
        if a < 128 {
            return false;
        }
        let luma = (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000;
        luma < 128
    }
}
