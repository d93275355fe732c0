use super::sizing::{reserve_text_height, symbol_size};
use super::text::{FittedText, TextFitter};
use crate::canvas::Canvas;
use crate::config::LayoutConfig;
use crate::font::TextRasterizer;
use crate::rect::PixelRect;
use crate::request::{LayoutRequest, SymbolFamily, TextAnchor, TextSpec};
use crate::symbol::SymbolEncoder;
use crate::units::to_pixels;
use crate::LabelError;

/// A line of text as it was drawn
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub spec: TextSpec,
    pub fitted: FittedText,
    /// The left end of the baseline, in canvas pixels
    pub origin: (i32, i32),
}

impl PlacedText {
    /// The line box: from one line height above the baseline down to the
    /// baseline, as wide as the measured text
    pub fn bounds(&self) -> PixelRect {
        PixelRect::new(
            self.origin.0,
            self.origin.1 - self.fitted.line_height as i32,
            self.fitted.width,
            self.fitted.line_height,
        )
    }
}

/// A finished label: the painted canvas and where everything landed on it
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedLabel {
    pub canvas: Canvas,
    /// Where the symbol was painted
    pub symbol: PixelRect,
    /// One entry per requested line of text, in request order
    pub text: Vec<PlacedText>,
}

/// Sizes, encodes and paints a symbol, then fits and paints each line of text
/// around it.
pub struct LabelComposer<'a> {
    encoder: &'a dyn SymbolEncoder,
    rasterizer: &'a dyn TextRasterizer,
    config: &'a LayoutConfig,
}

impl<'a> LabelComposer<'a> {
    /// Create a composer that borrows its collaborators and configuration
    pub fn new(
        encoder: &'a dyn SymbolEncoder,
        rasterizer: &'a dyn TextRasterizer,
        config: &'a LayoutConfig,
    ) -> Self {
        LabelComposer {
            encoder,
            rasterizer,
            config,
        }
    }

    /// Lay out and paint `request` onto a fresh canvas. Neither the resolution
    /// nor the configuration is checked here; [crate::LabelPipeline::layout] does both.
    pub fn compose(&self, request: &LayoutRequest) -> Result<ComposedLabel, LabelError> {
        let width = to_pixels(request.width, request.dpi);
        let height = to_pixels(request.height, request.dpi);
        if width <= 0 || height <= 0 {
            return Err(LabelError::DegenerateLayout(format!(
                "a {}x{}mm label is {width}x{height}px at {}dpi",
                request.width, request.height, request.dpi
            )));
        }
        log::debug!("canvas is {width}x{height}px at {}dpi", request.dpi);

        let reserved = match request.family {
            SymbolFamily::Square => {
                reserve_text_height(&request.text, request.dpi, self.rasterizer, self.config)
            }
            SymbolFamily::Rectangular => 0,
        };
        let size = symbol_size(request.family, width, height, reserved, self.config)?;
        log::debug!(
            "{} symbol is {}x{}px ({reserved}px reserved for text)",
            request.family,
            size.width,
            size.height
        );

        let symbol = self
            .encoder
            .encode(&request.data, request.family)
            .and_then(|bitmap| self.encoder.scale(&bitmap, size.width, size.height))
            .map_err(|source| LabelError::EncodingFailed {
                family: request.family,
                source,
            })?;

        let mut canvas = Canvas::new(width as u32, height as u32, self.config.background);
        let rect = size.centered_in(width as u32, height as u32);
        canvas.draw_symbol(&symbol, rect, self.config.foreground, self.config.background);
        log::debug!("symbol painted at ({}, {})", rect.x, rect.y);

        let fitter = TextFitter::new(self.rasterizer, self.config, request.dpi);
        let mut placed = Vec::with_capacity(request.text.len());
        for spec in request.text.iter() {
            let fitted = fitter.fit(&spec.text, spec.size, width)?;
            let line_height = fitted.line_height as i32;
            let y = match spec.anchor {
                TextAnchor::Above => rect.top() - line_height / 2,
                TextAnchor::Below => rect.bottom() + 3 * line_height / 2 + self.config.below_gutter,
            };
            let x = width / 2 - fitted.width as i32 / 2;

            let line = PlacedText {
                spec: spec.clone(),
                fitted,
                origin: (x, y),
            };
            let bounds = line.bounds();
            if bounds.left() < 0 || bounds.top() < 0 || bounds.right() > width || bounds.bottom() > height {
                log::warn!(
                    "text {:?} at ({x}, {y}) extends past the {width}x{height}px canvas and will be clipped",
                    spec.text
                );
            }

            self.rasterizer.draw(
                &mut canvas,
                &spec.text,
                line.origin,
                fitted.size,
                request.dpi,
                self.config.foreground,
            );
            log::debug!("{:?} drawn at {}pt, baseline ({x}, {y})", spec.text, fitted.size);
            placed.push(line);
        }

        Ok(ComposedLabel {
            canvas,
            symbol: rect,
            text: placed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;
    use crate::request::SizeClass;
    use crate::symbol::{BuiltinEncoder, SymbolBitmap, SymbolError};
    use crate::units::{Mm, Pt};
    use std::cell::RefCell;

    /// Fixed metrics: 10px per character, 20px lines; records every draw call
    #[derive(Default)]
    struct Fixed {
        drawn: RefCell<Vec<(String, (i32, i32))>>,
    }

    impl TextRasterizer for Fixed {
        fn measure_width(&self, text: &str, _size: Pt, _dpi: u32) -> u32 {
            10 * text.chars().count() as u32
        }

        fn line_height(&self, _size: Pt, _dpi: u32) -> u32 {
            20
        }

        fn draw(&self, _: &mut Canvas, text: &str, origin: (i32, i32), _: Pt, _: u32, _: Colour) {
            self.drawn.borrow_mut().push((text.to_string(), origin));
        }
    }

    struct Refuses;

    impl SymbolEncoder for Refuses {
        fn encode(&self, data: &str, _family: SymbolFamily) -> Result<SymbolBitmap, SymbolError> {
            Err(SymbolError::InvalidData(data.to_string()))
        }
    }

    #[test]
    fn rectangular_symbol_is_centered() {
        let config = LayoutConfig::default();
        let text = Fixed::default();
        let composer = LabelComposer::new(&BuiltinEncoder, &text, &config);
        let request = LayoutRequest::new("1234567890", SymbolFamily::Rectangular, Mm(50.0), Mm(30.0), 300);

        let label = composer.compose(&request).unwrap();
        assert_eq!((label.canvas.width(), label.canvas.height()), (590, 354));
        assert_eq!(label.symbol, PixelRect::new(10, 88, 570, 177));
        // 90 modules at 6px each, centered in 570: 15px of slack on the left
        assert!(!label.canvas.is_dark(10 + 14, 100));
        assert!(label.canvas.is_dark(10 + 15, 100));
        assert!(label.canvas.is_dark(10 + 15, 88 + 176));
        assert!(!label.canvas.is_dark(10 + 15, 87));
    }

    #[test]
    fn text_is_placed_around_the_symbol() {
        let config = LayoutConfig::default();
        let text = Fixed::default();
        let composer = LabelComposer::new(&BuiltinEncoder, &text, &config);
        let request = LayoutRequest::new("1234567890", SymbolFamily::Rectangular, Mm(50.0), Mm(30.0), 300)
            .with_text(TextSpec::above("TOP", SizeClass::Medium))
            .with_text(TextSpec::below("BOTTOM", SizeClass::Small));

        let label = composer.compose(&request).unwrap();
        assert_eq!(label.text.len(), 2);
        // above: 88 - 20 / 2; centered: 295 - 30 / 2
        assert_eq!(label.text[0].origin, (280, 78));
        // below: 265 + 3 * 20 / 2 + 5; centered: 295 - 60 / 2
        assert_eq!(label.text[1].origin, (265, 300));
        let drawn = text.drawn.borrow();
        assert_eq!(drawn[0], ("TOP".to_string(), (280, 78)));
        assert_eq!(drawn[1], ("BOTTOM".to_string(), (265, 300)));
    }

    #[test]
    fn square_symbol_reserves_text_space() {
        let config = LayoutConfig::default();
        let text = Fixed::default();
        let composer = LabelComposer::new(&BuiltinEncoder, &text, &config);
        let request = LayoutRequest::new("https://example.com/p/1", SymbolFamily::Square, Mm(50.0), Mm(50.0), 203)
            .with_text(TextSpec::below("SKU", SizeClass::Small));

        let label = composer.compose(&request).unwrap();
        // 399 - 2 * 20 reserved
        assert_eq!(label.symbol.width, 359);
        assert_eq!(label.symbol.height, 359);
        assert_eq!(label.symbol.y, 20);
    }

    #[test]
    fn degenerate_canvas_is_rejected() {
        let config = LayoutConfig::default();
        let text = Fixed::default();
        let composer = LabelComposer::new(&BuiltinEncoder, &text, &config);
        let request = LayoutRequest::new("1", SymbolFamily::Square, Mm(0.0), Mm(50.0), 203);
        assert!(matches!(
            composer.compose(&request),
            Err(LabelError::DegenerateLayout(_))
        ));
    }

    #[test]
    fn encoder_failures_are_wrapped() {
        let config = LayoutConfig::default();
        let text = Fixed::default();
        let composer = LabelComposer::new(&Refuses, &text, &config);
        let request = LayoutRequest::new("nope", SymbolFamily::Square, Mm(50.0), Mm(50.0), 203);
        match composer.compose(&request) {
            Err(LabelError::EncodingFailed { family, source }) => {
                assert_eq!(family, SymbolFamily::Square);
                assert!(matches!(source, SymbolError::InvalidData(_)));
            }
            other => panic!("expected EncodingFailed, got {other:?}"),
        }
    }

    #[test]
    fn symbol_too_dense_for_its_box_fails_to_encode() {
        let config = LayoutConfig::default();
        let text = Fixed::default();
        let composer = LabelComposer::new(&BuiltinEncoder, &text, &config);
        // 10mm at 203dpi leaves 59px, fewer than the 90 modules of the barcode
        let request = LayoutRequest::new("1234567890", SymbolFamily::Rectangular, Mm(10.0), Mm(10.0), 203);
        assert!(matches!(
            composer.compose(&request),
            Err(LabelError::EncodingFailed {
                source: SymbolError::TooSmall { .. },
                ..
            })
        ));
    }

    #[test]
    fn unfittable_text_fails_the_label() {
        let config = LayoutConfig::default();
        let text = Fixed::default();
        let composer = LabelComposer::new(&BuiltinEncoder, &text, &config);
        let request = LayoutRequest::new("1234567890", SymbolFamily::Rectangular, Mm(50.0), Mm(30.0), 300)
            .with_text(TextSpec::above("x".repeat(100), SizeClass::Small));
        assert!(matches!(
            composer.compose(&request),
            Err(LabelError::TextUnfittable { .. })
        ));
    }
}
