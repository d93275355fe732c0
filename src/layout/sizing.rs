use super::text::TextFitter;
use crate::config::LayoutConfig;
use crate::font::TextRasterizer;
use crate::rect::PixelRect;
use crate::request::{SymbolFamily, TextSpec};
use crate::LabelError;

/// Computes the pixel footprint of the symbol on a `label_width` × `label_height`
/// canvas. The returned rect sits at the origin; the composer centers it.
///
/// Rectangular symbols span the label width less both margins and take half of
/// the label height, capped at [LayoutConfig::rectangular_height_cap]. They
/// ignore `reserved_text`. Square symbols take the largest square that fits the
/// label width and the label height left over after `reserved_text`.
pub fn symbol_size(
    family: SymbolFamily,
    label_width: i32,
    label_height: i32,
    reserved_text: i32,
    config: &LayoutConfig,
) -> Result<PixelRect, LabelError> {
    let (width, height) = match family {
        SymbolFamily::Rectangular => (
            label_width - config.horizontal_margins(),
            (label_height / 2).min(config.rectangular_height_cap as i32),
        ),
        SymbolFamily::Square => {
            let side = label_width
                .min(label_height - reserved_text.max(0))
                .min(label_height);
            (side, side)
        }
    };

    if width <= 0 || height <= 0 {
        return Err(LabelError::DegenerateLayout(format!(
            "a {family} symbol on a {label_width}x{label_height}px label \
             with {reserved_text}px reserved for text would be {width}x{height}px"
        )));
    }

    Ok(PixelRect::sized(width as u32, height as u32))
}

/// Estimates the vertical space text will need before the symbol is sized: two
/// line heights per line, at the size the line would get on a label of
/// [LayoutConfig::reference_width]. The estimate is never revisited after the
/// text is actually fitted.
pub fn reserve_text_height(
    specs: &[TextSpec],
    dpi: u32,
    rasterizer: &dyn TextRasterizer,
    config: &LayoutConfig,
) -> i32 {
    let fitter = TextFitter::new(rasterizer, config, dpi);
    specs
        .iter()
        .map(|spec| {
            let size = fitter.candidate_size(spec.size, config.reference_width as i32);
            2 * rasterizer.line_height(size, dpi) as i32
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::colour::Colour;
    use crate::request::SizeClass;
    use crate::units::Pt;
    use std::cell::RefCell;

    /// Line height is three pixels per point; records the sizes it was asked about
    struct Recorder {
        sizes: RefCell<Vec<Pt>>,
    }

    impl TextRasterizer for Recorder {
        fn measure_width(&self, text: &str, _size: Pt, _dpi: u32) -> u32 {
            text.len() as u32
        }

        fn line_height(&self, size: Pt, _dpi: u32) -> u32 {
            self.sizes.borrow_mut().push(size);
            (size.0 * 3.0).round() as u32
        }

        fn draw(&self, _: &mut Canvas, _: &str, _: (i32, i32), _: Pt, _: u32, _: Colour) {}
    }

    #[test]
    fn rectangular_spans_width_less_margins() {
        let config = LayoutConfig::default();
        let rect = symbol_size(SymbolFamily::Rectangular, 590, 354, 0, &config).unwrap();
        assert_eq!((rect.width, rect.height), (570, 177));
    }

    #[test]
    fn rectangular_height_is_capped() {
        let config = LayoutConfig::default();
        let rect = symbol_size(SymbolFamily::Rectangular, 812, 1218, 0, &config).unwrap();
        assert_eq!((rect.width, rect.height), (792, 200));
    }

    #[test]
    fn rectangular_ignores_reservation() {
        let config = LayoutConfig::default();
        let with = symbol_size(SymbolFamily::Rectangular, 590, 354, 150, &config).unwrap();
        let without = symbol_size(SymbolFamily::Rectangular, 590, 354, 0, &config).unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn square_leaves_room_for_text() {
        let config = LayoutConfig::default();
        let rect = symbol_size(SymbolFamily::Square, 399, 399, 58, &config).unwrap();
        assert_eq!((rect.width, rect.height), (341, 341));

        // a wide label is limited by its height, a tall one by its width
        let rect = symbol_size(SymbolFamily::Square, 800, 300, 0, &config).unwrap();
        assert_eq!((rect.width, rect.height), (300, 300));
        let rect = symbol_size(SymbolFamily::Square, 300, 800, 40, &config).unwrap();
        assert_eq!((rect.width, rect.height), (300, 300));
    }

    #[test]
    fn degenerate_sizes_are_rejected() {
        let config = LayoutConfig::default();
        assert!(matches!(
            symbol_size(SymbolFamily::Rectangular, 20, 300, 0, &config),
            Err(LabelError::DegenerateLayout(_))
        ));
        assert!(matches!(
            symbol_size(SymbolFamily::Rectangular, 300, 1, 0, &config),
            Err(LabelError::DegenerateLayout(_))
        ));
        assert!(matches!(
            symbol_size(SymbolFamily::Square, 300, 100, 100, &config),
            Err(LabelError::DegenerateLayout(_))
        ));
    }

    #[test]
    fn reservation_uses_the_reference_width_size() {
        let config = LayoutConfig::default();
        let recorder = Recorder {
            sizes: RefCell::new(Vec::new()),
        };
        let specs = vec![
            TextSpec::below("SKU 42", SizeClass::Small),
            TextSpec::above("Aisle 7", SizeClass::Large),
        ];

        // 8pt and 12pt both scale by the 1.1 floor: 8.8pt and 13.2pt
        let reserved = reserve_text_height(&specs, 203, &recorder, &config);
        let sizes = recorder.sizes.borrow();
        assert_eq!(sizes.len(), 2);
        assert!((sizes[0].0 - 8.8).abs() < 1e-4);
        assert!((sizes[1].0 - 13.2).abs() < 1e-4);
        assert_eq!(reserved, 2 * 26 + 2 * 40);
    }

    #[test]
    fn no_text_reserves_nothing() {
        let config = LayoutConfig::default();
        let recorder = Recorder {
            sizes: RefCell::new(Vec::new()),
        };
        assert_eq!(reserve_text_height(&[], 300, &recorder, &config), 0);
    }
}
