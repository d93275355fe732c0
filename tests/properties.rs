use label_gen::layout::{symbol_size, TextFitter};
use label_gen::{to_pixels, Canvas, Colour, LayoutConfig, Mm, Pt, SizeClass, SymbolFamily, TextRasterizer};
use proptest::prelude::*;

/// Every character is 0.6 em wide
struct Monospace;

impl TextRasterizer for Monospace {
    fn measure_width(&self, text: &str, size: Pt, dpi: u32) -> u32 {
        (text.chars().count() as f32 * 0.6 * size.pixels_per_em(dpi)).ceil() as u32
    }

    fn line_height(&self, size: Pt, dpi: u32) -> u32 {
        (1.2 * size.pixels_per_em(dpi)).ceil() as u32
    }

    fn draw(&self, _: &mut Canvas, _: &str, _: (i32, i32), _: Pt, _: u32, _: Colour) {}
}

fn size_class() -> impl Strategy<Value = SizeClass> {
    prop_oneof![Just(SizeClass::Small), Just(SizeClass::Medium), Just(SizeClass::Large)]
}

fn dpi() -> impl Strategy<Value = u32> {
    prop_oneof![Just(203u32), Just(300u32), Just(600u32)]
}

// Property: square symbols are square and leave the reserved space free
proptest! {
    #[test]
    fn prop_square_symbols_are_square(width in 1i32..3000, height in 1i32..3000, reserved in 0i32..600) {
        let config = LayoutConfig::default();
        if let Ok(rect) = symbol_size(SymbolFamily::Square, width, height, reserved, &config) {
            prop_assert!(rect.is_square());
            prop_assert!(rect.width as i32 <= width);
            prop_assert!(rect.height as i32 + reserved <= height);
        }
    }
}

// Property: rectangular symbols span the width less both margins
proptest! {
    #[test]
    fn prop_rectangular_width_is_canvas_less_margins(width in 21i32..3000, height in 2i32..3000) {
        let config = LayoutConfig::default();
        let rect = symbol_size(SymbolFamily::Rectangular, width, height, 0, &config).unwrap();
        prop_assert_eq!(rect.width as i32, width - 20);
        prop_assert!(rect.height <= 200);
        prop_assert!(rect.height as i32 <= height / 2);
    }
}

// Property: fitting the same text twice gives the same result
proptest! {
    #[test]
    fn prop_fitting_is_idempotent(text in "[ -~]{0,80}", class in size_class(), available in 21i32..2500, dpi in dpi()) {
        let config = LayoutConfig::default();
        let fitter = TextFitter::new(&Monospace, &config, dpi);
        let first = fitter.fit(&text, class, available).ok();
        let second = fitter.fit(&text, class, available).ok();
        prop_assert_eq!(first, second);
    }
}

// Property: a wider canvas never gives a smaller font, and fitted text stays within the margins
proptest! {
    #[test]
    fn prop_fitting_is_monotonic(
        text in "[ -~]{1,80}",
        class in size_class(),
        narrow in 21i32..2000,
        extra in 0i32..1000,
        dpi in dpi(),
    ) {
        let config = LayoutConfig::default();
        let fitter = TextFitter::new(&Monospace, &config, dpi);
        let wide = narrow + extra;
        if let Ok(small) = fitter.fit(&text, class, narrow) {
            prop_assert!(small.width as i32 <= narrow - 20);
            let large = fitter.fit(&text, class, wide).unwrap();
            prop_assert!(large.size >= small.size);
            prop_assert!(large.width as i32 <= wide - 20);
        }
    }
}

// Property: pixel conversion never decreases as the length grows
proptest! {
    #[test]
    fn prop_to_pixels_is_monotonic(mm in 0.0f64..500.0, extra in 0.0f64..100.0, dpi in dpi()) {
        prop_assert!(to_pixels(Mm(mm + extra), dpi) >= to_pixels(Mm(mm), dpi));
        prop_assert!(to_pixels(Mm(mm), dpi) >= 0);
    }
}
