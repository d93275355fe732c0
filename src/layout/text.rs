use crate::config::LayoutConfig;
use crate::font::TextRasterizer;
use crate::request::SizeClass;
use crate::units::Pt;
use crate::LabelError;

/// The outcome of fitting one line of text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedText {
    /// The resolved font size
    pub size: Pt,
    /// Baseline-to-baseline distance at `size`, in pixels
    pub line_height: u32,
    /// The measured width of the text at `size`, in pixels
    pub width: u32,
}

/// Picks the largest font size, at or below the width-scaled size of a
/// [SizeClass], at which a line of text fits the canvas width less its margins.
///
/// Sizes are always whole multiples of [LayoutConfig::shrink_step], so fitting
/// the same text twice gives the same size, and a wider canvas never gives a
/// smaller one.
pub struct TextFitter<'a> {
    rasterizer: &'a dyn TextRasterizer,
    config: &'a LayoutConfig,
    dpi: u32,
}

impl<'a> TextFitter<'a> {
    /// Create a fitter measuring with `rasterizer` at `dpi`
    pub fn new(rasterizer: &'a dyn TextRasterizer, config: &'a LayoutConfig, dpi: u32) -> Self {
        TextFitter {
            rasterizer,
            config,
            dpi,
        }
    }

    /// How far the base size is scaled for a canvas `available` pixels wide
    fn scale(&self, available: i32) -> f32 {
        let reference = self.config.reference_width as f32;
        (1.0 + (available as f32 - reference) / 1000.0)
            .clamp(self.config.min_scale, self.config.max_scale)
    }

    /// Number of shrink steps making up `size`, rounded to the nearest step
    fn steps(&self, size: Pt) -> i64 {
        (size.0 / self.config.shrink_step.0).round() as i64
    }

    fn size_at(&self, steps: i64) -> Pt {
        Pt(steps as f32 * self.config.shrink_step.0)
    }

    /// The unshrunk size for `size_class` on a canvas `available` pixels wide
    pub fn candidate_size(&self, size_class: SizeClass, available: i32) -> Pt {
        let raw = size_class.base_size().0 * self.scale(available);
        self.size_at(self.steps(Pt(raw)))
    }

    /// Fit `text` onto a canvas `available` pixels wide, shrinking one step at a
    /// time until it is no wider than `available` less both margins.
    pub fn fit(&self, text: &str, size_class: SizeClass, available: i32) -> Result<FittedText, LabelError> {
        let limit = available - self.config.horizontal_margins();
        let start = self.steps(self.candidate_size(size_class, available));
        let floor = self.steps(self.config.min_font_size).max(1);

        for steps in (floor..=start).rev() {
            let size = self.size_at(steps);
            let width = self.rasterizer.measure_width(text, size, self.dpi);
            log::trace!("{text:?} at {size}pt is {width}px wide, limit {limit}px");
            if width as i64 <= limit as i64 {
                return Ok(FittedText {
                    size,
                    line_height: self.rasterizer.line_height(size, self.dpi),
                    width,
                });
            }
        }

        Err(LabelError::TextUnfittable {
            text: text.to_string(),
            available,
            floor: self.size_at(floor),
        })
    }
}
