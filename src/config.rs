use crate::colour::{colours, Colour};
use crate::request::SizeClass;
use crate::units::Pt;
use crate::LabelError;

/// The finest shrink step accepted
pub const MIN_SHRINK_STEP: Pt = Pt(0.01);

/// Upper bound on the shrink steps between the largest candidate size and zero
pub const MAX_SHRINK_STEPS: f32 = 10_000.0;

/// The tunable constants of the layout engine. [LayoutConfig::default] matches
/// the behaviour printers in the field were calibrated against.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Pixels kept clear on the left and right of the canvas
    pub margin: u32,
    /// Maximum height of a rectangular (linear) symbol, in pixels
    pub rectangular_height_cap: u32,
    /// The canvas width at which text is drawn at its base size (before clamping)
    pub reference_width: u32,
    /// Lower bound of the width-derived font scale factor
    pub min_scale: f32,
    /// Upper bound of the width-derived font scale factor
    pub max_scale: f32,
    /// How much the font size shrinks per step while fitting text
    pub shrink_step: Pt,
    /// The smallest font size text may be shrunk to
    pub min_font_size: Pt,
    /// Extra pixels between the symbol and text placed below it
    pub below_gutter: i32,
    pub background: Colour,
    pub foreground: Colour,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            margin: 10,
            rectangular_height_cap: 200,
            reference_width: 200,
            min_scale: 1.1,
            max_scale: 2.0,
            shrink_step: Pt(0.1),
            min_font_size: Pt(1.0),
            below_gutter: 5,
            background: colours::WHITE,
            foreground: colours::BLACK,
        }
    }
}

impl LayoutConfig {
    /// Check that the configuration can drive a layout: the shrink loop needs a
    /// step of at least [MIN_SHRINK_STEP] and a positive floor, the scale bounds
    /// must be ordered, and fitting may take at most [MAX_SHRINK_STEPS] steps
    pub fn validate(&self) -> Result<(), LabelError> {
        if !(self.shrink_step.0 >= MIN_SHRINK_STEP.0) {
            return Err(LabelError::InvalidConfig(format!(
                "shrink step must be at least {MIN_SHRINK_STEP}pt, got {}pt",
                self.shrink_step
            )));
        }
        if !(self.min_font_size.0 > 0.0) {
            return Err(LabelError::InvalidConfig(format!(
                "minimum font size must be positive, got {}pt",
                self.min_font_size
            )));
        }
        if !(self.min_scale > 0.0 && self.min_scale <= self.max_scale) {
            return Err(LabelError::InvalidConfig(format!(
                "font scale bounds must satisfy 0 < min <= max, got {}..{}",
                self.min_scale, self.max_scale
            )));
        }
        let largest = SizeClass::Large.base_size().0 * self.max_scale;
        if !(largest / self.shrink_step.0 <= MAX_SHRINK_STEPS) {
            return Err(LabelError::InvalidConfig(format!(
                "fitting {largest}pt text in {}pt steps takes more than {MAX_SHRINK_STEPS} steps",
                self.shrink_step
            )));
        }
        Ok(())
    }

    /// Total horizontal margin (both sides)
    pub(crate) fn horizontal_margins(&self) -> i32 {
        2 * self.margin as i32
    }
}
