use crate::LabelError;
use derive_more::{Add, AddAssign, Display, From, Into, Mul, Sub};
use std::fmt;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Typographic points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Millimetres, the unit physical label stock is measured in
#[derive(
    Debug, Default, Clone, Copy, PartialEq, PartialOrd, Add, AddAssign, Sub, Mul, Display, From, Into,
)]
pub struct Mm(pub f64);

/// Inches, convertible into [Mm]
#[derive(
    Debug, Default, Clone, Copy, PartialEq, PartialOrd, Add, AddAssign, Sub, Mul, Display, From, Into,
)]
pub struct In(pub f64);

/// Typographic points (1/72 of an inch), the unit font sizes are expressed in
#[derive(
    Debug, Default, Clone, Copy, PartialEq, PartialOrd, Add, AddAssign, Sub, Mul, Display, From, Into,
)]
pub struct Pt(pub f32);

impl From<In> for Mm {
    fn from(value: In) -> Self {
        Mm(value.0 * MM_PER_INCH)
    }
}

impl Pt {
    /// The size of one em in device pixels at the given resolution
    pub fn pixels_per_em(self, dpi: u32) -> f32 {
        self.0 * dpi as f32 / POINTS_PER_INCH
    }
}

/// Convert a physical length into whole device pixels: `floor(mm * dpi / 25.4)`.
///
/// Zero or negative lengths produce a non-positive pixel count; it is up to the
/// caller to reject those.
pub fn to_pixels(mm: Mm, dpi: u32) -> i32 {
    (mm.0 * dpi as f64 / MM_PER_INCH).floor() as i32
}

/// The printer resolutions labels can be laid out for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    Dpi203,
    Dpi300,
    Dpi600,
}

impl Resolution {
    /// Every accepted resolution, lowest first
    pub const ALL: [Resolution; 3] = [Resolution::Dpi203, Resolution::Dpi300, Resolution::Dpi600];

    /// Dots per inch
    pub fn dpi(self) -> u32 {
        match self {
            Resolution::Dpi203 => 203,
            Resolution::Dpi300 => 300,
            Resolution::Dpi600 => 600,
        }
    }

    /// The accepted dots-per-inch values, for error reporting
    pub fn accepted() -> Vec<u32> {
        Self::ALL.iter().map(|r| r.dpi()).collect()
    }
}

impl TryFrom<u32> for Resolution {
    type Error = LabelError;

    fn try_from(dpi: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|r| r.dpi() == dpi)
            .ok_or_else(|| LabelError::InvalidResolution {
                dpi,
                accepted: Self::accepted(),
            })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}dpi", self.dpi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_inch_is_one_dpi_worth_of_pixels() {
        for resolution in Resolution::ALL {
            assert_eq!(to_pixels(Mm(25.4), resolution.dpi()), resolution.dpi() as i32);
        }
    }

    #[test]
    fn conversion_floors() {
        assert_eq!(to_pixels(Mm(50.8), 203), 406);
        assert_eq!(to_pixels(Mm(10.0), 100), 39);
        assert_eq!(to_pixels(Mm(50.0), 300), 590);
        assert_eq!(to_pixels(Mm(30.0), 300), 354);
    }

    #[test]
    fn non_positive_lengths_stay_non_positive() {
        assert_eq!(to_pixels(Mm(0.0), 300), 0);
        assert!(to_pixels(Mm(-3.0), 203) < 0);
    }

    #[test]
    fn inches_convert_to_millimetres() {
        let mm: Mm = In(2.0).into();
        assert!((mm.0 - 50.8).abs() < 1e-9);
        assert_eq!(to_pixels(In(1.0).into(), 600), 600);
    }

    #[test]
    fn points_scale_with_resolution() {
        assert!((Pt(72.0).pixels_per_em(300) - 300.0).abs() < 1e-4);
        assert!((Pt(12.0).pixels_per_em(600) - 100.0).abs() < 1e-4);
    }

    #[test]
    fn resolution_accepts_known_values() {
        assert_eq!(Resolution::try_from(203).ok(), Some(Resolution::Dpi203));
        assert_eq!(Resolution::try_from(300).ok(), Some(Resolution::Dpi300));
        assert_eq!(Resolution::try_from(600).ok(), Some(Resolution::Dpi600));
    }

    #[test]
    fn resolution_error_lists_accepted_values() {
        let err = Resolution::try_from(999).unwrap_err();
        assert!(matches!(err, LabelError::InvalidResolution { dpi: 999, .. }));
        let message = err.to_string();
        assert!(message.contains("invalid dpi value: 999"));
        assert!(message.contains("[203, 300, 600]"));
    }
}
