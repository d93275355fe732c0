//! Pre-defined sizes for common thermal label stock.
//!
//! All sizes are provided as (width, height). Use the
//! [`LabelOrientation`](crate::labelsize::LabelOrientation) trait to convert between
//! portrait and landscape.
//!
//! # Example
//!
//! ```
//! use label_gen::labelsize::{IN_4X6, MM_50X30, LabelOrientation};
//!
//! // a shipping label
//! let shipping = IN_4X6;
//!
//! // a small shelf label, fed long edge first
//! let shelf = MM_50X30.portrait();
//! assert!(shelf.0 < shelf.1);
//! ```

use crate::units::*;

/// Label dimensions as (width, height) in millimetres.
pub type LabelSize = (Mm, Mm);

// inch-based stock
pub const IN_4X6: LabelSize = (Mm(4.0 * MM_PER_INCH), Mm(6.0 * MM_PER_INCH));
pub const IN_4X3: LabelSize = (Mm(4.0 * MM_PER_INCH), Mm(3.0 * MM_PER_INCH));
pub const IN_4X2: LabelSize = (Mm(4.0 * MM_PER_INCH), Mm(2.0 * MM_PER_INCH));
pub const IN_2X1: LabelSize = (Mm(2.0 * MM_PER_INCH), Mm(1.0 * MM_PER_INCH));
pub const IN_2_25X1_25: LabelSize = (Mm(2.25 * MM_PER_INCH), Mm(1.25 * MM_PER_INCH));

// metric stock
pub const MM_100X150: LabelSize = (Mm(100.0), Mm(150.0));
pub const MM_100X50: LabelSize = (Mm(100.0), Mm(50.0));
pub const MM_58X40: LabelSize = (Mm(58.0), Mm(40.0));
pub const MM_50X50: LabelSize = (Mm(50.0), Mm(50.0));
pub const MM_50X30: LabelSize = (Mm(50.0), Mm(30.0));

/// Convert label sizes between portrait and landscape orientations.
pub trait LabelOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl LabelOrientation for LabelSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> LabelSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}
