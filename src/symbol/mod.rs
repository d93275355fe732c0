//! Machine-readable symbols: the encoder seam and the built-in encoders.
//!
//! A [SymbolBitmap] holds one boolean per module (bar or cell). Linear symbols
//! are a single row of modules that gets stretched vertically when scaled;
//! matrix symbols are square grids.

mod code128;
mod qr;

use crate::SymbolFamily;
use thiserror::Error;

pub use code128::encode_code128;
pub use qr::encode_qr;

/// Errors raised by a [SymbolEncoder]
#[derive(Error, Debug)]
pub enum SymbolError {
    /// The data contains something the symbology cannot represent
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// The requested box is smaller than one pixel per module
    #[error("can not scale a {module_width}x{module_height} symbol into {width}x{height} pixels")]
    TooSmall {
        module_width: u32,
        module_height: u32,
        width: u32,
        height: u32,
    },

    #[error(transparent)]
    /// [qrcode] could not build a matrix for the data
    Qr(#[from] qrcode::types::QrError),
}

/// A grid of dark/light modules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolBitmap {
    family: SymbolFamily,
    width: u32,
    height: u32,
    modules: Vec<bool>,
}

impl SymbolBitmap {
    /// Build a bitmap from row-major modules, `true` being dark. Missing modules are
    /// treated as light.
    pub fn new(family: SymbolFamily, width: u32, height: u32, mut modules: Vec<bool>) -> SymbolBitmap {
        modules.resize(width as usize * height as usize, false);
        SymbolBitmap {
            family,
            width,
            height,
            modules,
        }
    }

    /// A single row of bars and spaces
    pub fn linear(modules: Vec<bool>) -> SymbolBitmap {
        let width = modules.len() as u32;
        SymbolBitmap::new(SymbolFamily::Rectangular, width, 1, modules)
    }

    pub fn family(&self) -> SymbolFamily {
        self.family
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.modules[(y * self.width + x) as usize]
    }
}

/// Turns data into a symbol and resizes it to the pixel box the layout reserved
pub trait SymbolEncoder {
    /// Encode `data` using the symbology for `family`
    fn encode(&self, data: &str, family: SymbolFamily) -> Result<SymbolBitmap, SymbolError>;

    /// Resize a symbol to exactly `width` × `height` pixels
    fn scale(&self, bitmap: &SymbolBitmap, width: u32, height: u32) -> Result<SymbolBitmap, SymbolError> {
        scale(bitmap, width, height)
    }
}

/// Code 128 for rectangular symbols and QR (error correction level M) for square
/// ones
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinEncoder;

impl SymbolEncoder for BuiltinEncoder {
    fn encode(&self, data: &str, family: SymbolFamily) -> Result<SymbolBitmap, SymbolError> {
        match family {
            SymbolFamily::Rectangular => encode_code128(data),
            SymbolFamily::Square => encode_qr(data),
        }
    }
}

/// Scale a symbol by the largest whole number of pixels per module that fits,
/// centering it in the `width` × `height` box. Linear symbols only scale
/// horizontally; their single row is repeated for the full height.
pub fn scale(bitmap: &SymbolBitmap, width: u32, height: u32) -> Result<SymbolBitmap, SymbolError> {
    let too_small = || SymbolError::TooSmall {
        module_width: bitmap.width,
        module_height: bitmap.height,
        width,
        height,
    };
    if bitmap.width == 0 || bitmap.height == 0 || height == 0 {
        return Err(too_small());
    }

    let (factor_x, factor_y) = match bitmap.family {
        SymbolFamily::Rectangular => (width / bitmap.width, 0),
        SymbolFamily::Square => {
            let factor = (width / bitmap.width).min(height / bitmap.height);
            (factor, factor)
        }
    };
    if factor_x == 0 || (bitmap.family == SymbolFamily::Square && factor_y == 0) {
        return Err(too_small());
    }

    let offset_x = (width - bitmap.width * factor_x) / 2;
    let offset_y = match bitmap.family {
        SymbolFamily::Rectangular => 0,
        SymbolFamily::Square => (height - bitmap.height * factor_y) / 2,
    };

    let mut modules = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        let source_y = match bitmap.family {
            SymbolFamily::Rectangular => Some(0),
            SymbolFamily::Square => (y >= offset_y)
                .then(|| (y - offset_y) / factor_y)
                .filter(|&sy| sy < bitmap.height),
        };
        for x in 0..width {
            let source_x = (x >= offset_x)
                .then(|| (x - offset_x) / factor_x)
                .filter(|&sx| sx < bitmap.width);
            let dark = match (source_x, source_y) {
                (Some(sx), Some(sy)) => bitmap.is_dark(sx, sy),
                _ => false,
            };
            modules.push(dark);
        }
    }

    Ok(SymbolBitmap::new(bitmap.family, width, height, modules))
}
