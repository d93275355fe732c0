use crate::{symbol::SymbolError, Pt, SymbolFamily};
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum LabelError {
    /// The requested printer resolution is not one of [crate::Resolution::ALL]
    #[error("invalid dpi value: {dpi}. Supported dpi values are: {accepted:?}")]
    InvalidResolution { dpi: u32, accepted: Vec<u32> },

    /// The symbol family name was not recognised
    #[error("invalid symbol family: {0}. Supported families: RECTANGULAR (CODE128), SQUARE (QR)")]
    InvalidSymbolFamily(String),

    /// The text anchor name was not recognised
    #[error("invalid text position: {0}. Supported positions: ABOVE, BELOW")]
    InvalidTextAnchor(String),

    /// The text size class name was not recognised
    #[error("invalid text size: {0}. Supported sizes: SMALL, MEDIUM, LARGE")]
    InvalidSizeClass(String),

    /// The symbol encoder rejected the data, or could not scale the symbol
    #[error("failed to encode {family} symbol: {source}")]
    EncodingFailed {
        family: SymbolFamily,
        #[source]
        source: SymbolError,
    },

    /// A canvas or symbol dimension came out as zero or negative
    #[error("degenerate layout: {0}")]
    DegenerateLayout(String),

    /// The text is wider than the label even at the smallest allowed font size
    #[error("text {text:?} does not fit within {available}px even at {floor}pt")]
    TextUnfittable {
        text: String,
        available: i32,
        floor: Pt,
    },

    /// The layout configuration cannot drive a layout
    #[error("invalid layout configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    Font(#[from] owned_ttf_parser::FaceParsingError),

    /// The font parsed for measuring but its glyphs can not be rasterized
    #[error("font glyphs can not be rasterized")]
    UnsupportedFont,

    #[error(transparent)]
    /// [image] failed to encode the raster output
    Export(#[from] image::ImageError),
}
