//! Layout and text fitting for thermal printer labels.
//!
//! A label is a machine-readable symbol (a Code 128 barcode or a QR code)
//! centered on a canvas sized for the printer's resolution, with lines of
//! human-readable text above or below it. Text is shrunk until it fits between
//! the margins, and the finished canvas is exported as a PNG and as a ZPL or EPL2
//! command stream.
//!
//! ```
//! use label_gen::{generate_label, labelsize, LayoutRequest, SizeClass, SymbolFamily, TextSpec, Mm};
//!
//! let request = LayoutRequest::new("1234567890", SymbolFamily::Rectangular, Mm(0.0), Mm(0.0), 300)
//!     .with_size(labelsize::MM_50X30)
//!     .with_text(TextSpec::above("Aisle 7, Bay 3", SizeClass::Medium));
//!
//! let output = generate_label(&request).expect("label generates");
//! assert!(!output.png.is_empty());
//! ```

mod canvas;
pub use canvas::*;

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod export;
pub use export::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

pub mod labelsize;

pub mod layout;


mod pipeline;
pub use pipeline::*;

mod rect;
pub use rect::*;

mod request;
pub use request::*;

pub mod symbol;
pub use symbol::{BuiltinEncoder, SymbolBitmap, SymbolEncoder, SymbolError};

mod units;
pub use units::*;

pub mod epl;

pub mod zpl;
pub use zpl::ZplEncoding;

/// Lay out and export a label with the built-in Code 128 / QR encoder, the
/// embedded font, and PNG + compressed ZPL output.
pub fn generate_label(request: &LayoutRequest) -> Result<LabelOutput, LabelError> {
    Resolution::try_from(request.dpi)?;

    let font = TtfRasterizer::embedded()?;
    let exporter = LabelExporter::default();
    LabelPipeline::new(&BuiltinEncoder, &font, &exporter).generate(request)
}
