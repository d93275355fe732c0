//! The layout engine: sizing the symbol, fitting text and composing the canvas.
//!
//! A label is laid out in a single forward pass:
//!
//! - [`symbol_size`](crate::layout::symbol_size) decides the pixel footprint of the
//!   symbol, after [`reserve_text_height`](crate::layout::reserve_text_height) has
//!   set aside room for text when the symbol is square
//! - [`TextFitter`](crate::layout::TextFitter) shrinks each line of text until it
//!   fits between the margins
//! - [`LabelComposer`](crate::layout::LabelComposer) paints the centered symbol and
//!   then each line of text above or below it
//!
//! # Example
//!
//! ```
//! use label_gen::layout::LabelComposer;
//! use label_gen::{BuiltinEncoder, LayoutConfig, LayoutRequest, SizeClass, SymbolFamily};
//! use label_gen::{TextSpec, TtfRasterizer, Mm};
//!
//! let font = TtfRasterizer::embedded().expect("can load font");
//! let config = LayoutConfig::default();
//! let composer = LabelComposer::new(&BuiltinEncoder, &font, &config);
//!
//! let request = LayoutRequest::new("1234567890", SymbolFamily::Rectangular, Mm(50.0), Mm(30.0), 300)
//!     .with_text(TextSpec::above("Aisle 7", SizeClass::Medium));
//!
//! let label = composer.compose(&request).expect("label fits");
//! assert_eq!(label.symbol.width, 570);
//! ```

mod compose;
mod sizing;
mod text;

pub use compose::*;
pub use sizing::*;
pub use text::*;
