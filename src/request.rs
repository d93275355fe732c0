use crate::labelsize::LabelSize;
use crate::units::{Mm, Pt, Resolution};
use crate::LabelError;
use std::fmt;
use std::str::FromStr;

/// The shape class of machine-readable symbol on a label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolFamily {
    /// Linear barcodes (Code 128), which stretch to the full label width
    Rectangular,
    /// 2D matrix codes (QR), which must stay square
    Square,
}

impl FromStr for SymbolFamily {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "RECTANGULAR" | "CODE128" => Ok(SymbolFamily::Rectangular),
            "SQUARE" | "QR" => Ok(SymbolFamily::Square),
            _ => Err(LabelError::InvalidSymbolFamily(s.to_string())),
        }
    }
}

impl fmt::Display for SymbolFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolFamily::Rectangular => write!(f, "RECTANGULAR"),
            SymbolFamily::Square => write!(f, "SQUARE"),
        }
    }
}

/// Where a line of text sits relative to the symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    Above,
    Below,
}

impl FromStr for TextAnchor {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ABOVE" => Ok(TextAnchor::Above),
            "BELOW" => Ok(TextAnchor::Below),
            _ => Err(LabelError::InvalidTextAnchor(s.to_string())),
        }
    }
}

/// Predefined text sizes, each mapping to a base point size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    /// The point size before it is scaled to the label width
    pub fn base_size(self) -> Pt {
        match self {
            SizeClass::Small => Pt(8.0),
            SizeClass::Medium => Pt(10.0),
            SizeClass::Large => Pt(12.0),
        }
    }
}

impl FromStr for SizeClass {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SMALL" => Ok(SizeClass::Small),
            "MEDIUM" => Ok(SizeClass::Medium),
            "LARGE" => Ok(SizeClass::Large),
            _ => Err(LabelError::InvalidSizeClass(s.to_string())),
        }
    }
}

/// One line of human-readable text on the label
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    pub text: String,
    pub anchor: TextAnchor,
    pub size: SizeClass,
}

impl TextSpec {
    /// A line of text at `anchor`
    pub fn new<S: Into<String>>(text: S, anchor: TextAnchor, size: SizeClass) -> TextSpec {
        TextSpec {
            text: text.into(),
            anchor,
            size,
        }
    }

    /// A line of text placed above the symbol
    pub fn above<S: Into<String>>(text: S, size: SizeClass) -> TextSpec {
        TextSpec::new(text, TextAnchor::Above, size)
    }

    /// A line of text placed below the symbol
    pub fn below<S: Into<String>>(text: S, size: SizeClass) -> TextSpec {
        TextSpec::new(text, TextAnchor::Below, size)
    }
}

/// Everything needed to lay out one label
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRequest {
    /// The data to encode in the symbol
    pub data: String,
    pub family: SymbolFamily,
    /// Physical label width
    pub width: Mm,
    /// Physical label height
    pub height: Mm,
    /// Printer resolution in dots per inch, see [crate::Resolution]
    pub dpi: u32,
    /// Text lines, drawn in order
    pub text: Vec<TextSpec>,
}

impl LayoutRequest {
    /// A request with no text lines; add them with [LayoutRequest::with_text]
    pub fn new<S: Into<String>>(
        data: S,
        family: SymbolFamily,
        width: Mm,
        height: Mm,
        dpi: u32,
    ) -> LayoutRequest {
        LayoutRequest {
            data: data.into(),
            family,
            width,
            height,
            dpi,
            text: Vec::default(),
        }
    }

    /// Build a request from loosely typed input, such as a form or a JSON body.
    /// The resolution is checked before the symbol family, so a request with
    /// both wrong reports the resolution.
    pub fn parse<S: Into<String>>(
        data: S,
        family: &str,
        width: Mm,
        height: Mm,
        dpi: u32,
    ) -> Result<LayoutRequest, LabelError> {
        Resolution::try_from(dpi)?;
        let family = family.parse()?;
        Ok(LayoutRequest::new(data, family, width, height, dpi))
    }

    /// Append a line of text
    pub fn with_text(mut self, spec: TextSpec) -> LayoutRequest {
        self.text.push(spec);
        self
    }

    /// Use the dimensions of a predefined label stock
    pub fn with_size(mut self, size: LabelSize) -> LayoutRequest {
        self.width = size.0;
        self.height = size.1;
        self
    }
}
