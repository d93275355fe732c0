use crate::canvas::Canvas;
use crate::epl;
use crate::image::encode_png;
use crate::zpl::{self, ZplEncoding};
use crate::LabelError;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Turns a finished canvas into bytes that can be stored or sent to a printer
pub trait Exporter {
    /// An image file of the canvas, for previews and archiving
    fn to_raster_container(&self, canvas: &Canvas) -> Result<Vec<u8>, LabelError>;

    /// A command stream that prints the canvas on a label printer
    fn to_printer_commands(&self, canvas: &Canvas) -> Result<Vec<u8>, LabelError>;
}

/// The command language spoken by the target printer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrinterLanguage {
    /// Zebra Programming Language, as a `^GF` graphic field
    Zpl(ZplEncoding),
    /// Eltron Programming Language 2, as a `GW` graphic
    Epl2,
}

impl Default for PrinterLanguage {
    fn default() -> Self {
        PrinterLanguage::Zpl(ZplEncoding::CompressedAscii)
    }
}

/// Exports PNG images and either ZPL or EPL2 command streams
#[derive(Debug, Default, Clone, Copy)]
pub struct LabelExporter {
    pub language: PrinterLanguage,
}

impl LabelExporter {
    pub fn new(language: PrinterLanguage) -> LabelExporter {
        LabelExporter { language }
    }
}

impl Exporter for LabelExporter {
    fn to_raster_container(&self, canvas: &Canvas) -> Result<Vec<u8>, LabelError> {
        encode_png(canvas)
    }

    fn to_printer_commands(&self, canvas: &Canvas) -> Result<Vec<u8>, LabelError> {
        let commands = match self.language {
            PrinterLanguage::Zpl(encoding) => zpl::graphic_field(canvas, encoding).into_bytes(),
            PrinterLanguage::Epl2 => epl::graphic(canvas),
        };
        log::debug!("{:?} command stream is {} bytes", self.language, commands.len());
        Ok(commands)
    }
}

/// The exported forms of one label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelOutput {
    /// The raster container, a PNG with the default exporter
    pub png: Vec<u8>,
    /// The printer command stream
    pub commands: Vec<u8>,
}

impl LabelOutput {
    /// The raster container, base64 encoded for embedding in JSON or HTML
    pub fn png_base64(&self) -> String {
        STANDARD.encode(&self.png)
    }

    /// The command stream as text. EPL2 graphics carry raw binary, which is
    /// replaced lossily.
    pub fn commands_text(&self) -> String {
        String::from_utf8_lossy(&self.commands).into_owned()
    }
}

/// Pack the canvas into rows of 1-bit pixels, most significant bit first, with
/// dark pixels set. Returns the number of bytes per row and the packed rows.
pub(crate) fn pack_rows(canvas: &Canvas) -> (usize, Vec<u8>) {
    let bytes_per_row = canvas.width().div_ceil(8) as usize;
    let mut rows = vec![0u8; bytes_per_row * canvas.height() as usize];
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            if canvas.is_dark(x, y) {
                let i = y as usize * bytes_per_row + x as usize / 8;
                rows[i] |= 1 << (7 - x % 8);
            }
        }
    }
    (bytes_per_row, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;

    #[test]
    fn rows_are_padded_to_whole_bytes() {
        let mut canvas = Canvas::new(10, 2, colours::WHITE);
        canvas.paint(0, 0, colours::BLACK);
        canvas.paint(9, 1, colours::BLACK);
        let (bytes_per_row, rows) = pack_rows(&canvas);
        assert_eq!(bytes_per_row, 2);
        assert_eq!(rows, vec![0b1000_0000, 0, 0, 0b0100_0000]);
    }

    #[test]
    fn default_exporter_speaks_compressed_zpl() {
        let exporter = LabelExporter::default();
        assert_eq!(exporter.language, PrinterLanguage::Zpl(ZplEncoding::CompressedAscii));

        let canvas = Canvas::new(16, 4, colours::WHITE);
        let commands = exporter.to_printer_commands(&canvas).unwrap();
        let text = String::from_utf8(commands).unwrap();
        assert!(text.starts_with("^XA"));
        assert!(text.trim_end().ends_with("^XZ"));
    }

    #[test]
    fn epl_exporter_emits_a_gw_graphic() {
        let exporter = LabelExporter::new(PrinterLanguage::Epl2);
        let canvas = Canvas::new(16, 4, colours::WHITE);
        let commands = exporter.to_printer_commands(&canvas).unwrap();
        assert!(commands.starts_with(b"N\r\n"));
        assert!(commands.ends_with(b"P1\r\n"));
    }

    #[test]
    fn output_helpers_encode_for_transport() {
        let output = LabelOutput {
            png: vec![0x89, b'P', b'N', b'G'],
            commands: b"^XA^XZ".to_vec(),
        };
        assert_eq!(output.png_base64(), "iVBORw==");
        assert_eq!(output.commands_text(), "^XA^XZ");
    }
}
