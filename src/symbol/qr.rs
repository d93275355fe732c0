use super::{SymbolBitmap, SymbolError};
use crate::SymbolFamily;
use qrcode::{Color, EcLevel, QrCode};

/// Encode data as a QR code at error correction level M, picking the smallest
/// version that holds it. The quiet zone is not included.
pub fn encode_qr(data: &str) -> Result<SymbolBitmap, SymbolError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)?;
    let side = code.width() as u32;
    let modules = code.to_colors().into_iter().map(|c| c == Color::Dark).collect();
    Ok(SymbolBitmap::new(SymbolFamily::Square, side, side, modules))
}
