use crate::canvas::Canvas;
use crate::LabelError;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ColorType, ImageEncoder};

/// Encode the canvas as an 8-bit RGBA PNG
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, LabelError> {
    let mut png = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut png, CompressionType::Default, FilterType::Sub);
    encoder.write_image(
        canvas.image().as_raw(),
        canvas.width(),
        canvas.height(),
        ColorType::Rgba8,
    )?;
    log::debug!(
        "encoded {}x{}px canvas as {} bytes of PNG",
        canvas.width(),
        canvas.height(),
        png.len()
    );
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;

    #[test]
    fn png_round_trips_pixels() {
        let mut canvas = Canvas::new(12, 5, colours::WHITE);
        canvas.paint_span(0, 6, 2, colours::BLACK);

        let png = encode_png(&canvas).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (12, 5));
        assert_eq!(&decoded, canvas.image());
    }
}
