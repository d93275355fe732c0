use image::Rgba;

/// A colour, expressed in RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// RGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// Grey colour; g ranges from 0.0 (black) to 1.0 (white)
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// The opaque canvas pixel for this colour
    pub fn to_rgba(self) -> Rgba<u8> {
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        match self {
            Colour::RGB { r, g, b } => Rgba([channel(r), channel(g), channel(b), 255]),
            Colour::Grey { g } => {
                let g = channel(g);
                Rgba([g, g, g, 255])
            }
        }
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_opaque_pixels() {
        assert_eq!(colours::BLACK.to_rgba(), Rgba([0, 0, 0, 255]));
        assert_eq!(colours::WHITE.to_rgba(), Rgba([255, 255, 255, 255]));
        assert_eq!(Colour::new_rgb_bytes(10, 20, 30).to_rgba(), Rgba([10, 20, 30, 255]));
        assert_eq!(Colour::new_rgb(2.0, -1.0, 0.5).to_rgba(), Rgba([255, 0, 128, 255]));
    }
}
