/// An axis-aligned rectangle on the canvas, in device pixels. The origin is the
/// top-left corner; `y` grows downwards.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// The x-coordinate of the left edge
    pub x: i32,
    /// The y-coordinate of the top edge
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> PixelRect {
        PixelRect {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle of the given size sitting at the origin
    pub fn sized(width: u32, height: u32) -> PixelRect {
        PixelRect::new(0, 0, width, height)
    }

    /// The top edge
    pub fn top(&self) -> i32 {
        self.y
    }

    /// The exclusive bottom edge, i.e. the first row below the rectangle
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    /// The exclusive right edge
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Move the rectangle so that it sits in the middle of a `width` × `height`
    /// area, rounding the offsets down
    pub fn centered_in(&self, width: u32, height: u32) -> PixelRect {
        let x = (width as i32 - self.width as i32).div_euclid(2);
        let y = (height as i32 - self.height as i32).div_euclid(2);
        PixelRect::new(x, y, self.width, self.height)
    }

    /// Whether the given pixel lies inside the rectangle
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}
