//! Braille canvas for high-resolution terminal rendering
//! Each terminal cell contains a 2×4 grid of Braille dots
//! This gives us 2× horizontal and 4× vertical resolution

/// 5×7 bitmap glyphs for 0-9, one row per byte, bit 4 is the leftmost column
const DIGIT_GLYPHS: [[u8; 7]; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], // 1
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], // 2
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], // 3
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], // 5
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], // 7
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], // 9
];

/// Each glyph bit is drawn as a 2×2 block of dots
const GLYPH_SCALE: usize = 2;

/// Width of a drawn digit in pixels, including one blank column of spacing
pub const DIGIT_PIXEL_WIDTH: usize = 5 * GLYPH_SCALE + 2;

/// Height of a drawn digit in pixels (fits in 4 cell rows)
pub const DIGIT_PIXEL_HEIGHT: usize = 7 * GLYPH_SCALE;

pub struct BrailleCanvas {
    width: usize,  // Width in terminal cells
    height: usize, // Height in terminal cells
    dots: Vec<Vec<u8>>, // 2D array of dot patterns (0-255)
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            dots: vec![vec![0; width]; height],
        }
    }

    /// Set a dot at pixel coordinates
    /// pixel_x: 0 to (width * 2 - 1)
    /// pixel_y: 0 to (height * 4 - 1)
    pub fn set_pixel(&mut self, pixel_x: usize, pixel_y: usize) {
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;

        if cell_x >= self.width || cell_y >= self.height {
            return;
        }

        let dot_x = pixel_x % 2; // 0 or 1 (left or right column)
        let dot_y = pixel_y % 4; // 0, 1, 2, or 3 (row within cell)

        // Braille dot numbering:
        // 1 4
        // 2 5
        // 3 6
        // 7 8
        let dot_index = match (dot_x, dot_y) {
            (0, 0) => 0, // dot 1
            (0, 1) => 1, // dot 2
            (0, 2) => 2, // dot 3
            (0, 3) => 6, // dot 7
            (1, 0) => 3, // dot 4
            (1, 1) => 4, // dot 5
            (1, 2) => 5, // dot 6
            (1, 3) => 7, // dot 8
            _ => unreachable!(),
        };

        self.dots[cell_y][cell_x] |= 1 << dot_index;
    }

    /// Fill a rectangle with pixels
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize) {
        for py in y..(y + height) {
            for px in x..(x + width) {
                self.set_pixel(px, py);
            }
        }
    }

    /// Draw a single digit 0-9 with its top-left corner at (x, y)
    pub fn draw_digit(&mut self, digit: u8, x: usize, y: usize) {
        let Some(glyph) = DIGIT_GLYPHS.get(digit as usize) else {
            return;
        };

        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..5 {
                if bits & (0x10 >> col) != 0 {
                    self.fill_rect(
                        x + col * GLYPH_SCALE,
                        y + row * GLYPH_SCALE,
                        GLYPH_SCALE,
                        GLYPH_SCALE,
                    );
                }
            }
        }
    }

    /// Draw a whole number left to right starting at (x, y)
    pub fn draw_number(&mut self, value: u32, x: usize, y: usize) {
        for (i, digit) in value.to_string().bytes().enumerate() {
            self.draw_digit(digit - b'0', x + i * DIGIT_PIXEL_WIDTH, y);
        }
    }

    /// Convert dot pattern to Braille character
    /// Braille Unicode: U+2800 + dot pattern
    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        if cell_x >= self.width || cell_y >= self.height {
            return ' ';
        }

        let pattern = self.dots[cell_y][cell_x];
        char::from_u32(0x2800 + pattern as u32).unwrap_or(' ')
    }

    /// One rendered row of cells
    pub fn row(&self, cell_y: usize) -> String {
        (0..self.width).map(|x| self.to_char(x, cell_y)).collect()
    }

    /// Get width in pixels (2 per cell)
    pub fn pixel_width(&self) -> usize {
        self.width * 2
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

/// Pixel width of `value` when drawn with `draw_number`
pub fn number_pixel_width(value: u32) -> usize {
    value.to_string().len() * DIGIT_PIXEL_WIDTH
}
