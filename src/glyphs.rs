//! Tiny 5x7 bitmap font for marker labels
//!
//! Labels are sequence numbers, so only digits are defined. Any other
//! character renders as a hollow box.

use image::{Rgb, RgbImage};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;

/// Horizontal distance between the left edges of two consecutive glyphs.
pub const ADVANCE: u32 = GLYPH_WIDTH + 1;

// Each row uses the low five bits, most significant bit is the leftmost pixel
fn pattern(ch: char) -> [u8; 7] {
    match ch {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b01110, 0b10001, 0b00001, 0b00110, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b01110, 0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b10000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00001, 0b01110],
        ' ' => [0; 7],
        _ => [0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111],
    }
}

/// Draws `text` with its top-left corner at (`x`, `y`).
///
/// Pixels falling outside the image are skipped.
pub fn draw_text(img: &mut RgbImage, x: i64, y: i64, text: &str, color: Rgb<u8>) {
    let (width, height) = img.dimensions();

    for (i, ch) in text.chars().enumerate() {
        let origin_x = x + i as i64 * i64::from(ADVANCE);

        for (row, &bits) in pattern(ch).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1u8 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }

                let px = origin_x + i64::from(col);
                let py = y + row as i64;
                if px >= 0 && py >= 0 && px < i64::from(width) && py < i64::from(height) {
                    img.put_pixel(px as u32, py as u32, color);
                }
            }
        }
    }
}
