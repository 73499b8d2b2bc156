//! Pre-rendered RGB565 artwork for the eight status icons around the LCD.
//!
//! Each supported scale gets its own table, built at compile time by
//! nearest-neighbour upscaling of the 8x8 glyphs below.

use crate::hal::ICON_NUM;
use crate::video::{BLACK, WHITE};

/// Logical edge length of one icon.
pub const ICON_SIZE: usize = 8;

/// One byte per row, MSB is the leftmost pixel.
const GLYPHS: [[u8; ICON_SIZE]; ICON_NUM] = [
    // food
    [0b0101_0010, 0b0101_0110, 0b0101_0110, 0b0111_0110, 0b0010_0010, 0b0010_0010, 0b0010_0010, 0b0000_0000],
    // lights
    [0b0011_1000, 0b0100_0100, 0b1000_0010, 0b1000_0010, 0b0100_0100, 0b0011_1000, 0b0011_1000, 0b0001_0000],
    // game
    [0b0011_1100, 0b0100_1010, 0b1001_0001, 0b1010_0101, 0b1000_1001, 0b0101_0010, 0b0011_1100, 0b0000_0000],
    // medicine
    [0b0000_0011, 0b0000_0110, 0b0001_1100, 0b0011_1000, 0b0111_0000, 0b0110_0000, 0b1100_0000, 0b1000_0000],
    // bathroom
    [0b0110_0000, 0b1111_0000, 0b0110_0000, 0b0111_1110, 0b0111_1111, 0b0011_1110, 0b0001_1100, 0b0000_0000],
    // status meter
    [0b0001_1000, 0b0111_1110, 0b0001_1000, 0b1101_1011, 0b1101_1011, 0b1000_0001, 0b0111_1110, 0b0000_0000],
    // discipline
    [0b0011_1100, 0b0100_0010, 0b1010_0101, 0b1000_0001, 0b1011_1101, 0b0100_0010, 0b0011_1100, 0b0000_0000],
    // attention
    [0b0001_1000, 0b0011_1100, 0b0011_1100, 0b0111_1110, 0b0111_1110, 0b1111_1111, 0b0001_1000, 0b0000_0000],
];

const fn render<const EDGE: usize, const LEN: usize>() -> [[u16; LEN]; ICON_NUM] {
    let scale = EDGE / ICON_SIZE;
    let mut images = [[WHITE; LEN]; ICON_NUM];

    let mut i = 0;
    while i < ICON_NUM {
        let mut y = 0;
        while y < EDGE {
            let row = GLYPHS[i][y / scale];
            let mut x = 0;
            while x < EDGE {
                if row & (0x80 >> (x / scale)) != 0 {
                    images[i][y * EDGE + x] = BLACK;
                }
                x += 1;
            }
            y += 1;
        }
        i += 1;
    }

    images
}

static IMAGES_8: [[u16; 8 * 8]; ICON_NUM] = render::<8, { 8 * 8 }>();
static IMAGES_16: [[u16; 16 * 16]; ICON_NUM] = render::<16, { 16 * 16 }>();
static IMAGES_32: [[u16; 32 * 32]; ICON_NUM] = render::<32, { 32 * 32 }>();
static IMAGES_64: [[u16; 64 * 64]; ICON_NUM] = render::<64, { 64 * 64 }>();

/// Icon `icon` rendered for `scale`, row-major with a stride of
/// `ICON_SIZE * scale`. None for scales without artwork.
pub fn image(scale: usize, icon: usize) -> Option<&'static [u16]> {
    if icon >= ICON_NUM {
        return None;
    }

    match scale {
        1 => Some(IMAGES_8[icon].as_slice()),
        2 => Some(IMAGES_16[icon].as_slice()),
        4 => Some(IMAGES_32[icon].as_slice()),
        8 => Some(IMAGES_64[icon].as_slice()),
        _ => None,
    }
}
