use log::warn;
use crate::hal::{ICON_NUM, LCD_HEIGHT, LCD_WIDTH};
use crate::icons::{self, ICON_SIZE};

pub const VIDEO_MAX_SCALE: usize = 8;

pub const BLACK: u16 = 0x0000;
pub const WHITE: u16 = 0xFFFF;

/// The output is square: a strip of icons, the dot matrix, another strip.
pub const SCREEN_SIZE: usize = LCD_WIDTH;

/// Rows above the dot matrix reserved for the top icon strip.
pub const MATRIX_TOP: usize = 8;

/// First row of the bottom icon strip.
pub const BOTTOM_ICONS_TOP: usize = MATRIX_TOP + LCD_HEIGHT;

pub const ICON_COLUMNS: usize = 4;

#[derive(Debug)]
pub struct Compositor {
    /// Raw pixel data written by the LCD driver
    matrix: [[bool; LCD_WIDTH]; LCD_HEIGHT],
    /// Which icons around the screen are lit
    icons: [bool; ICON_NUM],

    /// RGB565, sized for the largest scale
    screen: Box<[u16]>,
    scale: usize,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(VIDEO_MAX_SCALE)
    }
}

impl Compositor {
    pub fn new(scale: usize) -> Self {
        let mut compositor = Self {
            matrix: [[false; LCD_WIDTH]; LCD_HEIGHT],
            icons: [false; ICON_NUM],
            screen: vec![BLACK; (SCREEN_SIZE * VIDEO_MAX_SCALE).pow(2)].into_boxed_slice(),
            scale: VIDEO_MAX_SCALE,
        };
        compositor.set_scale(scale);
        compositor
    }

    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Returns false and keeps the current scale unless `scale` is at most
    /// [`VIDEO_MAX_SCALE`] and has icon artwork.
    pub fn set_scale(&mut self, scale: usize) -> bool {
        if scale > VIDEO_MAX_SCALE || icons::image(scale, 0).is_none() {
            warn!("ignoring unsupported video scale {}", scale);
            return false;
        }
        self.scale = scale;
        true
    }

    pub fn set_pixel(&mut self, x: u8, y: u8, val: bool) {
        let (x, y) = (x as usize, y as usize);
        if x < LCD_WIDTH && y < LCD_HEIGHT {
            self.matrix[y][x] = val;
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < LCD_WIDTH && y < LCD_HEIGHT && self.matrix[y][x]
    }

    pub fn set_icon(&mut self, icon: u8, val: bool) {
        if let Some(slot) = self.icons.get_mut(icon as usize) {
            *slot = val;
        }
    }

    pub fn icon(&self, icon: usize) -> bool {
        self.icons.get(icon).copied().unwrap_or(false)
    }

    pub fn width(&self) -> usize {
        SCREEN_SIZE * self.scale
    }

    pub fn height(&self) -> usize {
        SCREEN_SIZE * self.scale
    }

    /// Bytes per output row.
    pub fn pitch(&self) -> usize {
        self.width() * core::mem::size_of::<u16>()
    }

    /// The composed frame at the current scale.
    pub fn frame(&self) -> &[u16] {
        &self.screen[..self.width() * self.height()]
    }

    pub fn compose(&mut self) {
        self.draw_matrix();
        self.draw_icons();
    }

    fn draw_matrix(&mut self) {
        let scale = self.scale;
        let stride = self.width();

        for (y, row) in self.matrix.iter().enumerate() {
            for (x, &on) in row.iter().enumerate() {
                let color = if on { BLACK } else { WHITE };
                for sy in 0..scale {
                    let start = stride * (scale * (y + MATRIX_TOP) + sy) + scale * x;
                    self.screen[start..start + scale].fill(color);
                }
            }
        }
    }

    fn draw_icons(&mut self) {
        let scale = self.scale;
        let stride = self.width();
        let edge = ICON_SIZE * scale;

        for i in 0..ICON_NUM {
            let Some(image) = icons::image(scale, i) else {
                return;
            };

            let x = (i % ICON_COLUMNS) * ICON_SIZE * scale;
            let y = if i >= ICON_COLUMNS { BOTTOM_ICONS_TOP * scale } else { 0 };
            let base = stride * y + x;

            for h in 0..edge {
                let dst = &mut self.screen[base + h * stride..base + h * stride + edge];
                if self.icons[i] {
                    dst.copy_from_slice(&image[h * edge..(h + 1) * edge]);
                } else {
                    dst.fill(WHITE);
                }
            }
        }
    }
}
