//! What the frontend provides to, and learns from, the core each frame.

use crate::inputs::JoypadButton;
use crate::video::{SCREEN_SIZE, VIDEO_MAX_SCALE};

/// Edge of the square frame at the largest scale, the size a frontend
/// should allocate for.
pub const MAX_FRAME_EDGE: usize = SCREEN_SIZE * VIDEO_MAX_SCALE;

/// Per-frame callbacks into the frontend's run loop.
pub trait Host {
    fn poll_input(&mut self);
    /// State of a digital button on the first port's joypad.
    fn joypad_pressed(&mut self, button: JoypadButton) -> bool;
    /// Interleaved stereo `i16` samples; `samples.len() / 2` frames.
    fn upload_audio(&mut self, samples: &[i16]);
    /// RGB565, row-major. `pitch` is in bytes.
    fn upload_video(&mut self, frame: &[u16], width: usize, height: usize, pitch: usize);
}

/// Memory regions a frontend may ask for (cheat search, achievements).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MemoryId {
    SaveRam,
    Rtc,
    SystemRam,
    VideoRam,
}
