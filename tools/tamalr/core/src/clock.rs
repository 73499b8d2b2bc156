//! Frame timing derived from the emulated core's 32.768kHz tick counter.
//!
//! The core never resets its counter, so a frame ends when the counter taken
//! modulo [`TICKS_PER_FRAME`] stops increasing.

pub const TICKS_PER_SECOND: u32 = 32768;
pub const FRAMERATE: u32 = 60;
pub const TICKS_PER_FRAME: u32 = TICKS_PER_SECOND / FRAMERATE;

/// Position of a raw tick counter inside the current frame.
#[inline(always)]
pub const fn frame_tick(tick_counter: u32) -> u32 {
    tick_counter % TICKS_PER_FRAME
}

/// True once the in-frame position stops increasing between two steps.
#[inline(always)]
pub const fn crossed_frame_boundary(previous: u32, current: u32) -> bool {
    current <= previous
}

/// Last in-frame tick position the driver observed. Persists across frames.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameClock {
    last: u32,
}

impl FrameClock {
    pub fn last(&self) -> u32 {
        self.last
    }

    /// Records the counter after a step, returns true if that step ended the frame.
    pub fn observe(&mut self, tick_counter: u32) -> bool {
        let previous = self.last;
        self.last = frame_tick(tick_counter);
        crossed_frame_boundary(previous, self.last)
    }

    /// Adopts a counter without ending a frame, e.g. after loading a state.
    pub fn resync(&mut self, tick_counter: u32) {
        self.last = frame_tick(tick_counter);
    }
}
