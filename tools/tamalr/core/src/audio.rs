//! Buzzer synthesis.
//!
//! The core only reports frequency changes, so a frame's samples are written
//! lazily: whenever the frequency changes, everything between the last written
//! sample and the sample matching the current tick is rendered with the old
//! frequency. The frame driver renders the remainder at the end of the frame.

use core::f64::consts::PI;
use crate::clock::{frame_tick, FRAMERATE, TICKS_PER_FRAME};

pub const AUDIO_SAMPLE_RATE: u32 = 44100;
pub const AUDIO_PERIOD: f64 = 1.0 / AUDIO_SAMPLE_RATE as f64;

/// Stereo frames per video frame. The buffer holds twice as many `i16`s.
pub const SAMPLES_PER_FRAME: usize = (AUDIO_SAMPLE_RATE / FRAMERATE) as usize;

pub const AUDIO_VOLUME: i16 = 0x1FFF;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Waveform {
    #[default]
    Square,
    Sine,
}

impl Waveform {
    /// Sample `t` of a tone. `freq` is in tenths of a hertz, as the core reports it.
    pub fn sample(self, freq: u32, t: u32) -> i16 {
        if freq == 0 {
            return 0;
        }

        let hz = freq as f64 / 10.0;
        let wave = (2.0 * PI * hz * t as f64 * AUDIO_PERIOD).sin();

        match self {
            // unipolar: silent on the low half
            Waveform::Square => {
                if wave > 0.0 {
                    AUDIO_VOLUME
                } else {
                    0
                }
            }
            Waveform::Sine => (wave * AUDIO_VOLUME as f64) as i16,
        }
    }
}

/// Sample index matching a tick counter's position inside the frame.
pub fn sample_index(tick_counter: u32) -> usize {
    (SAMPLES_PER_FRAME as f32 * frame_tick(tick_counter) as f32 / TICKS_PER_FRAME as f32) as usize
}

#[derive(Debug)]
pub struct Synth {
    waveform: Waveform,
    frequency: u32,
    playing: bool,

    /// Interleaved left/right, always equal.
    samples: Box<[i16; SAMPLES_PER_FRAME * 2]>,
    sample_pos: usize,
    phase: u32,
}

impl Default for Synth {
    fn default() -> Self {
        Self::new(Waveform::default())
    }
}

impl Synth {
    pub fn new(waveform: Waveform) -> Self {
        Self {
            waveform,
            frequency: 0,
            playing: false,
            samples: Box::new([0; SAMPLES_PER_FRAME * 2]),
            sample_pos: 0,
            phase: 0,
        }
    }

    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    pub fn set_waveform(&mut self, waveform: Waveform) {
        self.waveform = waveform;
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn sample_pos(&self) -> usize {
        self.sample_pos
    }

    pub fn set_frequency(&mut self, freq: u32, tick_counter: u32) {
        if freq == self.frequency {
            return;
        }

        // never rewind over samples already rendered this frame
        let target = sample_index(tick_counter).max(self.sample_pos);
        self.render_until(target);

        self.frequency = freq;
        self.phase = 0;
        self.sample_pos = target;
    }

    pub fn play_frequency(&mut self, en: bool, tick_counter: u32) {
        if !en {
            self.set_frequency(0, tick_counter);
        }
        self.playing = en;
    }

    /// Renders the rest of the frame, hands the buffer to `upload`, then
    /// starts a fresh frame.
    pub fn end_frame<F: FnOnce(&[i16])>(&mut self, upload: F) {
        self.render_until(SAMPLES_PER_FRAME);
        upload(&self.samples[..]);
        self.clear();
    }

    pub fn clear(&mut self) {
        self.samples.fill(0);
        self.sample_pos = 0;
        self.phase = 0;
    }

    fn render_until(&mut self, end: usize) {
        let end = end.min(SAMPLES_PER_FRAME);
        for i in self.sample_pos..end {
            let sample = self.waveform.sample(self.frequency, self.phase);
            self.samples[2 * i] = sample;
            self.samples[2 * i + 1] = sample;
            self.phase = self.phase.wrapping_add(1);
        }
        self.sample_pos = self.sample_pos.max(end);
    }
}
