#![allow(dead_code)]

use tamalr_core::hal::{CpuState, ExecMode, Hal, LogLevel, TamaCore, TimeDaemon, U12};
use tamalr_core::inputs::{Button, ButtonState, JoypadButton};
use tamalr_core::{Host, Tamalr};

#[derive(Copy, Clone, Debug)]
pub enum Event {
    Frequency(u32),
    Play(bool),
    Pixel(u8, u8, bool),
    Icon(u8, bool),
    Log(LogLevel),
    /// Calls the log hook without asking whether the level is enabled.
    UncheckedLog(LogLevel),
}

/// A core whose tick counter advances by a repeating pattern and which fires
/// scripted hook calls once its counter reaches their tick.
pub struct FakeCore {
    pub state: CpuState,
    pub ticks_per_step: Vec<u32>,
    pub script: Vec<(u32, Event)>,
    next_event: usize,

    pub accept_program: bool,
    pub program: Vec<U12>,
    pub framerate: u32,
    pub steps: u64,
    pub refreshes: u32,
    pub resets: u32,
    pub released: bool,
    pub buttons: Vec<(Button, ButtonState)>,
    pub exec_modes: Vec<ExecMode>,
}

impl FakeCore {
    pub fn new(ticks_per_step: Vec<u32>) -> Self {
        Self {
            state: CpuState::default(),
            ticks_per_step,
            script: Vec::new(),
            next_event: 0,
            accept_program: true,
            program: Vec::new(),
            framerate: 0,
            steps: 0,
            refreshes: 0,
            resets: 0,
            released: false,
            buttons: Vec::new(),
            exec_modes: Vec::new(),
        }
    }

    pub fn with_script(mut self, mut script: Vec<(u32, Event)>) -> Self {
        script.sort_by_key(|(tick, _)| *tick);
        self.script = script;
        self
    }
}

impl TamaCore for FakeCore {
    fn init(&mut self, program: &[U12], framerate: u32) -> bool {
        self.program = program.to_vec();
        self.framerate = framerate;
        self.accept_program
    }

    fn release(&mut self) {
        self.released = true;
    }

    fn reset(&mut self) {
        self.resets += 1;
    }

    fn set_exec_mode(&mut self, mode: ExecMode) {
        self.exec_modes.push(mode);
    }

    fn step(&mut self, hal: &mut dyn Hal) {
        let advance = self.ticks_per_step[self.steps as usize % self.ticks_per_step.len()];
        self.state.tick_counter = self.state.tick_counter.wrapping_add(advance);
        self.steps += 1;

        let now = self.state.tick_counter;
        while let Some(&(tick, event)) = self.script.get(self.next_event) {
            if tick > now {
                break;
            }
            match event {
                Event::Frequency(freq) => hal.set_frequency(freq, now),
                Event::Play(en) => hal.play_frequency(en, now),
                Event::Pixel(x, y, val) => hal.set_lcd_matrix(x, y, val),
                Event::Icon(icon, val) => hal.set_lcd_icon(icon, val),
                Event::Log(level) => {
                    if hal.is_log_enabled(level) {
                        hal.log(level, format_args!("scripted message at tick {}", now));
                    }
                }
                Event::UncheckedLog(level) => hal.log(level, format_args!("unchecked message at tick {}", now)),
            }
            self.next_event += 1;
        }
    }

    fn set_button(&mut self, button: Button, state: ButtonState) {
        self.buttons.push((button, state));
    }

    fn refresh_hw(&mut self, _hal: &mut dyn Hal) {
        self.refreshes += 1;
    }

    fn state(&self) -> &CpuState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }
}

pub struct FixedClock(pub u64);

impl TimeDaemon for FixedClock {
    fn now_us(&self) -> u64 {
        self.0
    }
}

pub struct VideoFrame {
    pub pixels: Vec<u16>,
    pub width: usize,
    pub height: usize,
    pub pitch: usize,
}

impl VideoFrame {
    pub fn at(&self, x: usize, y: usize) -> u16 {
        self.pixels[y * self.width + x]
    }
}

#[derive(Default)]
pub struct RecordingHost {
    pub pressed: Vec<JoypadButton>,
    pub polls: u32,
    pub audio: Vec<Vec<i16>>,
    pub video: Vec<VideoFrame>,
}

impl Host for RecordingHost {
    fn poll_input(&mut self) {
        self.polls += 1;
    }

    fn joypad_pressed(&mut self, button: JoypadButton) -> bool {
        self.pressed.contains(&button)
    }

    fn upload_audio(&mut self, samples: &[i16]) {
        self.audio.push(samples.to_vec());
    }

    fn upload_video(&mut self, frame: &[u16], width: usize, height: usize, pitch: usize) {
        self.video.push(VideoFrame { pixels: frame.to_vec(), width, height, pitch });
    }
}

/// A loaded emulator around `core`.
pub fn loaded(core: FakeCore) -> Tamalr<FakeCore, FixedClock> {
    let mut tamalr = Tamalr::init(core, FixedClock(0));
    tamalr.load_game(&[0x01, 0x23, 0x04, 0x56]).expect("fake ROM loads");
    tamalr
}
