use core::fmt::{Arguments, Debug, Formatter};
use log::{debug, error, info, warn};
use crate::audio::Synth;
use crate::clock::{FrameClock, FRAMERATE};
use crate::emulator::PlayState::{Running, Unloaded};
use crate::error::{LoadError, StateError};
use crate::hal::{forward_log, ExecMode, Hal, LogLevel, TamaCore, TimeDaemon, Timestamp, U12, MEMORY_SIZE};
use crate::host::{Host, MemoryId};
use crate::inputs::{Button, ButtonState};
use crate::settings::Settings;
use crate::video::Compositor;
use crate::{rom, state};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlayState {
    Unloaded,
    Running,
}

/// Everything the core talks to through its hooks.
pub struct Peripherals<Clock: TimeDaemon> {
    pub synth: Synth,
    pub compositor: Compositor,
    pub clock: Clock,
}

impl <Clock: TimeDaemon> Peripherals<Clock> {
    pub fn new(clock: Clock, settings: &Settings) -> Self {
        Self {
            synth: Synth::new(settings.waveform),
            compositor: Compositor::new(settings.video_scale),
            clock,
        }
    }
}

impl <Clock: TimeDaemon> Hal for Peripherals<Clock> {
    fn halt(&mut self) {}

    fn is_log_enabled(&self, level: LogLevel) -> bool {
        level.is_enabled()
    }

    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        forward_log(level, args);
    }

    // pacing belongs to the frontend
    fn sleep_until(&mut self, _ts: Timestamp) {}

    fn get_timestamp(&self) -> Timestamp {
        self.clock.now_us() as Timestamp
    }

    fn update_screen(&mut self) {
        self.compositor.compose();
    }

    fn set_lcd_matrix(&mut self, x: u8, y: u8, val: bool) {
        self.compositor.set_pixel(x, y, val);
    }

    fn set_lcd_icon(&mut self, icon: u8, val: bool) {
        self.compositor.set_icon(icon, val);
    }

    fn set_frequency(&mut self, freq: u32, tick_counter: u32) {
        self.synth.set_frequency(freq, tick_counter);
    }

    fn play_frequency(&mut self, en: bool, tick_counter: u32) {
        self.synth.play_frequency(en, tick_counter);
    }

    // only used by the core's own run loop, never in step mode
    fn handler(&mut self) -> i32 {
        0
    }
}

pub struct Tamalr<Core: TamaCore, Clock: TimeDaemon> {
    pub core: Core,
    pub peripherals: Peripherals<Clock>,
    pub settings: Settings,
    pub play_state: PlayState,

    frame_clock: FrameClock,
    program: Vec<U12>,
}

impl <Core: TamaCore, Clock: TimeDaemon> Debug for Tamalr<Core, Clock> {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        f.debug_struct("Tamalr")
            .field("settings", &self.settings)
            .field("play_state", &self.play_state)
            .field("frame_clock", &self.frame_clock)
            .field("program_words", &self.program.len())
            .finish()
    }
}

impl <Core: TamaCore, Clock: TimeDaemon> Tamalr<Core, Clock> {
    pub fn init(core: Core, clock: Clock) -> Self {
        let settings = Settings::default();
        Self {
            core,
            peripherals: Peripherals::new(clock, &settings),
            settings,
            play_state: Unloaded,
            frame_clock: FrameClock::default(),
            program: Vec::new(),
        }
    }

    pub fn deinit(&mut self) {
        self.core.release();
        self.play_state = Unloaded;
    }

    pub fn reset(&mut self) {
        self.core.reset();
    }

    pub fn load_game(&mut self, bytes: &[u8]) -> Result<(), LoadError> {
        info!("loading rom from memory, size: {}", bytes.len());
        let program = rom::repack(bytes)?;

        if !self.core.init(&program, FRAMERATE) {
            return Err(LoadError::CoreRejected);
        }

        info!(" - {} program words handed to the core", program.len());
        self.program = program;
        self.frame_clock.resync(self.core.state().tick_counter);
        self.play_state = Running;
        Ok(())
    }

    pub fn load_game_special(&mut self, _game_type: u32, _info: &[&[u8]]) -> bool {
        false
    }

    pub fn unload_game(&mut self) {}

    pub fn program(&self) -> &[U12] {
        &self.program
    }

    pub fn apply_option(&mut self, key: &str, value: &str) -> bool {
        if !self.settings.apply_option(key, value) {
            return false;
        }
        self.peripherals.compositor.set_scale(self.settings.video_scale);
        self.peripherals.synth.set_waveform(self.settings.waveform);
        true
    }

    /// Runs the core for exactly one video frame, then pushes that frame's
    /// audio and video to the host.
    pub fn run_frame<H: Host>(&mut self, host: &mut H) {
        if self.play_state != Running {
            warn!("run_frame called without a loaded game");
            return;
        }

        host.poll_input();
        for button in Button::ALL {
            let pressed = host.joypad_pressed(button.joypad());
            self.core.set_button(button, ButtonState::from(pressed));
        }

        // every step that doesn't end the frame must raise the in-frame tick,
        // so this runs at most TICKS_PER_FRAME steps
        loop {
            self.core.set_exec_mode(ExecMode::Run);
            self.core.step(&mut self.peripherals);

            if self.frame_clock.observe(self.core.state().tick_counter) {
                break;
            }
        }

        self.peripherals.synth.end_frame(|samples| host.upload_audio(samples));

        self.peripherals.update_screen();
        let compositor = &self.peripherals.compositor;
        host.upload_video(compositor.frame(), compositor.width(), compositor.height(), compositor.pitch());
    }

    pub fn serialize_size(&self) -> usize {
        state::STATE_SIZE
    }

    pub fn serialize(&self, out: &mut [u8]) -> Result<usize, StateError> {
        state::serialize(self.core.state(), out)
    }

    pub fn unserialize(&mut self, data: &[u8]) -> Result<(), StateError> {
        state::deserialize(data, self.core.state_mut())?;
        self.core.refresh_hw(&mut self.peripherals);
        self.frame_clock.resync(self.core.state().tick_counter);
        debug!("state restored, tick counter {}", self.core.state().tick_counter);
        Ok(())
    }

    pub fn memory_data(&mut self, id: MemoryId) -> Option<&mut [u8]> {
        match id {
            MemoryId::SystemRam => Some(&mut self.core.state_mut().memory[..MEMORY_SIZE]),
            _ => None,
        }
    }

    pub fn memory_size(&self, id: MemoryId) -> usize {
        match id {
            MemoryId::SystemRam => MEMORY_SIZE,
            _ => 0,
        }
    }

    pub fn cheat_reset(&mut self) {}

    pub fn cheat_set(&mut self, _index: u32, _enabled: bool, _code: &str) {}
}

/// Boolean entry points for frontends that only understand success/failure.
impl <Core: TamaCore, Clock: TimeDaemon> Tamalr<Core, Clock> {
    pub fn retro_load_game(&mut self, bytes: &[u8]) -> bool {
        match self.load_game(bytes) {
            Ok(()) => true,
            Err(e) => {
                error!("failed to load game: {e}");
                false
            }
        }
    }

    pub fn retro_serialize(&self, out: &mut [u8]) -> bool {
        match self.serialize(out) {
            Ok(_) => true,
            Err(e) => {
                error!("failed to save state: {e}");
                false
            }
        }
    }

    pub fn retro_unserialize(&mut self, data: &[u8]) -> bool {
        match self.unserialize(data) {
            Ok(()) => true,
            Err(e) => {
                error!("failed to load state: {e}");
                false
            }
        }
    }
}
