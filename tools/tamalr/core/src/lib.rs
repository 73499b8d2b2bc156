//! Drives a TamaLIB core from a libretro-style frontend: one call per video
//! frame, with the buzzer rendered to 44.1kHz audio and the LCD rendered to an
//! RGB565 framebuffer.

pub mod audio;
pub mod clock;
pub mod emulator;
pub mod error;
pub mod hal;
pub mod host;
pub mod icons;
pub mod inputs;
pub mod rom;
pub mod settings;
pub mod state;
pub mod video;

pub use emulator::{Peripherals, Tamalr};
pub use error::{LoadError, StateError};
pub use hal::{CpuState, Hal, TamaCore, TimeDaemon};
pub use host::Host;
