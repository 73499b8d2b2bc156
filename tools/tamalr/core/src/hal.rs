//! The boundary between this crate and the emulated E0C6S46 core.
//!
//! The core is external: it only sees the world through the [`Hal`] hook
//! bundle it is handed on every step, and it exposes its register file as a
//! [`CpuState`] so save states and the frame driver can read the tick counter.

use core::fmt::Arguments;
use std::time::Instant;
use bytemuck::{Pod, Zeroable};
use log::{error, info};
use crate::inputs::{Button, ButtonState};

pub const LCD_WIDTH: usize = 32;
pub const LCD_HEIGHT: usize = 16;
pub const ICON_NUM: usize = 8;

/// 4096 x 4 bits, one nibble per byte.
pub const MEMORY_SIZE: usize = 4096;
pub const MEM_BUFFER_SIZE: usize = MEMORY_SIZE;

pub const INT_SLOT_NUM: usize = 6;

/// Microseconds from an arbitrary monotonic origin, wrapping at 32 bits.
pub type Timestamp = u32;

/// A 12-bit program word, stored in the low bits.
pub type U12 = u16;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Info,
    Memory,
    Cpu,
}

impl LogLevel {
    pub fn tag(self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Info => "INFO ",
            LogLevel::Memory => "MEM  ",
            LogLevel::Cpu => "CPU  ",
        }
    }

    /// Only errors and informational messages ever reach the log sink.
    pub fn is_enabled(self) -> bool {
        matches!(self, LogLevel::Error | LogLevel::Info)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExecMode {
    Pause,
    Run,
    Step,
    Next,
    ToCall,
    ToRet,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct InterruptSlot {
    pub factor_flag_reg: u8,
    pub mask_reg: u8,
    pub triggered: u8,
    pub vector: u8,
}

/// Register file and memory of the emulated core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CpuState {
    pub pc: u16,
    pub x: u16,
    pub y: u16,
    pub a: u8,
    pub b: u8,
    pub np: u8,
    pub sp: u8,
    pub flags: u8,

    pub tick_counter: u32,
    pub clk_timer_timestamp: u32,
    pub prog_timer_timestamp: u32,
    pub prog_timer_enabled: bool,
    pub prog_timer_data: u8,
    pub prog_timer_rld: u8,

    pub call_depth: u32,

    pub interrupts: [InterruptSlot; INT_SLOT_NUM],

    // heap allocated, it's copied around wholesale by save states
    pub memory: Box<[u8; MEM_BUFFER_SIZE]>,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            pc: 0,
            x: 0,
            y: 0,
            a: 0,
            b: 0,
            np: 0,
            sp: 0,
            flags: 0,
            tick_counter: 0,
            clk_timer_timestamp: 0,
            prog_timer_timestamp: 0,
            prog_timer_enabled: false,
            prog_timer_data: 0,
            prog_timer_rld: 0,
            call_depth: 0,
            interrupts: [InterruptSlot::zeroed(); INT_SLOT_NUM],
            memory: Box::new([0; MEM_BUFFER_SIZE]),
        }
    }
}

pub trait TimeDaemon {
    fn now_us(&self) -> u64;
}

#[derive(Debug, Clone, Copy)]
pub struct InstantClock {
    pub instant: Instant,
}

impl Default for InstantClock {
    fn default() -> Self {
        Self { instant: Instant::now() }
    }
}

impl TimeDaemon for InstantClock {
    fn now_us(&self) -> u64 {
        self.instant.elapsed().as_micros() as u64
    }
}

/// Hooks the emulated core calls back into while it runs.
///
/// The tick counter is passed along with the audio hooks because the core is
/// mutably borrowed for the duration of a step.
pub trait Hal {
    fn halt(&mut self);
    fn is_log_enabled(&self, level: LogLevel) -> bool;
    fn log(&self, level: LogLevel, args: Arguments<'_>);
    fn sleep_until(&mut self, ts: Timestamp);
    fn get_timestamp(&self) -> Timestamp;
    fn update_screen(&mut self);
    fn set_lcd_matrix(&mut self, x: u8, y: u8, val: bool);
    fn set_lcd_icon(&mut self, icon: u8, val: bool);
    fn set_frequency(&mut self, freq: u32, tick_counter: u32);
    fn play_frequency(&mut self, en: bool, tick_counter: u32);
    fn handler(&mut self) -> i32;
}

/// Forwards an enabled core log line to the `log` facade.
pub fn forward_log(level: LogLevel, args: Arguments<'_>) {
    if !level.is_enabled() {
        return;
    }

    match level {
        LogLevel::Error => error!(target: "tamalib", "[TAMALIB {}]: {}", level.tag(), args),
        _ => info!(target: "tamalib", "[TAMALIB {}]: {}", level.tag(), args),
    }
}

/// The emulated core itself. Implemented outside this crate (usually over
/// FFI to TamaLIB); the frame driver only needs these entry points.
pub trait TamaCore {
    /// Hands the repacked program to the core. Returns false if the core
    /// refuses it.
    fn init(&mut self, program: &[U12], framerate: u32) -> bool;
    fn release(&mut self);
    fn reset(&mut self);
    fn set_exec_mode(&mut self, mode: ExecMode);
    fn step(&mut self, hal: &mut dyn Hal);
    fn set_button(&mut self, button: Button, state: ButtonState);
    /// Re-derives cached peripheral state (LCD, buzzer) from the registers.
    fn refresh_hw(&mut self, hal: &mut dyn Hal);
    fn state(&self) -> &CpuState;
    fn state_mut(&mut self) -> &mut CpuState;
}
