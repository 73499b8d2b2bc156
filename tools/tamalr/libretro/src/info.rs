//! Static answers to the frontend's questions about this core.

use std::ffi::{c_char, c_uint, CStr};
use libretro_sys::{
    GameGeometry, SystemAvInfo, SystemInfo, SystemTiming, DEVICE_ID_JOYPAD_A, DEVICE_ID_JOYPAD_B, DEVICE_ID_JOYPAD_Y,
    MEMORY_RTC, MEMORY_SAVE_RAM, MEMORY_SYSTEM_RAM, MEMORY_VIDEO_RAM, Region,
};
use tamalr_core::audio::AUDIO_SAMPLE_RATE;
use tamalr_core::clock::FRAMERATE;
use tamalr_core::host::{MemoryId, MAX_FRAME_EDGE};
use tamalr_core::inputs::JoypadButton;

pub const LIBRARY_NAME: &CStr = c"TamaLIBretro";
pub const VALID_EXTENSIONS: &CStr = c"b|rom|bin";
const LIBRARY_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

pub const REGION: c_uint = Region::NTSC as c_uint;

pub fn system_info() -> SystemInfo {
    SystemInfo {
        library_name: LIBRARY_NAME.as_ptr(),
        library_version: LIBRARY_VERSION.as_ptr() as *const c_char,
        valid_extensions: VALID_EXTENSIONS.as_ptr(),
        need_fullpath: false,
        block_extract: false,
    }
}

/// The frame is square: icon strip, dot matrix, icon strip.
pub fn system_av_info() -> SystemAvInfo {
    let edge = MAX_FRAME_EDGE as c_uint;
    SystemAvInfo {
        geometry: GameGeometry {
            base_width: edge,
            base_height: edge,
            max_width: edge,
            max_height: edge,
            aspect_ratio: 1.0,
        },
        timing: SystemTiming {
            fps: FRAMERATE as f64,
            sample_rate: AUDIO_SAMPLE_RATE as f64,
        },
    }
}

pub fn joypad_id(button: JoypadButton) -> c_uint {
    match button {
        JoypadButton::A => DEVICE_ID_JOYPAD_A,
        JoypadButton::B => DEVICE_ID_JOYPAD_B,
        JoypadButton::Y => DEVICE_ID_JOYPAD_Y,
    }
}

pub fn memory_id(id: c_uint) -> Option<MemoryId> {
    match id {
        MEMORY_SAVE_RAM => Some(MemoryId::SaveRam),
        MEMORY_RTC => Some(MemoryId::Rtc),
        MEMORY_SYSTEM_RAM => Some(MemoryId::SystemRam),
        MEMORY_VIDEO_RAM => Some(MemoryId::VideoRam),
        _ => None,
    }
}
