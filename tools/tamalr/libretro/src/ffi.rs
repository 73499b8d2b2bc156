//! Pointer and length pairs from the frontend turned into slices.
//!
//! A null pointer reads as empty. Otherwise the caller guarantees the
//! pointer is valid for `size` bytes for as long as the slice is used.

use std::ffi::{c_char, c_void, CStr};
use std::slice;
use libretro_sys::GameInfo;

pub unsafe fn bytes<'a>(data: *const c_void, size: usize) -> &'a [u8] {
    if data.is_null() {
        return &[];
    }
    slice::from_raw_parts(data as *const u8, size)
}

pub unsafe fn bytes_mut<'a>(data: *mut c_void, size: usize) -> &'a mut [u8] {
    if data.is_null() {
        return &mut [];
    }
    slice::from_raw_parts_mut(data as *mut u8, size)
}

/// The ROM image of a `retro_load_game` call.
pub unsafe fn game_data<'a>(game: *const GameInfo) -> &'a [u8] {
    match game.as_ref() {
        Some(game) => bytes(game.data, game.size),
        None => &[],
    }
}

/// A NUL-terminated string, empty if null or not UTF-8.
pub unsafe fn text<'a>(ptr: *const c_char) -> &'a str {
    if ptr.is_null() {
        return "";
    }
    CStr::from_ptr(ptr).to_str().unwrap_or("")
}
