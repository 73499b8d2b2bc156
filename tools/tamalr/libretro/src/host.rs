use std::ffi::{c_uint, c_void};
use libretro_sys::{AudioSampleBatchFn, InputPollFn, InputStateFn, VideoRefreshFn, DEVICE_JOYPAD};
use tamalr_core::inputs::JoypadButton;
use tamalr_core::Host;
use crate::info::joypad_id;

/// The frontend's per-frame callbacks. Missing ones are skipped.
#[derive(Copy, Clone, Debug, Default)]
pub struct RetroHost {
    pub video_refresh: Option<VideoRefreshFn>,
    pub audio_sample_batch: Option<AudioSampleBatchFn>,
    pub input_poll: Option<InputPollFn>,
    pub input_state: Option<InputStateFn>,
}

impl RetroHost {
    pub const fn new() -> Self {
        Self {
            video_refresh: None,
            audio_sample_batch: None,
            input_poll: None,
            input_state: None,
        }
    }
}

impl Host for RetroHost {
    fn poll_input(&mut self) {
        if let Some(poll) = self.input_poll {
            unsafe { poll() }
        }
    }

    fn joypad_pressed(&mut self, button: JoypadButton) -> bool {
        match self.input_state {
            Some(state) => unsafe { state(0, DEVICE_JOYPAD, 0, joypad_id(button)) != 0 },
            None => false,
        }
    }

    fn upload_audio(&mut self, samples: &[i16]) {
        let Some(batch) = self.audio_sample_batch else {
            return;
        };

        // the frontend may take fewer frames than offered
        let mut rest = samples;
        while rest.len() >= 2 {
            let taken = unsafe { batch(rest.as_ptr(), rest.len() / 2) };
            if taken == 0 {
                break;
            }
            rest = &rest[(taken * 2).min(rest.len())..];
        }
    }

    fn upload_video(&mut self, frame: &[u16], width: usize, height: usize, pitch: usize) {
        if let Some(refresh) = self.video_refresh {
            unsafe { refresh(frame.as_ptr() as *const c_void, width as c_uint, height as c_uint, pitch) }
        }
    }
}
