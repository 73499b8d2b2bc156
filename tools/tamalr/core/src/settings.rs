use log::warn;
use crate::audio::Waveform;
use crate::video::VIDEO_MAX_SCALE;

pub const OPTION_VIDEO_SCALE: &str = "tamalr_video_scale";
pub const OPTION_AUDIO_WAVEFORM: &str = "tamalr_audio_waveform";

/// A frontend-visible option: `key` and `"Label; first|second|..."`, the
/// first value being the default.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CoreOption {
    pub key: &'static str,
    pub value: &'static str,
}

pub const CORE_OPTIONS: [CoreOption; 2] = [
    CoreOption { key: OPTION_VIDEO_SCALE, value: "Video scale; 8|4|2|1" },
    CoreOption { key: OPTION_AUDIO_WAVEFORM, value: "Audio waveform; square|sine" },
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub video_scale: usize,
    pub waveform: Waveform,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            video_scale: VIDEO_MAX_SCALE,
            waveform: Waveform::Square,
        }
    }
}

impl Settings {
    /// Applies one option value. Returns false for unknown keys or values,
    /// which leave the settings unchanged.
    pub fn apply_option(&mut self, key: &str, value: &str) -> bool {
        match key {
            OPTION_VIDEO_SCALE => match value.trim().parse::<usize>() {
                Ok(scale @ (1 | 2 | 4 | 8)) if scale <= VIDEO_MAX_SCALE => {
                    self.video_scale = scale;
                    true
                }
                _ => {
                    warn!("invalid {} value: {:?}", key, value);
                    false
                }
            },
            OPTION_AUDIO_WAVEFORM => match value.trim() {
                "square" => {
                    self.waveform = Waveform::Square;
                    true
                }
                "sine" => {
                    self.waveform = Waveform::Sine;
                    true
                }
                _ => {
                    warn!("invalid {} value: {:?}", key, value);
                    false
                }
            },
            _ => {
                warn!("unknown core option {}", key);
                false
            }
        }
    }
}
