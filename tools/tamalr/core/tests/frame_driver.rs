mod common;

use common::{loaded, Event, FakeCore, FixedClock, RecordingHost};
use tamalr_core::audio::{sample_index, Waveform, SAMPLES_PER_FRAME};
use tamalr_core::clock::{frame_tick, TICKS_PER_FRAME};
use tamalr_core::hal::{ExecMode, MEMORY_SIZE};
use tamalr_core::host::MemoryId;
use tamalr_core::inputs::{Button, ButtonState, JoypadButton};
use tamalr_core::settings::{OPTION_AUDIO_WAVEFORM, OPTION_VIDEO_SCALE};
use tamalr_core::video::{BLACK, BOTTOM_ICONS_TOP, MATRIX_TOP, WHITE};
use tamalr_core::{LoadError, Tamalr};

#[test]
fn each_call_advances_exactly_one_frame() {
    let mut tamalr = loaded(FakeCore::new(vec![5, 7, 12, 7]));
    let mut host = RecordingHost::default();

    for frame in 1..=20u32 {
        tamalr.run_frame(&mut host);
        let tick = tamalr.core.state.tick_counter;
        assert_eq!(tick / TICKS_PER_FRAME, frame, "frame {frame} ended at tick {tick}");
        // the last step is the one that wrapped
        assert!(frame_tick(tick) < 12);
    }
    assert_eq!(host.audio.len(), 20);
    assert_eq!(host.video.len(), 20);
}

#[test]
fn a_core_that_stops_ticking_still_returns() {
    let mut tamalr = loaded(FakeCore::new(vec![0]));
    let mut host = RecordingHost::default();

    tamalr.run_frame(&mut host);
    assert_eq!(tamalr.core.steps, 1);
    assert_eq!(host.audio.len(), 1);
}

#[test]
fn steps_always_use_run_mode() {
    let mut tamalr = loaded(FakeCore::new(vec![9]));
    tamalr.run_frame(&mut RecordingHost::default());
    assert_eq!(tamalr.core.exec_modes.len() as u64, tamalr.core.steps);
    assert!(tamalr.core.exec_modes.iter().all(|&m| m == ExecMode::Run));
}

#[test]
fn buttons_are_polled_once_and_forwarded() {
    let mut tamalr = loaded(FakeCore::new(vec![7]));
    let mut host = RecordingHost { pressed: vec![JoypadButton::Y, JoypadButton::B], ..Default::default() };

    tamalr.run_frame(&mut host);
    assert_eq!(host.polls, 1);

    let buttons = &tamalr.core.buttons;
    assert_eq!(buttons.len(), 3);
    assert!(buttons.contains(&(Button::Left, ButtonState::Pressed)));
    assert!(buttons.contains(&(Button::Middle, ButtonState::Pressed)));
    assert!(buttons.contains(&(Button::Right, ButtonState::Released)));
}

#[test]
fn audio_frames_are_complete_with_equal_channels() {
    let core = FakeCore::new(vec![5, 7]).with_script(vec![
        (100, Event::Frequency(20_000)),
        (700, Event::Frequency(30_000)),
        (900, Event::Play(false)),
        (1300, Event::Frequency(4_000)),
    ]);
    let mut tamalr = loaded(core);
    let mut host = RecordingHost::default();

    for _ in 0..4 {
        tamalr.run_frame(&mut host);
    }

    for samples in &host.audio {
        assert_eq!(samples.len(), SAMPLES_PER_FRAME * 2);
        for pair in samples.chunks_exact(2) {
            assert_eq!(pair[0], pair[1]);
        }
    }
    assert!(host.audio[0].iter().any(|&s| s != 0));
}

#[test]
fn mid_frame_change_keeps_the_old_tone_before_it() {
    let core = FakeCore::new(vec![1]).with_script(vec![
        (1, Event::Frequency(4400)),
        (273, Event::Frequency(8800)),
    ]);
    let mut tamalr = loaded(core);
    let mut host = RecordingHost::default();
    tamalr.run_frame(&mut host);

    let start = sample_index(1);
    let change = sample_index(273);
    let samples = &host.audio[0];
    for i in 0..SAMPLES_PER_FRAME {
        let expected = if i < start {
            0
        } else if i < change {
            Waveform::Square.sample(4400, (i - start) as u32)
        } else {
            Waveform::Square.sample(8800, (i - change) as u32)
        };
        assert_eq!(samples[2 * i], expected, "sample {i}");
    }
}

#[test]
fn silent_core_produces_silence_with_either_waveform() {
    for waveform in ["square", "sine"] {
        let mut tamalr = loaded(FakeCore::new(vec![7]));
        assert!(tamalr.apply_option(OPTION_AUDIO_WAVEFORM, waveform));
        let mut host = RecordingHost::default();
        tamalr.run_frame(&mut host);
        tamalr.run_frame(&mut host);
        assert!(host.audio.iter().flatten().all(|&s| s == 0));
    }
}

#[test]
fn stopping_playback_mid_frame_silences_the_tail() {
    let core = FakeCore::new(vec![1]).with_script(vec![
        (1, Event::Play(true)),
        (1, Event::Frequency(20_000)),
        (400, Event::Play(false)),
    ]);
    let mut tamalr = loaded(core);
    let mut host = RecordingHost::default();
    tamalr.run_frame(&mut host);

    let cut = sample_index(400);
    assert!(host.audio[0][..cut * 2].iter().any(|&s| s != 0));
    assert!(host.audio[0][cut * 2..].iter().all(|&s| s == 0));
    assert!(!tamalr.peripherals.synth.is_playing());
}

#[test]
fn lcd_writes_show_up_in_the_next_frame() {
    let core = FakeCore::new(vec![7]).with_script(vec![
        (50, Event::Pixel(0, 0, true)),
        (60, Event::Pixel(31, 15, true)),
        (70, Event::Pixel(40, 3, true)),
    ]);
    let mut tamalr = loaded(core);
    let mut host = RecordingHost::default();
    tamalr.run_frame(&mut host);

    let frame = &host.video[0];
    assert_eq!((frame.width, frame.height, frame.pitch), (256, 256, 512));
    assert_eq!(frame.at(0, MATRIX_TOP * 8), BLACK);
    assert_eq!(frame.at(31 * 8 + 7, (MATRIX_TOP + 15) * 8 + 7), BLACK);
    assert_eq!(frame.at(8, MATRIX_TOP * 8), WHITE);
}

#[test]
fn cleared_icon_leaves_no_residue() {
    let core = FakeCore::new(vec![7]).with_script(vec![
        (10, Event::Icon(6, true)),
        (TICKS_PER_FRAME + 10, Event::Icon(6, false)),
    ]);
    let mut tamalr = loaded(core);
    assert!(tamalr.apply_option(OPTION_VIDEO_SCALE, "2"));
    let mut host = RecordingHost::default();
    tamalr.run_frame(&mut host);
    tamalr.run_frame(&mut host);

    // icon 6: bottom strip, third column
    let (x0, y0) = (2 * 8 * 2, BOTTOM_ICONS_TOP * 2);
    let lit = &host.video[0];
    let cleared = &host.video[1];
    assert_eq!(cleared.width, 64);

    let mut ink = 0;
    for y in y0..y0 + 16 {
        for x in x0..x0 + 16 {
            if lit.at(x, y) == BLACK {
                ink += 1;
            }
            assert_eq!(cleared.at(x, y), WHITE);
        }
    }
    assert!(ink > 0);
}

#[test]
fn nothing_runs_before_a_game_is_loaded() {
    let mut tamalr = Tamalr::init(FakeCore::new(vec![7]), FixedClock(0));
    let mut host = RecordingHost::default();
    tamalr.run_frame(&mut host);
    assert_eq!(tamalr.core.steps, 0);
    assert!(host.audio.is_empty() && host.video.is_empty());
}

#[test]
fn loading_repacks_the_rom_for_the_core() {
    let tamalr = loaded(FakeCore::new(vec![7]));
    assert_eq!(tamalr.core.program, vec![0x123, 0x456]);
    assert_eq!(tamalr.core.framerate, 60);
    assert_eq!(tamalr.program(), &[0x123, 0x456]);
}

#[test]
fn bad_roms_are_refused() {
    let mut tamalr = Tamalr::init(FakeCore::new(vec![7]), FixedClock(0));
    assert_eq!(tamalr.load_game(&[]), Err(LoadError::Empty));
    assert!(!tamalr.retro_load_game(&[]));

    tamalr.core.accept_program = false;
    assert_eq!(tamalr.load_game(&[0x00, 0x01]), Err(LoadError::CoreRejected));

    let mut host = RecordingHost::default();
    tamalr.run_frame(&mut host);
    assert!(host.video.is_empty());
}

#[test]
fn lifecycle_calls_reach_the_core() {
    let mut tamalr = loaded(FakeCore::new(vec![7]));
    tamalr.reset();
    assert_eq!(tamalr.core.resets, 1);
    assert!(!tamalr.load_game_special(0, &[]));
    tamalr.cheat_reset();
    tamalr.cheat_set(0, true, "0000");
    tamalr.unload_game();
    tamalr.deinit();
    assert!(tamalr.core.released);
}

#[test]
fn system_ram_is_the_only_exported_region() {
    let mut tamalr = loaded(FakeCore::new(vec![7]));
    assert_eq!(tamalr.memory_size(MemoryId::SystemRam), MEMORY_SIZE);
    assert_eq!(tamalr.memory_size(MemoryId::SaveRam), 0);
    assert!(tamalr.memory_data(MemoryId::VideoRam).is_none());

    let ram = tamalr.memory_data(MemoryId::SystemRam).unwrap();
    assert_eq!(ram.len(), MEMORY_SIZE);
    ram[0x10] = 0xA;
    assert_eq!(tamalr.core.state.memory[0x10], 0xA);
}
