//! libretro entry points for a [`TamaCore`](tamalr_core::TamaCore).
//!
//! This crate has no emulated core of its own. A binding crate that wraps
//! TamaLIB builds the `cdylib` and exports the `retro_*` symbols with
//! [`libretro_core!`].

pub mod ffi;
pub mod frontend;
pub mod host;
pub mod info;

pub use frontend::RetroCore;
pub use host::RetroHost;
pub use libretro_sys as sys;

/// Defines every `retro_*` function for `$core`, backed by one global
/// [`RetroCore`]. `$core` must implement `TamaCore + Default + Send`.
#[macro_export]
macro_rules! libretro_core {
    ($core:ty) => {
        static TAMALR: ::std::sync::Mutex<$crate::RetroCore<$core>> =
            ::std::sync::Mutex::new($crate::RetroCore::new());

        fn tamalr() -> ::std::sync::MutexGuard<'static, $crate::RetroCore<$core>> {
            TAMALR.lock().unwrap_or_else(::std::sync::PoisonError::into_inner)
        }

        #[no_mangle]
        pub extern "C" fn retro_api_version() -> ::std::ffi::c_uint {
            $crate::sys::API_VERSION
        }

        #[no_mangle]
        pub unsafe extern "C" fn retro_get_system_info(info: *mut $crate::sys::SystemInfo) {
            if !info.is_null() {
                info.write($crate::info::system_info());
            }
        }

        #[no_mangle]
        pub unsafe extern "C" fn retro_get_system_av_info(info: *mut $crate::sys::SystemAvInfo) {
            if !info.is_null() {
                info.write($crate::info::system_av_info());
            }
        }

        #[no_mangle]
        pub extern "C" fn retro_set_environment(callback: $crate::sys::EnvironmentFn) {
            tamalr().set_environment(callback);
        }

        #[no_mangle]
        pub extern "C" fn retro_set_video_refresh(callback: $crate::sys::VideoRefreshFn) {
            tamalr().host_mut().video_refresh = Some(callback);
        }

        // single samples are never sent, everything goes through the batch callback
        #[no_mangle]
        pub extern "C" fn retro_set_audio_sample(_callback: $crate::sys::AudioSampleFn) {}

        #[no_mangle]
        pub extern "C" fn retro_set_audio_sample_batch(callback: $crate::sys::AudioSampleBatchFn) {
            tamalr().host_mut().audio_sample_batch = Some(callback);
        }

        #[no_mangle]
        pub extern "C" fn retro_set_input_poll(callback: $crate::sys::InputPollFn) {
            tamalr().host_mut().input_poll = Some(callback);
        }

        #[no_mangle]
        pub extern "C" fn retro_set_input_state(callback: $crate::sys::InputStateFn) {
            tamalr().host_mut().input_state = Some(callback);
        }

        #[no_mangle]
        pub extern "C" fn retro_set_controller_port_device(_port: ::std::ffi::c_uint, _device: ::std::ffi::c_uint) {}

        #[no_mangle]
        pub extern "C" fn retro_init() {
            tamalr().init();
        }

        #[no_mangle]
        pub extern "C" fn retro_deinit() {
            tamalr().deinit();
        }

        #[no_mangle]
        pub extern "C" fn retro_reset() {
            tamalr().reset();
        }

        #[no_mangle]
        pub extern "C" fn retro_run() {
            tamalr().run();
        }

        #[no_mangle]
        pub unsafe extern "C" fn retro_load_game(game: *const $crate::sys::GameInfo) -> bool {
            tamalr().load_game($crate::ffi::game_data(game))
        }

        #[no_mangle]
        pub extern "C" fn retro_load_game_special(
            _game_type: ::std::ffi::c_uint,
            _info: *const $crate::sys::GameInfo,
            _num_info: usize,
        ) -> bool {
            false
        }

        #[no_mangle]
        pub extern "C" fn retro_unload_game() {
            tamalr().unload_game();
        }

        #[no_mangle]
        pub extern "C" fn retro_get_region() -> ::std::ffi::c_uint {
            $crate::info::REGION
        }

        #[no_mangle]
        pub extern "C" fn retro_serialize_size() -> usize {
            tamalr().serialize_size()
        }

        #[no_mangle]
        pub unsafe extern "C" fn retro_serialize(data: *mut ::std::ffi::c_void, size: usize) -> bool {
            tamalr().serialize($crate::ffi::bytes_mut(data, size))
        }

        #[no_mangle]
        pub unsafe extern "C" fn retro_unserialize(data: *const ::std::ffi::c_void, size: usize) -> bool {
            tamalr().unserialize($crate::ffi::bytes(data, size))
        }

        #[no_mangle]
        pub extern "C" fn retro_cheat_reset() {
            tamalr().cheat_reset();
        }

        #[no_mangle]
        pub unsafe extern "C" fn retro_cheat_set(index: ::std::ffi::c_uint, enabled: bool, code: *const ::std::ffi::c_char) {
            tamalr().cheat_set(index, enabled, $crate::ffi::text(code));
        }

        #[no_mangle]
        pub extern "C" fn retro_get_memory_data(id: ::std::ffi::c_uint) -> *mut ::std::ffi::c_void {
            match tamalr().memory_data(id) {
                Some(memory) => memory.as_mut_ptr() as *mut ::std::ffi::c_void,
                None => ::std::ptr::null_mut(),
            }
        }

        #[no_mangle]
        pub extern "C" fn retro_get_memory_size(id: ::std::ffi::c_uint) -> usize {
            tamalr().memory_size(id)
        }
    };
}
