use core::fmt::{Debug, Formatter};
use std::ffi::{c_uint, c_void, CStr, CString};
use std::ptr;
use libretro_sys::{
    EnvironmentFn, InputDescriptor, PixelFormat, Variable, DEVICE_JOYPAD, ENVIRONMENT_GET_VARIABLE,
    ENVIRONMENT_GET_VARIABLE_UPDATE, ENVIRONMENT_SET_INPUT_DESCRIPTORS, ENVIRONMENT_SET_PIXEL_FORMAT,
    ENVIRONMENT_SET_VARIABLES,
};
use log::{error, warn};
use tamalr_core::hal::{InstantClock, TamaCore};
use tamalr_core::inputs::INPUT_DESCRIPTORS;
use tamalr_core::settings::CORE_OPTIONS;
use tamalr_core::Tamalr;
use crate::host::RetroHost;
use crate::info::{joypad_id, memory_id};

fn environment(callback: Option<EnvironmentFn>, cmd: c_uint, data: *mut c_void) -> bool {
    match callback {
        Some(callback) => unsafe { callback(cmd, data) },
        None => false,
    }
}

/// Everything behind the `retro_*` entry points: the frontend's callbacks and,
/// between `init` and `deinit`, the emulator.
pub struct RetroCore<Core: TamaCore> {
    environment: Option<EnvironmentFn>,
    host: RetroHost,
    emulator: Option<Tamalr<Core, InstantClock>>,

    // handed to the frontend by pointer, kept alive here
    options: Vec<(CString, CString)>,
    descriptions: Vec<(c_uint, CString)>,
}

impl <Core: TamaCore> Debug for RetroCore<Core> {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        f.debug_struct("RetroCore")
            .field("host", &self.host)
            .field("emulator", &self.emulator)
            .finish()
    }
}

impl <Core: TamaCore + Default> Default for RetroCore<Core> {
    fn default() -> Self {
        Self::new()
    }
}

impl <Core: TamaCore + Default> RetroCore<Core> {
    pub const fn new() -> Self {
        Self {
            environment: None,
            host: RetroHost::new(),
            emulator: None,
            options: Vec::new(),
            descriptions: Vec::new(),
        }
    }

    pub fn emulator(&self) -> Option<&Tamalr<Core, InstantClock>> {
        self.emulator.as_ref()
    }

    pub fn set_environment(&mut self, callback: EnvironmentFn) {
        self.environment = Some(callback);
        self.declare_options();
    }

    pub fn host_mut(&mut self) -> &mut RetroHost {
        &mut self.host
    }

    pub fn init(&mut self) {
        self.emulator = Some(Tamalr::init(Core::default(), InstantClock::default()));
    }

    pub fn deinit(&mut self) {
        if let Some(mut emulator) = self.emulator.take() {
            emulator.deinit();
        }
    }

    pub fn reset(&mut self) {
        if let Some(emulator) = self.emulator.as_mut() {
            emulator.reset();
        }
    }

    pub fn load_game(&mut self, rom: &[u8]) -> bool {
        if self.emulator.is_none() {
            error!("load_game called before init");
            return false;
        }

        let mut format = PixelFormat::RGB565;
        if !environment(self.environment, ENVIRONMENT_SET_PIXEL_FORMAT, &mut format as *mut PixelFormat as *mut c_void) {
            error!("frontend does not support RGB565");
            return false;
        }

        self.declare_inputs();
        self.apply_options();

        match self.emulator.as_mut() {
            Some(emulator) => emulator.retro_load_game(rom),
            None => false,
        }
    }

    pub fn unload_game(&mut self) {
        if let Some(emulator) = self.emulator.as_mut() {
            emulator.unload_game();
        }
    }

    pub fn run(&mut self) {
        let mut updated = false;
        if environment(self.environment, ENVIRONMENT_GET_VARIABLE_UPDATE, &mut updated as *mut bool as *mut c_void) && updated {
            self.apply_options();
        }

        if let Some(emulator) = self.emulator.as_mut() {
            emulator.run_frame(&mut self.host);
        }
    }

    pub fn serialize_size(&self) -> usize {
        self.emulator.as_ref().map_or(0, |e| e.serialize_size())
    }

    pub fn serialize(&self, out: &mut [u8]) -> bool {
        self.emulator.as_ref().is_some_and(|e| e.retro_serialize(out))
    }

    pub fn unserialize(&mut self, data: &[u8]) -> bool {
        self.emulator.as_mut().is_some_and(|e| e.retro_unserialize(data))
    }

    pub fn memory_data(&mut self, id: c_uint) -> Option<&mut [u8]> {
        let id = memory_id(id)?;
        self.emulator.as_mut()?.memory_data(id)
    }

    pub fn memory_size(&self, id: c_uint) -> usize {
        match (memory_id(id), self.emulator.as_ref()) {
            (Some(id), Some(emulator)) => emulator.memory_size(id),
            _ => 0,
        }
    }

    pub fn cheat_reset(&mut self) {
        if let Some(emulator) = self.emulator.as_mut() {
            emulator.cheat_reset();
        }
    }

    pub fn cheat_set(&mut self, index: u32, enabled: bool, code: &str) {
        if let Some(emulator) = self.emulator.as_mut() {
            emulator.cheat_set(index, enabled, code);
        }
    }

    fn declare_options(&mut self) {
        self.options = CORE_OPTIONS
            .iter()
            .filter_map(|option| Some((CString::new(option.key).ok()?, CString::new(option.value).ok()?)))
            .collect();

        let mut variables: Vec<Variable> = self.options
            .iter()
            .map(|(key, value)| Variable { key: key.as_ptr(), value: value.as_ptr() })
            .collect();
        variables.push(Variable { key: ptr::null(), value: ptr::null() });

        if !environment(self.environment, ENVIRONMENT_SET_VARIABLES, variables.as_mut_ptr() as *mut c_void) {
            warn!("frontend does not take core options, using defaults");
        }
    }

    fn declare_inputs(&mut self) {
        self.descriptions = INPUT_DESCRIPTORS
            .iter()
            .filter_map(|d| Some((joypad_id(d.button), CString::new(d.description).ok()?)))
            .collect();

        let mut descriptors: Vec<InputDescriptor> = self.descriptions
            .iter()
            .map(|(id, description)| InputDescriptor {
                port: 0,
                device: DEVICE_JOYPAD,
                index: 0,
                id: *id,
                description: description.as_ptr(),
            })
            .collect();
        descriptors.push(InputDescriptor { port: 0, device: 0, index: 0, id: 0, description: ptr::null() });

        environment(self.environment, ENVIRONMENT_SET_INPUT_DESCRIPTORS, descriptors.as_mut_ptr() as *mut c_void);
    }

    fn apply_options(&mut self) {
        let Some(emulator) = self.emulator.as_mut() else {
            return;
        };

        for (key, _) in &self.options {
            let mut variable = Variable { key: key.as_ptr(), value: ptr::null() };
            if !environment(self.environment, ENVIRONMENT_GET_VARIABLE, &mut variable as *mut Variable as *mut c_void)
                || variable.value.is_null()
            {
                continue;
            }

            let value = unsafe { CStr::from_ptr(variable.value) };
            if let (Ok(key), Ok(value)) = (key.to_str(), value.to_str()) {
                emulator.apply_option(key, value);
            }
        }
    }
}
