//! Save states.
//!
//! A save state is the core's register file and memory packed back to back,
//! in the order of [`FIELDS`], with no header and no padding. Multi-byte
//! fields are little-endian. Any change to the field list breaks every
//! existing save state.

use bytemuck::Zeroable;
use crate::error::StateError;
use crate::hal::{CpuState, InterruptSlot, INT_SLOT_NUM, MEM_BUFFER_SIZE};

/// Name and byte width of every field, in wire order.
pub const FIELDS: [(&str, usize); 17] = [
    ("pc", 2),
    ("x", 2),
    ("y", 2),
    ("a", 1),
    ("b", 1),
    ("np", 1),
    ("sp", 1),
    ("flags", 1),
    ("tick_counter", 4),
    ("clk_timer_timestamp", 4),
    ("prog_timer_timestamp", 4),
    ("prog_timer_enabled", 1),
    ("prog_timer_data", 1),
    ("prog_timer_rld", 1),
    ("call_depth", 4),
    ("interrupts", core::mem::size_of::<InterruptSlot>() * INT_SLOT_NUM),
    ("memory", MEM_BUFFER_SIZE),
];

pub const STATE_SIZE: usize = state_size();

const fn state_size() -> usize {
    let mut size = 0;
    let mut i = 0;
    while i < FIELDS.len() {
        size += FIELDS[i].1;
        i += 1;
    }
    size
}

fn check_size(got: usize) -> Result<(), StateError> {
    if got < STATE_SIZE {
        return Err(StateError::BufferTooSmall { needed: STATE_SIZE, got });
    }
    Ok(())
}

struct Writer<'a> {
    data: &'a mut [u8],
    pos: usize,
}

impl<'a> Writer<'a> {
    fn new(data: &'a mut [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn bytes(&mut self, val: &[u8]) {
        self.data[self.pos..self.pos + val.len()].copy_from_slice(val);
        self.pos += val.len();
    }

    fn write_8(&mut self, val: u8) {
        self.bytes(&[val]);
    }

    fn write_16(&mut self, val: u16) {
        self.bytes(&val.to_le_bytes());
    }

    fn write_32(&mut self, val: u32) {
        self.bytes(&val.to_le_bytes());
    }
}

struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn take(&mut self, len: usize) -> &'a [u8] {
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        bytes
    }

    fn read_8(&mut self) -> u8 {
        self.take(1)[0]
    }

    fn read_16(&mut self) -> u16 {
        let b = self.take(2);
        u16::from_le_bytes([b[0], b[1]])
    }

    fn read_32(&mut self) -> u32 {
        let b = self.take(4);
        u32::from_le_bytes([b[0], b[1], b[2], b[3]])
    }
}

/// Packs `state` into the front of `out`. Returns the number of bytes written.
pub fn serialize(state: &CpuState, out: &mut [u8]) -> Result<usize, StateError> {
    check_size(out.len())?;

    let mut w = Writer::new(&mut out[..STATE_SIZE]);
    w.write_16(state.pc);
    w.write_16(state.x);
    w.write_16(state.y);
    w.write_8(state.a);
    w.write_8(state.b);
    w.write_8(state.np);
    w.write_8(state.sp);
    w.write_8(state.flags);
    w.write_32(state.tick_counter);
    w.write_32(state.clk_timer_timestamp);
    w.write_32(state.prog_timer_timestamp);
    w.write_8(state.prog_timer_enabled as u8);
    w.write_8(state.prog_timer_data);
    w.write_8(state.prog_timer_rld);
    w.write_32(state.call_depth);
    w.bytes(bytemuck::cast_slice(&state.interrupts));
    w.bytes(&state.memory[..]);

    debug_assert_eq!(w.pos, STATE_SIZE);
    Ok(w.pos)
}

/// Unpacks a state produced by [`serialize`]. `state` is only touched once
/// the whole buffer has been read.
pub fn deserialize(data: &[u8], state: &mut CpuState) -> Result<(), StateError> {
    check_size(data.len())?;

    let mut r = Reader::new(data);
    let pc = r.read_16();
    let x = r.read_16();
    let y = r.read_16();
    let a = r.read_8();
    let b = r.read_8();
    let np = r.read_8();
    let sp = r.read_8();
    let flags = r.read_8();
    let tick_counter = r.read_32();
    let clk_timer_timestamp = r.read_32();
    let prog_timer_timestamp = r.read_32();
    let prog_timer_enabled = r.read_8() != 0;
    let prog_timer_data = r.read_8();
    let prog_timer_rld = r.read_8();
    let call_depth = r.read_32();

    let mut interrupts = [InterruptSlot::zeroed(); INT_SLOT_NUM];
    let interrupt_bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut interrupts);
    let len = interrupt_bytes.len();
    interrupt_bytes.copy_from_slice(r.take(len));

    let memory = r.take(MEM_BUFFER_SIZE);

    debug_assert_eq!(r.pos, STATE_SIZE);

    state.pc = pc;
    state.x = x;
    state.y = y;
    state.a = a;
    state.b = b;
    state.np = np;
    state.sp = sp;
    state.flags = flags;
    state.tick_counter = tick_counter;
    state.clk_timer_timestamp = clk_timer_timestamp;
    state.prog_timer_timestamp = prog_timer_timestamp;
    state.prog_timer_enabled = prog_timer_enabled;
    state.prog_timer_data = prog_timer_data;
    state.prog_timer_rld = prog_timer_rld;
    state.call_depth = call_depth;
    state.interrupts = interrupts;
    // in place: frontends hold on to the memory pointer
    state.memory.copy_from_slice(memory);

    Ok(())
}
