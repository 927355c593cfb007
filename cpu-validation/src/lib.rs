use m6800_core::core::{Bus, BusCycle};
use m6800_core::cpu::m6800::{Alu, M6800};
use m6800_core::cpu::{M6800State, Verification};
use log::debug;
use serde::{Deserialize, Serialize};

pub mod formal;

// --- TracingBus: flat 64KB memory with access recording ---

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusOp {
    Read,
    Write,
    Internal,
}

impl BusOp {
    /// Classify a cycle the CPU reported. Dead cycles are internal.
    pub fn of(cycle: &BusCycle) -> Self {
        if cycle.is_write() {
            BusOp::Write
        } else if cycle.is_read() {
            BusOp::Read
        } else {
            BusOp::Internal
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BusOp::Read => "read",
            BusOp::Write => "write",
            BusOp::Internal => "internal",
        }
    }
}

/// One access that actually reached memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TracedAccess {
    pub addr: u16,
    pub data: u8,
    pub op: BusOp,
}

pub struct TracingBus {
    pub memory: [u8; 0x10000],
    pub accesses: Vec<TracedAccess>,
}

impl TracingBus {
    pub fn new() -> Self {
        Self {
            memory: [0; 0x10000],
            accesses: Vec::new(),
        }
    }

    pub fn load(&mut self, addr: u16, data: &[u8]) {
        let start = addr as usize;
        self.memory[start..start + data.len()].copy_from_slice(data);
    }

    pub fn clear_accesses(&mut self) {
        self.accesses.clear();
    }
}

impl Default for TracingBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for TracingBus {
    fn read(&mut self, addr: u16) -> u8 {
        let data = self.memory[addr as usize];
        self.accesses.push(TracedAccess {
            addr,
            data,
            op: BusOp::Read,
        });
        data
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.memory[addr as usize] = data;
        self.accesses.push(TracedAccess {
            addr,
            data,
            op: BusOp::Write,
        });
    }
}

/// Run the instruction at the current boundary to completion, fetch
/// included. Gives up after `max_cycles`.
pub fn execute_instruction<V: Verification, A: Alu, B: Bus + ?Sized>(
    cpu: &mut M6800<V, A>,
    bus: &mut B,
    max_cycles: usize,
) -> Option<Vec<BusCycle>> {
    let mut cycles = Vec::new();
    loop {
        cycles.push(cpu.execute_cycle(bus));
        if cpu.at_instruction_boundary() {
            return Some(cycles);
        }
        if cycles.len() >= max_cycles {
            debug!(
                "instruction {:02X} still running after {} cycles",
                cpu.regs.instr, max_cycles
            );
            return None;
        }
    }
}

// --- M6800 JSON test vector types ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct M6800TestCase {
    pub name: String,
    pub initial: M6800CpuState,
    #[serde(rename = "final")]
    pub final_state: M6800CpuState,
    pub cycles: Vec<(u16, u8, String)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct M6800CpuState {
    pub pc: u16,
    pub sp: u16,
    pub a: u8,
    pub b: u8,
    pub x: u16,
    pub cc: u8,
    pub ram: Vec<(u16, u8)>,
}

impl M6800CpuState {
    pub fn from_state(state: &M6800State) -> Self {
        Self {
            pc: state.pc,
            sp: state.sp,
            a: state.a,
            b: state.b,
            x: state.x,
            cc: state.cc,
            ram: Vec::new(),
        }
    }

    pub fn registers(&self) -> M6800State {
        M6800State {
            a: self.a,
            b: self.b,
            x: self.x,
            sp: self.sp,
            pc: self.pc,
            cc: self.cc,
        }
    }
}
