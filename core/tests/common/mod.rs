#![allow(dead_code)]

use m6800_core::core::{Bus, BusCycle};
use m6800_core::cpu::Verification;
use m6800_core::cpu::m6800::{Alu, M6800};

/// Minimal bus for testing: flat 64KB read/write memory, no peripherals.
pub struct TestBus {
    pub memory: [u8; 0x10000],
}

impl TestBus {
    pub fn new() -> Self {
        Self {
            memory: [0; 0x10000],
        }
    }

    pub fn load(&mut self, addr: u16, data: &[u8]) {
        let start = addr as usize;
        self.memory[start..start + data.len()].copy_from_slice(data);
    }

    pub fn set_reset_vector(&mut self, addr: u16) {
        self.load(0xFFFE, &addr.to_be_bytes());
    }
}

impl Bus for TestBus {
    fn read(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.memory[addr as usize] = data;
    }
}

/// Clocks taken by the reset vector fetch.
pub const RESET_CYCLES: usize = 3;

/// Helper: tick the CPU for `n` cycles
pub fn tick<V: Verification, A: Alu>(
    cpu: &mut M6800<V, A>,
    bus: &mut TestBus,
    n: usize,
) -> Vec<BusCycle> {
    (0..n).map(|_| cpu.execute_cycle(bus)).collect()
}

/// Point the reset vector at `pc` and run the reset sequence. The CPU is left
/// about to fetch from `pc`.
pub fn boot<V: Verification, A: Alu>(cpu: &mut M6800<V, A>, bus: &mut TestBus, pc: u16) {
    bus.set_reset_vector(pc);
    tick(cpu, bus, RESET_CYCLES);
    assert!(cpu.at_instruction_boundary());
    assert_eq!(cpu.regs.pc, pc);
}

/// Run one whole instruction, fetch included. Returns its bus cycles.
pub fn step<V: Verification, A: Alu>(cpu: &mut M6800<V, A>, bus: &mut TestBus) -> Vec<BusCycle> {
    let mut cycles = vec![cpu.execute_cycle(bus)];
    while !cpu.at_instruction_boundary() {
        cycles.push(cpu.execute_cycle(bus));
        assert!(cycles.len() < 16, "instruction never ended");
    }
    cycles
}

/// Addresses of the cycles with VMA high, tagged 'R' or 'W'.
pub fn accesses(cycles: &[BusCycle]) -> Vec<(char, u16)> {
    cycles
        .iter()
        .filter(|c| !c.is_dead())
        .map(|c| (if c.is_write() { 'W' } else { 'R' }, c.addr))
        .collect()
}

/// Fresh CPU booted at `pc` with `program` loaded there.
pub fn setup(pc: u16, program: &[u8]) -> (M6800, TestBus) {
    let mut cpu = M6800::new();
    let mut bus = TestBus::new();
    bus.load(pc, program);
    boot(&mut cpu, &mut bus, pc);
    (cpu, bus)
}
