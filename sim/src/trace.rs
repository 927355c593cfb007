use m6800_core::core::Bus;
use m6800_core::cpu::Verification;
use m6800_core::cpu::m6800::{Alu, M6800, ResetState, decode};
use serde::Serialize;

/// Flat RAM backing the whole address space.
pub struct FakeMemory {
    memory: Vec<u8>,
}

impl FakeMemory {
    pub fn new(image: Vec<u8>) -> Self {
        debug_assert_eq!(image.len(), 0x10000);
        Self { memory: image }
    }
}

impl Bus for FakeMemory {
    fn read(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write(&mut self, addr: u16, data: u8) {
        self.memory[addr as usize] = data;
    }
}

/// One clock as seen from outside the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceRow {
    pub clock: usize,
    pub addr: u16,
    pub data: u8,
    /// R/W pin level, 1 = read.
    pub rw: u8,
    pub vma: bool,
    /// PC after the clock edge.
    pub pc: u16,
    /// Instruction latched at the time, if the core is past reset.
    pub mnemonic: Option<&'static str>,
}

impl TraceRow {
    pub fn display(&self) -> String {
        let access = match (self.vma, self.rw) {
            (false, _) => "----",
            (true, 1) => "read",
            (true, _) => "WRIT",
        };
        format!(
            "{:5}  {:04X}  {:02X}  {}  pc={:04X}  {}",
            self.clock,
            self.addr,
            self.data,
            access,
            self.pc,
            self.mnemonic.unwrap_or("reset"),
        )
    }
}

/// Clock the core `cycles` times against `memory`.
pub fn run<V: Verification, A: Alu>(
    cpu: &mut M6800<V, A>,
    memory: &mut FakeMemory,
    cycles: usize,
) -> Vec<TraceRow> {
    (1..=cycles)
        .map(|clock| {
            let bus = cpu.execute_cycle(memory);
            let running = cpu.reset_state() == ResetState::Running;
            TraceRow {
                clock,
                addr: bus.addr,
                data: bus.data,
                rw: bus.rw.bit(),
                vma: bus.vma,
                pc: cpu.regs.pc,
                mnemonic: running.then(|| decode::mnemonic(cpu.regs.instr)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;

    #[test]
    fn demo_loops_on_bra() {
        let config = SimConfig::demo();
        let mut memory = FakeMemory::new(config.image());
        let mut cpu = M6800::new();
        let rows = run(&mut cpu, &mut memory, 16);
        assert_eq!(rows.len(), 16);

        assert!(!rows[0].vma);
        let addrs: Vec<u16> = rows[1..11].iter().map(|r| r.addr).collect();
        assert_eq!(
            addrs,
            vec![
                0xFFFE, 0xFFFF, // vector
                0x1234, 0x1235, 0x1236, 0x1236, // BRA *
                0x1234, 0x1235, 0x1236, 0x1236,
            ]
        );
        assert_eq!(rows[2].data, 0x34);
        // Clock 15 ends the third BRA, clock 16 fetches the next one.
        assert_eq!(rows[14].pc, 0x1234);
        assert_eq!(rows[15].pc, 0x1235);
        assert!(rows.iter().all(|r| r.rw == 1));
    }

    #[test]
    fn display_marks_dead_cycles() {
        let row = TraceRow {
            clock: 1,
            addr: 0,
            data: 0xFF,
            rw: 1,
            vma: false,
            pc: 0,
            mnemonic: None,
        };
        assert_eq!(row.display(), "    1  0000  FF  ----  pc=0000  reset");
    }
}
