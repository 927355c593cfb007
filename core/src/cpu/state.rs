//! CPU state snapshot types and traits

/// Trait for CPU types that can provide state snapshots
pub trait CpuStateTrait {
    type Snapshot;
    fn snapshot(&self) -> Self::Snapshot;
}

/// M6800 programmer-visible state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct M6800State {
    pub a: u8,   // Accumulator A
    pub b: u8,   // Accumulator B
    pub x: u16,  // Index register X
    pub sp: u16, // Stack pointer
    pub pc: u16, // Program counter
    pub cc: u8,  // Condition codes
}
