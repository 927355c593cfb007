//! Hook for per-instruction property checking.
//!
//! A [`Verification`] picks the opcodes it cares about and gets one
//! [`FormalData`] record per completed instruction: registers before and
//! after, plus every operand read and memory write in bus order. The CPU only
//! reports; what a failed check means is up to whoever owns the hook.

use log::warn;
use thiserror::Error;

use crate::core::BusAccess;
use crate::cpu::state::M6800State;

/// A property that did not hold for one executed instruction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormalError {
    #[error("opcode {opcode:#04x}: {property}: expected {expected:#06x}, got {actual:#06x}")]
    Mismatch {
        opcode: u8,
        property: &'static str,
        expected: u32,
        actual: u32,
    },
    #[error("opcode {opcode:#04x}: no {kind} #{index} recorded")]
    MissingAccess {
        opcode: u8,
        kind: &'static str,
        index: usize,
    },
}

impl FormalError {
    pub fn mismatch(
        opcode: u8,
        property: &'static str,
        expected: impl Into<u32>,
        actual: impl Into<u32>,
    ) -> Self {
        FormalError::Mismatch {
            opcode,
            property,
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Everything observed between two instruction boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormalData {
    pub pre: M6800State,
    pub post: M6800State,
    pub reads: Vec<BusAccess>,
    pub writes: Vec<BusAccess>,
}

impl FormalData {
    pub fn addresses_read(&self) -> usize {
        self.reads.len()
    }

    pub fn addresses_written(&self) -> usize {
        self.writes.len()
    }

    pub fn read(&self, opcode: u8, index: usize) -> Result<BusAccess, FormalError> {
        self.reads
            .get(index)
            .copied()
            .ok_or(FormalError::MissingAccess {
                opcode,
                kind: "read",
                index,
            })
    }

    pub fn write(&self, opcode: u8, index: usize) -> Result<BusAccess, FormalError> {
        self.writes
            .get(index)
            .copied()
            .ok_or(FormalError::MissingAccess {
                opcode,
                kind: "write",
                index,
            })
    }
}

/// 16-bit wrapping add, the way the address bus sees it.
pub fn plus16(base: u16, offset: u16) -> u16 {
    base.wrapping_add(offset)
}

/// Property checker for a set of instructions.
pub trait Verification {
    /// Whether instructions with this opcode should be snapshotted and checked.
    fn valid(&self, opcode: u8) -> bool;

    fn check(&self, opcode: u8, data: &FormalData) -> Result<(), FormalError>;
}

impl<V: Verification + ?Sized> Verification for Box<V> {
    fn valid(&self, opcode: u8) -> bool {
        (**self).valid(opcode)
    }

    fn check(&self, opcode: u8, data: &FormalData) -> Result<(), FormalError> {
        (**self).check(opcode, data)
    }
}

/// Stand-in used when no checker is attached. Never selects an opcode.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoVerification;

impl Verification for NoVerification {
    fn valid(&self, _opcode: u8) -> bool {
        false
    }

    fn check(&self, _opcode: u8, _data: &FormalData) -> Result<(), FormalError> {
        Ok(())
    }
}

/// What the CPU reports to the hook for one clock cycle.
pub(crate) struct Observation {
    /// Cycle 0 of a normal (post-reset) instruction.
    pub boundary: bool,
    /// Byte on data-in; at a boundary this is the opcode being fetched.
    pub din: u8,
    /// Instruction latch, still holding the instruction that just finished.
    pub instr: u8,
    pub state: M6800State,
    pub read: Option<BusAccess>,
    pub write: Option<BusAccess>,
}

/// Collects [`FormalData`] for a [`Verification`] and keeps the outcomes.
pub struct FormalHook<V> {
    verification: V,
    data: FormalData,
    snapshot_taken: bool,
    checked: usize,
    failures: Vec<FormalError>,
}

impl<V> FormalHook<V> {
    /// Drop the open record, if any.
    pub(crate) fn reset(&mut self) {
        self.snapshot_taken = false;
        self.data = FormalData::default();
    }
}

impl<V: Verification> FormalHook<V> {
    pub fn new(verification: V) -> Self {
        Self {
            verification,
            data: FormalData::default(),
            snapshot_taken: false,
            checked: 0,
            failures: Vec::new(),
        }
    }

    /// Number of instructions checked so far.
    pub fn checked(&self) -> usize {
        self.checked
    }

    pub fn failures(&self) -> &[FormalError] {
        &self.failures
    }

    /// Record of the instruction currently being observed.
    pub fn data(&self) -> &FormalData {
        &self.data
    }

    pub(crate) fn observe(&mut self, obs: &Observation) {
        if obs.boundary {
            // The previous instruction finished on the last clock edge.
            if self.snapshot_taken {
                self.data.post = obs.state;
                self.checked += 1;
                if let Err(e) = self.verification.check(obs.instr, &self.data) {
                    warn!("formal check failed: {e}");
                    self.failures.push(e);
                }
            }

            self.snapshot_taken = self.verification.valid(obs.din);
            if self.snapshot_taken {
                self.data = FormalData {
                    pre: obs.state,
                    ..FormalData::default()
                };
            }
        }

        if !self.snapshot_taken {
            return;
        }
        if let Some(read) = obs.read {
            self.data.reads.push(read);
        }
        if let Some(write) = obs.write {
            self.data.writes.push(write);
        }
    }
}
