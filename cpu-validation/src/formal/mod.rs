//! Per-instruction property checkers.
//!
//! Each checker self-registers via [`inventory::submit!`] with a
//! [`FormalEntry`] holding its CLI name and a factory. Callers attach one to
//! a core with [`M6800::with_verification`](m6800_core::cpu::m6800::M6800)
//! and read the outcomes back from the hook.

use m6800_core::cpu::m6800::CcFlag;
use m6800_core::cpu::{FormalData, FormalError, Verification};

mod branch;
mod flag;
mod jmp;
mod nop;
mod sta;

pub use branch::BranchCheck;
pub use flag::FlagCheck;
pub use jmp::JmpCheck;
pub use nop::NopCheck;
pub use sta::StaCheck;

/// Describes a registered checker.
pub struct FormalEntry {
    /// CLI name used to select this checker (e.g., "jmp").
    pub name: &'static str,
    pub description: &'static str,
    pub create: fn() -> Box<dyn Verification>,
}

impl FormalEntry {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        create: fn() -> Box<dyn Verification>,
    ) -> Self {
        Self {
            name,
            description,
            create,
        }
    }
}

inventory::collect!(FormalEntry);

/// Return all registered checkers, sorted by name.
pub fn all() -> Vec<&'static FormalEntry> {
    let mut entries: Vec<_> = inventory::iter::<FormalEntry>.into_iter().collect();
    entries.sort_by_key(|e| e.name);
    entries
}

/// Look up a checker by its CLI name.
pub fn find(name: &str) -> Option<&'static FormalEntry> {
    inventory::iter::<FormalEntry>
        .into_iter()
        .find(|e| e.name == name)
}

pub fn expect_eq<T>(opcode: u8, property: &'static str, expected: T, actual: T) -> Result<(), FormalError>
where
    T: Into<u32> + PartialEq + Copy,
{
    if expected == actual {
        Ok(())
    } else {
        Err(FormalError::mismatch(opcode, property, expected, actual))
    }
}

/// A, B, X and SP came out as they went in.
pub fn expect_preserved(opcode: u8, data: &FormalData) -> Result<(), FormalError> {
    let (pre, post) = (&data.pre, &data.post);
    expect_eq(opcode, "a", pre.a, post.a)?;
    expect_eq(opcode, "b", pre.b, post.b)?;
    expect_eq(opcode, "x", pre.x, post.x)?;
    expect_eq(opcode, "sp", pre.sp, post.sp)
}

pub fn expect_counts(
    opcode: u8,
    data: &FormalData,
    reads: usize,
    writes: usize,
) -> Result<(), FormalError> {
    expect_eq(opcode, "reads", reads as u32, data.addresses_read() as u32)?;
    expect_eq(opcode, "writes", writes as u32, data.addresses_written() as u32)
}

/// The named flags hold the given values; every other condition code bit is
/// unchanged.
pub fn assert_flags(
    opcode: u8,
    data: &FormalData,
    expected: &[(CcFlag, bool)],
) -> Result<(), FormalError> {
    let mut mask = 0u8;
    for &(flag, set) in expected {
        let bit = flag as u8;
        mask |= bit;
        expect_eq(
            opcode,
            flag_name(flag),
            set as u8,
            (data.post.cc & bit != 0) as u8,
        )?;
    }
    expect_eq(opcode, "other flags", data.pre.cc & !mask, data.post.cc & !mask)
}

fn flag_name(flag: CcFlag) -> &'static str {
    match flag {
        CcFlag::C => "flag C",
        CcFlag::V => "flag V",
        CcFlag::Z => "flag Z",
        CcFlag::N => "flag N",
        CcFlag::I => "flag I",
        CcFlag::H => "flag H",
    }
}
