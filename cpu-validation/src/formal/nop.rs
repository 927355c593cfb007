use m6800_core::cpu::formal::plus16;
use m6800_core::cpu::{FormalData, FormalError, Verification};

use super::{FormalEntry, expect_counts, expect_eq, expect_preserved};

/// NOP only moves PC on by one.
#[derive(Clone, Copy, Debug, Default)]
pub struct NopCheck;

impl Verification for NopCheck {
    fn valid(&self, opcode: u8) -> bool {
        opcode == 0x01
    }

    fn check(&self, opcode: u8, data: &FormalData) -> Result<(), FormalError> {
        expect_preserved(opcode, data)?;
        expect_counts(opcode, data, 0, 0)?;
        expect_eq(opcode, "cc", data.pre.cc, data.post.cc)?;
        expect_eq(opcode, "pc", plus16(data.pre.pc, 1), data.post.pc)
    }
}

fn create() -> Box<dyn Verification> {
    Box::new(NopCheck)
}

inventory::submit! {
    FormalEntry::new("nop", "NOP", create)
}
