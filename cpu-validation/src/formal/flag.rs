use m6800_core::cpu::formal::plus16;
use m6800_core::cpu::m6800::CcFlag;
use m6800_core::cpu::{FormalData, FormalError, Verification};

use super::{FormalEntry, assert_flags, expect_counts, expect_eq, expect_preserved};

/// CLV, SEV, CLC, SEC, CLI, SEI.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlagCheck;

impl Verification for FlagCheck {
    fn valid(&self, opcode: u8) -> bool {
        (0x0A..=0x0F).contains(&opcode)
    }

    fn check(&self, opcode: u8, data: &FormalData) -> Result<(), FormalError> {
        expect_preserved(opcode, data)?;
        expect_counts(opcode, data, 0, 0)?;
        expect_eq(opcode, "pc", plus16(data.pre.pc, 1), data.post.pc)?;

        let flag = match opcode & 0xFE {
            0x0A => CcFlag::V,
            0x0C => CcFlag::C,
            _ => CcFlag::I,
        };
        assert_flags(opcode, data, &[(flag, opcode & 1 != 0)])
    }
}

fn create() -> Box<dyn Verification> {
    Box::new(FlagCheck)
}

inventory::submit! {
    FormalEntry::new("flag", "CLV/SEV, CLC/SEC, CLI/SEI", create)
}
