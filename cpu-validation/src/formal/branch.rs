use m6800_core::cpu::formal::plus16;
use m6800_core::cpu::m6800::branch_condition;
use m6800_core::cpu::{FormalData, FormalError, Verification};

use super::{FormalEntry, expect_counts, expect_eq, expect_preserved};

/// Bcc (0x20-0x2F): the target depends only on the offset and the flags
/// going in.
#[derive(Clone, Copy, Debug, Default)]
pub struct BranchCheck;

impl Verification for BranchCheck {
    fn valid(&self, opcode: u8) -> bool {
        opcode & 0xF0 == 0x20
    }

    fn check(&self, opcode: u8, data: &FormalData) -> Result<(), FormalError> {
        let pre = &data.pre;
        expect_preserved(opcode, data)?;
        expect_counts(opcode, data, 1, 0)?;
        expect_eq(opcode, "cc", pre.cc, data.post.cc)?;

        let offset = data.read(opcode, 0)?;
        expect_eq(opcode, "read addr 0", plus16(pre.pc, 1), offset.addr)?;

        let next = plus16(pre.pc, 2);
        let target = if branch_condition(opcode, pre.cc) {
            plus16(next, offset.data as i8 as u16)
        } else {
            next
        };
        expect_eq(opcode, "pc", target, data.post.pc)
    }
}

fn create() -> Box<dyn Verification> {
    Box::new(BranchCheck)
}

inventory::submit! {
    FormalEntry::new("branch", "conditional and unconditional branches", create)
}
