use m6800_core::cpu::formal::plus16;
use m6800_core::cpu::m6800::AddressingMode;
use m6800_core::cpu::{FormalData, FormalError, Verification};

use super::{FormalEntry, expect_counts, expect_eq, expect_preserved};

/// JMP extended (0x7E) and indexed (0x6E).
#[derive(Clone, Copy, Debug, Default)]
pub struct JmpCheck;

impl Verification for JmpCheck {
    fn valid(&self, opcode: u8) -> bool {
        matches!(opcode, 0x6E | 0x7E)
    }

    fn check(&self, opcode: u8, data: &FormalData) -> Result<(), FormalError> {
        let pre = &data.pre;
        expect_preserved(opcode, data)?;
        expect_eq(opcode, "cc", pre.cc, data.post.cc)?;

        let operand = data.read(opcode, 0)?;
        expect_eq(opcode, "read addr 0", plus16(pre.pc, 1), operand.addr)?;

        let target = match AddressingMode::memory(opcode) {
            AddressingMode::Extended => {
                expect_counts(opcode, data, 2, 0)?;
                let low = data.read(opcode, 1)?;
                expect_eq(opcode, "read addr 1", plus16(pre.pc, 2), low.addr)?;
                u16::from_be_bytes([operand.data, low.data])
            }
            _ => {
                expect_counts(opcode, data, 1, 0)?;
                plus16(pre.x, operand.data as u16)
            }
        };
        expect_eq(opcode, "pc", target, data.post.pc)
    }
}

fn create() -> Box<dyn Verification> {
    Box::new(JmpCheck)
}

inventory::submit! {
    FormalEntry::new("jmp", "JMP extended and indexed", create)
}
