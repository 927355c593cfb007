use m6800_core::cpu::formal::plus16;
use m6800_core::cpu::m6800::{AddressingMode, CcFlag};
use m6800_core::cpu::{FormalData, FormalError, Verification};

use super::{FormalEntry, assert_flags, expect_counts, expect_eq, expect_preserved};

/// STAA/STAB in direct, extended and indexed modes.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaCheck;

impl Verification for StaCheck {
    fn valid(&self, opcode: u8) -> bool {
        // 1--10111 or 1-100111
        opcode & 0x9F == 0x97 || opcode & 0xBF == 0xA7
    }

    fn check(&self, opcode: u8, data: &FormalData) -> Result<(), FormalError> {
        let pre = &data.pre;
        let value = if opcode & 0x40 != 0 { pre.b } else { pre.a };
        expect_preserved(opcode, data)?;

        let first = data.read(opcode, 0)?;
        expect_eq(opcode, "read addr 0", plus16(pre.pc, 1), first.addr)?;

        let (target, length) = match AddressingMode::memory(opcode) {
            AddressingMode::Direct => {
                expect_counts(opcode, data, 1, 1)?;
                (first.data as u16, 2)
            }
            AddressingMode::Extended => {
                expect_counts(opcode, data, 2, 1)?;
                let low = data.read(opcode, 1)?;
                expect_eq(opcode, "read addr 1", plus16(pre.pc, 2), low.addr)?;
                (u16::from_be_bytes([first.data, low.data]), 3)
            }
            _ => {
                expect_counts(opcode, data, 1, 1)?;
                (plus16(pre.x, first.data as u16), 2)
            }
        };

        expect_eq(opcode, "pc", plus16(pre.pc, length), data.post.pc)?;
        let write = data.write(opcode, 0)?;
        expect_eq(opcode, "write addr", target, write.addr)?;
        expect_eq(opcode, "write data", value, write.data)?;

        assert_flags(
            opcode,
            data,
            &[
                (CcFlag::Z, value == 0),
                (CcFlag::N, value & 0x80 != 0),
                (CcFlag::V, false),
            ],
        )
    }
}

fn create() -> Box<dyn Verification> {
    Box::new(StaCheck)
}

inventory::submit! {
    FormalEntry::new("sta", "STA direct, extended and indexed", create)
}
