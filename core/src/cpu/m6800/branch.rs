use super::modes::AddressingMode;
use super::{CcFlag, M6800, Step};

/// Whether a conditional branch with this opcode is taken under `cc`.
///
/// Bits 1–3 pick the base condition, bit 0 inverts it.
pub fn branch_condition(opcode: u8, cc: u8) -> bool {
    let flag = |f: CcFlag| cc & f as u8 != 0;
    let (c, v, z, n) = (
        flag(CcFlag::C),
        flag(CcFlag::V),
        flag(CcFlag::Z),
        flag(CcFlag::N),
    );

    let base = match (opcode >> 1) & 0b111 {
        0b000 => true,          // BRA
        0b001 => !(c || z),     // BHI
        0b010 => !c,            // BCC
        0b011 => !z,            // BNE
        0b100 => !v,            // BVC
        0b101 => !n,            // BPL
        0b110 => !(n ^ v),      // BGE
        _ => !(z || (n ^ v)),   // BGT
    };
    base ^ (opcode & 1 != 0)
}

impl<V, A> M6800<V, A> {
    /// Bcc: 4 cycles whether taken or not.
    pub(crate) fn op_branch(&self, step: &mut Step) {
        let offset = self.mode_immediate8(step);

        match self.cycle {
            // PC already points past the offset byte.
            2 => step.next.regs.tmp16 = self.regs.pc.wrapping_add(offset as i8 as u16),
            3 => {
                let target = if branch_condition(self.regs.instr, self.cc) {
                    self.regs.tmp16
                } else {
                    self.regs.pc
                };
                step.end_instr(target);
            }
            _ => {}
        }
    }

    /// JMP extended (3 cycles) or indexed (4 cycles).
    pub(crate) fn op_jmp(&self, step: &mut Step) {
        match AddressingMode::memory(self.regs.instr) {
            AddressingMode::Extended => {
                let target = self.mode_extended(step);
                if self.cycle == 2 {
                    step.end_instr(target);
                }
            }
            AddressingMode::Indexed => {
                let target = self.mode_indexed(step);
                if self.cycle == 3 {
                    step.end_instr(target);
                }
            }
            _ => self.op_illegal(step),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const C: u8 = CcFlag::C as u8;
    const V: u8 = CcFlag::V as u8;
    const Z: u8 = CcFlag::Z as u8;
    const N: u8 = CcFlag::N as u8;

    #[test]
    fn always_and_never() {
        for cc in [0, C, V, Z, N, 0xFF] {
            assert!(branch_condition(0x20, cc));
            assert!(!branch_condition(0x21, cc));
        }
    }

    #[test]
    fn unsigned_compares() {
        assert!(branch_condition(0x22, 0)); // BHI
        assert!(!branch_condition(0x22, Z));
        assert!(branch_condition(0x23, C)); // BLS
        assert!(branch_condition(0x24, 0)); // BCC
        assert!(branch_condition(0x25, C)); // BCS
    }

    #[test]
    fn signed_compares() {
        assert!(branch_condition(0x2C, N | V)); // BGE
        assert!(branch_condition(0x2D, N)); // BLT
        assert!(branch_condition(0x2E, 0)); // BGT
        assert!(!branch_condition(0x2E, Z));
        assert!(branch_condition(0x2F, V)); // BLE
    }

    #[test]
    fn single_flag_tests() {
        assert!(branch_condition(0x26, 0)); // BNE
        assert!(branch_condition(0x27, Z)); // BEQ
        assert!(branch_condition(0x28, 0)); // BVC
        assert!(branch_condition(0x29, V)); // BVS
        assert!(branch_condition(0x2A, 0)); // BPL
        assert!(branch_condition(0x2B, N)); // BMI
    }
}
