use super::registers::Reg8;
use super::{AluFunc, M6800, Step};

impl<V, A> M6800<V, A> {
    /// NOP (0x01): 2 cycles.
    pub(crate) fn op_nop(&self, step: &mut Step) {
        step.end_instr(self.regs.pc);
    }

    /// TAP (0x06): A to condition codes.
    pub(crate) fn op_tap(&self, step: &mut Step) {
        step.route_alu(AluFunc::Tap, self.regs.a, 0, None);
        step.end_instr(self.regs.pc);
    }

    /// TPA (0x07): condition codes to A.
    pub(crate) fn op_tpa(&self, step: &mut Step) {
        step.route_alu(AluFunc::Tpa, 0, 0, Some(Reg8::A));
        step.end_instr(self.regs.pc);
    }

    /// CLx/SEx: bit 0 of the opcode picks set over clear.
    pub(crate) fn op_clear_set(&self, step: &mut Step, clear: AluFunc, set: AluFunc) {
        let func = if self.regs.instr & 1 != 0 { set } else { clear };
        step.route_alu(func, 0, 0, None);
        step.end_instr(self.regs.pc);
    }

    /// INX (0x08) / DEX (0x09): 4 cycles, two of them with X on the address
    /// lines and VMA low. Only Z is affected.
    pub(crate) fn op_inx_dex(&self, step: &mut Step) {
        let x = self.regs.x;
        match self.cycle {
            1 => {
                step.next.signals.vma = false;
                step.next.signals.addr = x;
                step.next.regs.x = if self.regs.instr & 1 != 0 {
                    x.wrapping_sub(1)
                } else {
                    x.wrapping_add(1)
                };
            }
            2 => {
                step.next.signals.vma = false;
                step.next.signals.addr = x;
            }
            _ => {
                let func = if x == 0 { AluFunc::Sez } else { AluFunc::Clz };
                step.route_alu(func, 0, 0, None);
                step.end_instr(self.regs.pc);
            }
        }
    }
}
