use super::modes::AddressingMode;
use super::registers::Reg8;
use super::{AluFunc, M6800, Step};
use crate::core::ReadWrite;

impl<V, A> M6800<V, A> {
    // ---- Accumulator with memory/immediate operand ----

    /// LDA, SUB, CMP, SBC, AND, BIT, EOR, ADC, ORA, ADD.
    /// Immediate and direct end at cycle 2, extended at 3, indexed at 4.
    pub(crate) fn op_alu(&self, step: &mut Step, func: AluFunc, store: bool) {
        let operand = match AddressingMode::memory(self.regs.instr) {
            AddressingMode::Immediate => {
                let value = self.mode_immediate8(step);
                (self.cycle == 2).then_some(value)
            }
            AddressingMode::Direct => {
                let addr = self.mode_direct(step);
                self.read_byte(step, 1, addr)
            }
            AddressingMode::Extended => {
                let addr = self.mode_extended(step);
                self.read_byte(step, 2, addr)
            }
            AddressingMode::Indexed => {
                let addr = self.mode_indexed(step);
                self.read_byte(step, 3, addr)
            }
            _ => return self.op_illegal(step),
        };

        if let Some(value) = operand {
            let acc = self.accumulator();
            step.route_alu(func, self.reg8(acc), value, store.then_some(acc));
            step.end_instr(self.regs.pc);
        }
    }

    // ---- Read-modify-write ----

    /// NEG, COM, LSR, ROR, ASR, ASL, ROL, DEC, INC, TST, CLR.
    ///
    /// `use1`/`use2` select whether each ALU input sees the operand or zero.
    pub(crate) fn op_alu2(
        &self,
        step: &mut Step,
        func: AluFunc,
        use1: bool,
        use2: bool,
        store: bool,
    ) {
        let pick = |value: u8, used: bool| if used { value } else { 0 };

        let (addr, read_cycle) = match AddressingMode::read_modify_write(self.regs.instr) {
            mode @ (AddressingMode::InherentA | AddressingMode::InherentB) => {
                let acc = if mode == AddressingMode::InherentA {
                    Reg8::A
                } else {
                    Reg8::B
                };
                let value = self.reg8(acc);
                step.route_alu(
                    func,
                    pick(value, use1),
                    pick(value, use2),
                    store.then_some(acc),
                );
                return step.end_instr(self.regs.pc);
            }
            AddressingMode::Extended => (self.mode_extended(step), 2),
            AddressingMode::Indexed => (self.mode_indexed(step), 3),
            _ => return self.op_illegal(step),
        };

        if let Some(value) = self.read_byte(step, read_cycle, addr) {
            // Result parks in TMP8 through an internal cycle.
            step.route_alu(func, pick(value, use1), pick(value, use2), Some(Reg8::Tmp8));
            step.next.signals.vma = false;
            step.next.signals.addr = addr;
            step.next.signals.rw = ReadWrite::Read;
        } else if self.cycle == read_cycle + 2 {
            step.next.signals.addr = addr;
            step.next.signals.dout = self.regs.tmp8;
            step.next.signals.rw = ReadWrite::Write;
            if !store {
                step.next.signals.vma = false;
            }
        } else if self.cycle == read_cycle + 3 {
            if store {
                step.record_write(self.signals.addr, self.signals.dout);
            }
            step.end_instr(self.regs.pc);
        }
    }
}
