use super::modes::AddressingMode;
use super::{AluFunc, M6800, Step};
use crate::core::ReadWrite;

impl<V, A> M6800<V, A> {
    /// STA direct/extended/indexed: 4, 5 or 6 cycles.
    ///
    /// The address is put out with VMA low one cycle before the write. The
    /// stored value goes through the ALU as a load: N, Z updated, V cleared.
    pub(crate) fn op_store(&self, step: &mut Step) {
        let (addr, setup) = match AddressingMode::memory(self.regs.instr) {
            AddressingMode::Direct => (self.mode_direct(step), 1),
            AddressingMode::Extended => (self.mode_extended(step), 2),
            AddressingMode::Indexed => (self.mode_indexed(step), 3),
            _ => return self.op_illegal(step),
        };
        let acc = self.accumulator();

        if self.cycle == setup {
            step.next.signals.vma = false;
            step.next.signals.addr = addr;
            step.next.signals.rw = ReadWrite::Read;
        } else if self.cycle == setup + 1 {
            step.next.signals.addr = addr;
            step.next.signals.dout = self.reg8(acc);
            step.next.signals.rw = ReadWrite::Write;
        } else if self.cycle == setup + 2 {
            step.record_write(self.signals.addr, self.signals.dout);
            step.route_alu(AluFunc::Ld, 0, self.reg8(acc), None);
            step.end_instr(self.regs.pc);
        }
    }
}
