//! Addressing-mode resolvers.
//!
//! Each resolver is called on every execute cycle of the instruction that
//! uses it. It returns the operand or effective address for the current cycle
//! (only meaningful from the cycle given in its doc) and stages the PC
//! advance and bus requests for the cycles it owns.

use super::registers::{Reg8, hi};
use super::{M6800, Step};
use crate::core::ReadWrite;

/// Addressing mode selected by opcode bits 4–5.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressingMode {
    Immediate,
    Direct,
    Indexed,
    Extended,
    InherentA,
    InherentB,
}

#[inline]
pub const fn mode_bits(opcode: u8) -> u8 {
    (opcode >> 4) & 0b11
}

impl AddressingMode {
    /// Modes of the memory-operand families (ALU, STA, JMP).
    pub const fn memory(opcode: u8) -> Self {
        match mode_bits(opcode) {
            0b00 => AddressingMode::Immediate,
            0b01 => AddressingMode::Direct,
            0b10 => AddressingMode::Indexed,
            _ => AddressingMode::Extended,
        }
    }

    /// Modes of the read-modify-write family.
    pub const fn read_modify_write(opcode: u8) -> Self {
        match mode_bits(opcode) {
            0b00 => AddressingMode::InherentA,
            0b01 => AddressingMode::InherentB,
            0b10 => AddressingMode::Indexed,
            _ => AddressingMode::Extended,
        }
    }
}

impl<V, A> M6800<V, A> {
    /// Step PC over one operand byte and put the new PC on the address bus.
    #[inline]
    fn advance_pc(&self, step: &mut Step) {
        let pc = self.regs.pc.wrapping_add(1);
        step.next.regs.pc = pc;
        step.next.signals.addr = pc;
        step.next.signals.rw = ReadWrite::Read;
    }

    /// Immediate 8-bit operand. Data-in at cycle 1, TMP8 afterwards.
    pub(crate) fn mode_immediate8(&self, step: &mut Step) -> u8 {
        if self.cycle != 1 {
            return self.regs.tmp8;
        }
        step.next.regs.tmp8 = self.din;
        self.advance_pc(step);
        step.record_read(self.signals.addr, self.din);
        self.din
    }

    /// Zero-page address. Valid from cycle 1; TMP16 holds it afterwards.
    pub(crate) fn mode_direct(&self, step: &mut Step) -> u16 {
        if self.cycle != 1 {
            return self.regs.tmp16;
        }
        step.next.set8(Reg8::Tmp16h, 0);
        step.next.set8(Reg8::Tmp16l, self.din);
        self.advance_pc(step);
        step.record_read(self.signals.addr, self.din);
        self.din as u16
    }

    /// X plus an unsigned offset byte. Only valid after cycle 2; both
    /// resolution cycles leave the next cycle dead.
    pub(crate) fn mode_indexed(&self, step: &mut Step) -> u16 {
        match self.cycle {
            1 => {
                step.next.set8(Reg8::Tmp16h, 0);
                step.next.set8(Reg8::Tmp16l, self.din);
                self.advance_pc(step);
                step.next.signals.vma = false;
                step.record_read(self.signals.addr, self.din);
            }
            2 => {
                step.next.regs.tmp16 = self.regs.tmp16.wrapping_add(self.regs.x);
                step.next.signals.vma = false;
            }
            _ => {}
        }
        self.regs.tmp16
    }

    /// 16-bit big-endian address. High byte at cycle 1, full address from
    /// cycle 2; TMP16 holds it afterwards.
    pub(crate) fn mode_extended(&self, step: &mut Step) -> u16 {
        match self.cycle {
            1 => {
                step.next.set8(Reg8::Tmp16h, self.din);
                self.advance_pc(step);
                step.record_read(self.signals.addr, self.din);
                self.regs.tmp16
            }
            2 => {
                step.next.set8(Reg8::Tmp16l, self.din);
                step.next.regs.pc = self.regs.pc.wrapping_add(1);
                step.record_read(self.signals.addr, self.din);
                u16::from_be_bytes([hi(self.regs.tmp16), self.din])
            }
            _ => self.regs.tmp16,
        }
    }

    /// Put `addr` on the bus for a read during `cycle`; the byte shows up on
    /// data-in during `cycle + 1`, which is the only cycle this returns it.
    pub(crate) fn read_byte(&self, step: &mut Step, cycle: u8, addr: u16) -> Option<u8> {
        if self.cycle == cycle {
            step.next.signals.addr = addr;
            step.next.signals.rw = ReadWrite::Read;
        }
        if self.cycle == cycle + 1 {
            step.record_read(self.signals.addr, self.din);
            return Some(self.din);
        }
        None
    }
}
