//! The 8-bit ALU the core routes operands through.
//!
//! Purely combinational: given a function, two inputs and the current condition
//! codes it yields a result byte and the next condition codes. Functions that
//! work on a single value take it from `input2`; `input1` is the accumulator
//! side for two-operand functions and the source for TAP.

use super::{CC_RESERVED, CcFlag};

mod binary;
mod shift;
mod unary;


#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluFunc {
    /// ALU idle; flags pass through.
    #[default]
    None,
    Ld,
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Eor,
    Ora,
    Com,
    Inc,
    Dec,
    Asl,
    Asr,
    Lsr,
    Rol,
    Ror,
    /// Accumulator to condition codes.
    Tap,
    /// Condition codes to accumulator.
    Tpa,
    Clc,
    Sec,
    Clv,
    Sev,
    Cli,
    Sei,
    Clz,
    Sez,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluOutput {
    pub result: u8,
    pub flags: u8,
}

/// Functional unit contract: pure and defined for every [`AluFunc`].
pub trait Alu {
    fn apply(&self, func: AluFunc, input1: u8, input2: u8, flags: u8) -> AluOutput;
}

/// 6800 ALU with the real part's flag semantics.
#[derive(Clone, Copy, Debug, Default)]
pub struct Alu8;

impl Alu for Alu8 {
    fn apply(&self, func: AluFunc, input1: u8, input2: u8, flags: u8) -> AluOutput {
        let mut cc = Ccr(flags);
        let carry = cc.is_set(CcFlag::C);

        let result = match func {
            AluFunc::None => 0,
            AluFunc::Ld => binary::ld(&mut cc, input2),
            AluFunc::Add => binary::add(&mut cc, input1, input2, false),
            AluFunc::Adc => binary::add(&mut cc, input1, input2, carry),
            AluFunc::Sub => binary::sub(&mut cc, input1, input2, false),
            AluFunc::Sbc => binary::sub(&mut cc, input1, input2, carry),
            AluFunc::And => binary::and(&mut cc, input1, input2),
            AluFunc::Eor => binary::eor(&mut cc, input1, input2),
            AluFunc::Ora => binary::ora(&mut cc, input1, input2),
            AluFunc::Com => unary::com(&mut cc, input2),
            AluFunc::Inc => unary::inc(&mut cc, input2),
            AluFunc::Dec => unary::dec(&mut cc, input2),
            AluFunc::Asl => shift::asl(&mut cc, input2),
            AluFunc::Asr => shift::asr(&mut cc, input2),
            AluFunc::Lsr => shift::lsr(&mut cc, input2),
            AluFunc::Rol => shift::rol(&mut cc, input2, carry),
            AluFunc::Ror => shift::ror(&mut cc, input2, carry),
            AluFunc::Tap => unary::tap(&mut cc, input1),
            AluFunc::Tpa => unary::tpa(&cc),
            AluFunc::Clc => unary::change(&mut cc, CcFlag::C, false),
            AluFunc::Sec => unary::change(&mut cc, CcFlag::C, true),
            AluFunc::Clv => unary::change(&mut cc, CcFlag::V, false),
            AluFunc::Sev => unary::change(&mut cc, CcFlag::V, true),
            AluFunc::Cli => unary::change(&mut cc, CcFlag::I, false),
            AluFunc::Sei => unary::change(&mut cc, CcFlag::I, true),
            AluFunc::Clz => unary::change(&mut cc, CcFlag::Z, false),
            AluFunc::Sez => unary::change(&mut cc, CcFlag::Z, true),
        };

        AluOutput {
            result,
            flags: cc.0,
        }
    }
}

/// Working copy of the condition codes while a function evaluates.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Ccr(pub(crate) u8);

impl Ccr {
    #[inline]
    pub(crate) fn is_set(&self, flag: CcFlag) -> bool {
        self.0 & flag as u8 != 0
    }

    #[inline]
    pub(crate) fn set_flag(&mut self, flag: CcFlag, set: bool) {
        if set {
            self.0 |= flag as u8
        } else {
            self.0 &= !(flag as u8)
        }
    }

    /// N, Z from the result; V cleared.
    #[inline]
    pub(crate) fn set_flags_logical(&mut self, result: u8) {
        self.set_flag(CcFlag::N, result & 0x80 != 0);
        self.set_flag(CcFlag::Z, result == 0);
        self.set_flag(CcFlag::V, false);
    }

    #[inline]
    pub(crate) fn set_flags_arithmetic(&mut self, result: u8, overflow: bool, carry: bool) {
        self.set_flag(CcFlag::N, result & 0x80 != 0);
        self.set_flag(CcFlag::Z, result == 0);
        self.set_flag(CcFlag::V, overflow);
        self.set_flag(CcFlag::C, carry);
    }

    /// Shifts and rotates: N, Z from the result, C from the bit shifted out,
    /// V = N XOR C after the operation.
    #[inline]
    pub(crate) fn set_flags_shift(&mut self, result: u8, carry: bool) {
        let n = result & 0x80 != 0;
        self.set_flag(CcFlag::N, n);
        self.set_flag(CcFlag::Z, result == 0);
        self.set_flag(CcFlag::C, carry);
        self.set_flag(CcFlag::V, n ^ carry);
    }

    /// Value as read back by TPA.
    #[inline]
    pub(crate) fn visible(&self) -> u8 {
        self.0 | CC_RESERVED
    }
}
