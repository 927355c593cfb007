use super::Ccr;
use crate::cpu::m6800::CcFlag;

/// LD: pass the operand through. N, Z; V cleared.
#[inline]
pub(super) fn ld(cc: &mut Ccr, operand: u8) -> u8 {
    cc.set_flags_logical(operand);
    operand
}

/// ADD/ADC: reg + operand (+ carry). Sets H, N, Z, V, C.
#[inline]
pub(super) fn add(cc: &mut Ccr, reg: u8, operand: u8, carry_in: bool) -> u8 {
    let sum = reg as u16 + operand as u16 + carry_in as u16;
    let result = sum as u8;
    let half_carry = (reg & 0x0F) + (operand & 0x0F) + carry_in as u8 > 0x0F;
    let overflow = (reg ^ operand) & 0x80 == 0 && (reg ^ result) & 0x80 != 0;
    cc.set_flag(CcFlag::H, half_carry);
    cc.set_flags_arithmetic(result, overflow, sum > 0xFF);
    result
}

/// SUB/SBC: reg - operand (- carry). Sets N, Z, V, C (C = borrow).
#[inline]
pub(super) fn sub(cc: &mut Ccr, reg: u8, operand: u8, borrow_in: bool) -> u8 {
    let diff = (reg as u16)
        .wrapping_sub(operand as u16)
        .wrapping_sub(borrow_in as u16);
    let result = diff as u8;
    let borrow = (operand as u16 + borrow_in as u16) > reg as u16;
    let overflow = (reg ^ operand) & 0x80 != 0 && (reg ^ result) & 0x80 != 0;
    cc.set_flags_arithmetic(result, overflow, borrow);
    result
}

#[inline]
pub(super) fn and(cc: &mut Ccr, reg: u8, operand: u8) -> u8 {
    let result = reg & operand;
    cc.set_flags_logical(result);
    result
}

#[inline]
pub(super) fn eor(cc: &mut Ccr, reg: u8, operand: u8) -> u8 {
    let result = reg ^ operand;
    cc.set_flags_logical(result);
    result
}

#[inline]
pub(super) fn ora(cc: &mut Ccr, reg: u8, operand: u8) -> u8 {
    let result = reg | operand;
    cc.set_flags_logical(result);
    result
}
