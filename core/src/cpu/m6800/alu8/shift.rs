use super::Ccr;

/// ASL: bit 7 → C, 0 → bit 0.
#[inline]
pub(super) fn asl(cc: &mut Ccr, val: u8) -> u8 {
    let result = val << 1;
    cc.set_flags_shift(result, val & 0x80 != 0);
    result
}

/// ASR: bit 7 preserved, bit 0 → C.
#[inline]
pub(super) fn asr(cc: &mut Ccr, val: u8) -> u8 {
    let result = ((val as i8) >> 1) as u8;
    cc.set_flags_shift(result, val & 0x01 != 0);
    result
}

/// LSR: 0 → bit 7, bit 0 → C. N always ends up clear.
#[inline]
pub(super) fn lsr(cc: &mut Ccr, val: u8) -> u8 {
    let result = val >> 1;
    cc.set_flags_shift(result, val & 0x01 != 0);
    result
}

/// ROL: bit 7 → C, old C → bit 0.
#[inline]
pub(super) fn rol(cc: &mut Ccr, val: u8, carry_in: bool) -> u8 {
    let result = (val << 1) | carry_in as u8;
    cc.set_flags_shift(result, val & 0x80 != 0);
    result
}

/// ROR: bit 0 → C, old C → bit 7.
#[inline]
pub(super) fn ror(cc: &mut Ccr, val: u8, carry_in: bool) -> u8 {
    let result = (val >> 1) | ((carry_in as u8) << 7);
    cc.set_flags_shift(result, val & 0x01 != 0);
    result
}
