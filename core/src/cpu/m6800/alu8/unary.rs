use super::Ccr;
use crate::cpu::m6800::{CC_RESERVED, CcFlag};

/// COM: one's complement. N, Z; V cleared, C set.
#[inline]
pub(super) fn com(cc: &mut Ccr, val: u8) -> u8 {
    let result = !val;
    cc.set_flags_logical(result);
    cc.set_flag(CcFlag::C, true);
    result
}

/// INC: N, Z, V (set on 0x7F → 0x80). C untouched.
#[inline]
pub(super) fn inc(cc: &mut Ccr, val: u8) -> u8 {
    let result = val.wrapping_add(1);
    cc.set_flag(CcFlag::N, result & 0x80 != 0);
    cc.set_flag(CcFlag::Z, result == 0);
    cc.set_flag(CcFlag::V, val == 0x7F);
    result
}

/// DEC: N, Z, V (set on 0x80 → 0x7F). C untouched.
#[inline]
pub(super) fn dec(cc: &mut Ccr, val: u8) -> u8 {
    let result = val.wrapping_sub(1);
    cc.set_flag(CcFlag::N, result & 0x80 != 0);
    cc.set_flag(CcFlag::Z, result == 0);
    cc.set_flag(CcFlag::V, val == 0x80);
    result
}

/// TAP: the whole register comes from the source byte.
#[inline]
pub(super) fn tap(cc: &mut Ccr, val: u8) -> u8 {
    cc.0 = val | CC_RESERVED;
    0
}

#[inline]
pub(super) fn tpa(cc: &Ccr) -> u8 {
    cc.visible()
}

/// Set or clear a single flag (CLC, SEV, SEZ, ...).
#[inline]
pub(super) fn change(cc: &mut Ccr, flag: CcFlag, set: bool) -> u8 {
    cc.set_flag(flag, set);
    0
}
