//! Register file and register selectors.

/// Programmer-visible and internal registers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub x: u16,
    pub sp: u16,
    pub pc: u16,
    /// Instruction latch, loaded from data-in at the end of the fetch cycle.
    pub instr: u8,
    pub tmp8: u8,
    pub tmp16: u16,
}

/// 8-bit register selector. The `H`/`L` variants alias the high and low byte
/// of a 16-bit register; `Din`/`Dout` are the data pins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg8 {
    A,
    B,
    Xh,
    Xl,
    Sph,
    Spl,
    Pch,
    Pcl,
    Tmp8,
    Tmp16h,
    Tmp16l,
    Din,
    Dout,
}

impl Reg8 {
    pub const fn width(self) -> u8 {
        8
    }

    /// Data-in is driven by memory and can only be read.
    pub const fn is_writable(self) -> bool {
        !matches!(self, Reg8::Din)
    }
}

/// 16-bit register selector. `Addr` is the address bus latch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg16 {
    X,
    Sp,
    Pc,
    Tmp16,
    Addr,
}

impl Reg16 {
    pub const fn width(self) -> u8 {
        16
    }

    pub const fn is_writable(self) -> bool {
        true
    }
}

#[inline]
pub(crate) const fn hi(word: u16) -> u8 {
    (word >> 8) as u8
}

#[inline]
pub(crate) const fn lo(word: u16) -> u8 {
    word as u8
}

#[inline]
pub(crate) const fn with_hi(word: u16, byte: u8) -> u16 {
    (word & 0x00FF) | (byte as u16) << 8
}

#[inline]
pub(crate) const fn with_lo(word: u16, byte: u8) -> u16 {
    (word & 0xFF00) | byte as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_aliases_touch_one_half() {
        assert_eq!(hi(0x1234), 0x12);
        assert_eq!(lo(0x1234), 0x34);
        assert_eq!(with_hi(0x1234, 0xAB), 0xAB34);
        assert_eq!(with_lo(0x1234, 0xAB), 0x12AB);
    }

    #[test]
    fn only_data_in_is_read_only() {
        assert!(!Reg8::Din.is_writable());
        assert!(Reg8::Dout.is_writable());
        assert!(Reg8::Tmp16h.is_writable());
        assert_eq!(Reg8::A.width(), 8);
        assert_eq!(Reg16::Addr.width(), 16);
    }
}
