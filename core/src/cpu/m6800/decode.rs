//! Opcode decode table.
//!
//! Entries are bit patterns with don't-care positions, tried in order; the
//! first match wins. The table is folded into a 256-entry dispatch array at
//! compile time.

use super::alu8::AluFunc;
use super::modes::AddressingMode;

/// Handler selected for an opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Nop,
    Tap,
    Tpa,
    IncDecX,
    ClearSetV,
    ClearSetC,
    ClearSetI,
    Branch,
    /// Read-modify-write on an accumulator or a memory byte. `operand1` and
    /// `operand2` say whether each ALU input gets the value or zero.
    Alu2 {
        func: AluFunc,
        operand1: bool,
        operand2: bool,
        store: bool,
    },
    Jmp,
    /// Accumulator op with a memory or immediate operand.
    Alu {
        func: AluFunc,
        store: bool,
    },
    Store,
    Illegal,
}

pub struct DecodeEntry {
    pub mask: u8,
    pub bits: u8,
    pub mnemonic: &'static str,
    pub op: Op,
}

impl DecodeEntry {
    /// `pattern` is eight characters, MSB first: `0`, `1` or `-` (don't care).
    const fn new(pattern: &str, mnemonic: &'static str, op: Op) -> Self {
        let (mask, bits) = parse_pattern(pattern);
        Self {
            mask,
            bits,
            mnemonic,
            op,
        }
    }

    pub const fn matches(&self, opcode: u8) -> bool {
        opcode & self.mask == self.bits
    }
}

const fn parse_pattern(pattern: &str) -> (u8, u8) {
    let bytes = pattern.as_bytes();
    assert!(bytes.len() == 8, "opcode pattern needs 8 bits");

    let mut mask = 0u8;
    let mut bits = 0u8;
    let mut i = 0;
    while i < 8 {
        let bit = 0x80u8 >> i;
        match bytes[i] {
            b'0' => mask |= bit,
            b'1' => {
                mask |= bit;
                bits |= bit;
            }
            b'-' => {}
            _ => panic!("opcode pattern may only use 0, 1 and -"),
        }
        i += 1;
    }
    (mask, bits)
}

const fn alu2(func: AluFunc, operand1: bool, operand2: bool) -> Op {
    Op::Alu2 {
        func,
        operand1,
        operand2,
        store: true,
    }
}

const fn alu(func: AluFunc) -> Op {
    Op::Alu { func, store: true }
}

pub const DECODE_TABLE: &[DecodeEntry] = &[
    DecodeEntry::new("00000001", "NOP", Op::Nop),
    DecodeEntry::new("00000110", "TAP", Op::Tap),
    DecodeEntry::new("00000111", "TPA", Op::Tpa),
    DecodeEntry::new("0000100-", "INX/DEX", Op::IncDecX),
    DecodeEntry::new("0000101-", "CLV/SEV", Op::ClearSetV),
    DecodeEntry::new("0000110-", "CLC/SEC", Op::ClearSetC),
    DecodeEntry::new("0000111-", "CLI/SEI", Op::ClearSetI),
    DecodeEntry::new("0010----", "Bcc", Op::Branch),
    DecodeEntry::new("01--0000", "NEG", alu2(AluFunc::Sub, false, true)),
    DecodeEntry::new("01--0011", "COM", alu2(AluFunc::Com, false, true)),
    DecodeEntry::new("01--0100", "LSR", alu2(AluFunc::Lsr, false, true)),
    DecodeEntry::new("01--0110", "ROR", alu2(AluFunc::Ror, false, true)),
    DecodeEntry::new("01--0111", "ASR", alu2(AluFunc::Asr, false, true)),
    DecodeEntry::new("01--1000", "ASL", alu2(AluFunc::Asl, false, true)),
    DecodeEntry::new("01--1001", "ROL", alu2(AluFunc::Rol, false, true)),
    DecodeEntry::new("01--1010", "DEC", alu2(AluFunc::Dec, false, true)),
    DecodeEntry::new("01--1100", "INC", alu2(AluFunc::Inc, false, true)),
    DecodeEntry::new(
        "01--1101",
        "TST",
        Op::Alu2 {
            func: AluFunc::Sub,
            operand1: true,
            operand2: false,
            store: false,
        },
    ),
    DecodeEntry::new("011-1110", "JMP", Op::Jmp),
    DecodeEntry::new("01--1111", "CLR", alu2(AluFunc::Sub, true, true)),
    DecodeEntry::new("1---0110", "LDA", alu(AluFunc::Ld)),
    DecodeEntry::new("1---0000", "SUB", alu(AluFunc::Sub)),
    DecodeEntry::new(
        "1---0001",
        "CMP",
        Op::Alu {
            func: AluFunc::Sub,
            store: false,
        },
    ),
    DecodeEntry::new("1---0010", "SBC", alu(AluFunc::Sbc)),
    DecodeEntry::new("1---0100", "AND", alu(AluFunc::And)),
    DecodeEntry::new(
        "1---0101",
        "BIT",
        Op::Alu {
            func: AluFunc::And,
            store: false,
        },
    ),
    DecodeEntry::new("1--10111", "STA", Op::Store),
    DecodeEntry::new("1-100111", "STA", Op::Store),
    DecodeEntry::new("1---1000", "EOR", alu(AluFunc::Eor)),
    DecodeEntry::new("1---1001", "ADC", alu(AluFunc::Adc)),
    DecodeEntry::new("1---1010", "ORA", alu(AluFunc::Ora)),
    DecodeEntry::new("1---1011", "ADD", alu(AluFunc::Add)),
];

const fn build_dispatch() -> [Op; 256] {
    let mut table = [Op::Illegal; 256];
    let mut opcode = 0;
    while opcode < 256 {
        let mut i = 0;
        while i < DECODE_TABLE.len() {
            if DECODE_TABLE[i].matches(opcode as u8) {
                table[opcode] = DECODE_TABLE[i].op;
                break;
            }
            i += 1;
        }
        opcode += 1;
    }
    table
}

/// Precomputed first-match result for every opcode.
pub static DISPATCH: [Op; 256] = build_dispatch();

#[inline]
pub fn decode(opcode: u8) -> Op {
    DISPATCH[opcode as usize]
}

/// First matching table entry, if any.
pub fn entry(opcode: u8) -> Option<&'static DecodeEntry> {
    DECODE_TABLE.iter().find(|e| e.matches(opcode))
}

pub fn mnemonic(opcode: u8) -> &'static str {
    entry(opcode).map_or("???", |e| e.mnemonic)
}

/// Bytes taken by the instruction, opcode included. Illegal opcodes are one
/// byte long since they only skip themselves.
pub fn instruction_length(opcode: u8) -> u8 {
    use super::modes::AddressingMode::*;

    let operand = match decode(opcode) {
        Op::Branch => 1,
        Op::Alu2 { .. } => match AddressingMode::read_modify_write(opcode) {
            Indexed => 1,
            Extended => 2,
            _ => 0,
        },
        Op::Jmp | Op::Alu { .. } | Op::Store => match AddressingMode::memory(opcode) {
            Extended => 2,
            _ => 1,
        },
        _ => 0,
    };
    1 + operand
}
