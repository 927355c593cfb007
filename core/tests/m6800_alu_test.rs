use m6800_core::cpu::m6800::CcFlag;
mod common;
use common::{accesses, setup, step};

const C: u8 = CcFlag::C as u8;
const V: u8 = CcFlag::V as u8;
const Z: u8 = CcFlag::Z as u8;
const N: u8 = CcFlag::N as u8;

// =============================================================================
// Immediate - 3 cycles
// =============================================================================

#[test]
fn test_ldaa_imm() {
    let (mut cpu, mut bus) = setup(0x1000, &[0x86, 0x80]);
    cpu.cc |= V;
    let cycles = step(&mut cpu, &mut bus);
    assert_eq!(cycles.len(), 3);
    assert_eq!(cpu.regs.a, 0x80);
    assert_ne!(cpu.cc & N, 0);
    assert_eq!(cpu.cc & (V | Z), 0);
    assert_eq!(cpu.regs.pc, 0x1002);
}

#[test]
fn test_ldab_imm_zero() {
    let (mut cpu, mut bus) = setup(0x1000, &[0xC6, 0x00]);
    cpu.regs.a = 0x55;
    cpu.regs.b = 0x77;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0x00);
    assert_eq!(cpu.regs.a, 0x55);
    assert_ne!(cpu.cc & Z, 0);
}

#[test]
fn test_adda_imm_carry() {
    let (mut cpu, mut bus) = setup(0x1000, &[0x8B, 0x01]);
    cpu.regs.a = 0xFF;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x00);
    assert_eq!(cpu.cc & (Z | C), Z | C);
}

#[test]
fn test_adca_imm_uses_carry() {
    let (mut cpu, mut bus) = setup(0x1000, &[0x89, 0x10]);
    cpu.regs.a = 0x20;
    cpu.cc |= C;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x31);
    assert_eq!(cpu.cc & C, 0);
}

#[test]
fn test_cmpa_imm_does_not_store() {
    let (mut cpu, mut bus) = setup(0x1000, &[0x81, 0x42]);
    cpu.regs.a = 0x42;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x42);
    assert_ne!(cpu.cc & Z, 0);
    assert_eq!(cpu.cc & C, 0);
}

#[test]
fn test_bitb_imm_does_not_store() {
    let (mut cpu, mut bus) = setup(0x1000, &[0xC5, 0x0F]);
    cpu.regs.b = 0xF0;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0xF0);
    assert_ne!(cpu.cc & Z, 0);
}

#[test]
fn test_suba_anda_oraa_eora_imm() {
    let (mut cpu, mut bus) = setup(0x1000, &[0x80, 0x01, 0x84, 0x0F, 0x8A, 0x30, 0x88, 0xFF]);
    cpu.regs.a = 0x10;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x0F); // SUBA
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x0F); // ANDA
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0x3F); // ORAA
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0xC0); // EORA
    assert_ne!(cpu.cc & N, 0);
}

#[test]
fn test_sbca_imm_borrow() {
    let (mut cpu, mut bus) = setup(0x1000, &[0x82, 0x00]);
    cpu.regs.a = 0x00;
    cpu.cc |= C;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.a, 0xFF);
    assert_eq!(cpu.cc & (N | C), N | C);
}

// =============================================================================
// Direct - 3 cycles
// =============================================================================

#[test]
fn test_ldaa_dir() {
    let (mut cpu, mut bus) = setup(0x1000, &[0x96, 0x40]);
    bus.memory[0x0040] = 0x7F;
    let cycles = step(&mut cpu, &mut bus);
    assert_eq!(cycles.len(), 3);
    assert_eq!(
        accesses(&cycles),
        vec![('R', 0x1000), ('R', 0x1001), ('R', 0x0040)]
    );
    assert_eq!(cpu.regs.a, 0x7F);
    assert_eq!(cpu.regs.pc, 0x1002);
}

#[test]
fn test_addb_dir() {
    let (mut cpu, mut bus) = setup(0x1000, &[0xDB, 0x80]);
    bus.memory[0x0080] = 0x70;
    cpu.regs.b = 0x10;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0x80);
    assert_eq!(cpu.cc & (N | V), N | V);
}

// =============================================================================
// Extended - 4 cycles
// =============================================================================

#[test]
fn test_ldab_ext() {
    let (mut cpu, mut bus) = setup(0x1000, &[0xF6, 0x20, 0x00]);
    bus.memory[0x2000] = 0x5A;
    let cycles = step(&mut cpu, &mut bus);
    assert_eq!(cycles.len(), 4);
    assert_eq!(
        accesses(&cycles),
        vec![('R', 0x1000), ('R', 0x1001), ('R', 0x1002), ('R', 0x2000)]
    );
    assert_eq!(cpu.regs.b, 0x5A);
    assert_eq!(cpu.regs.pc, 0x1003);
}

#[test]
fn test_cmpb_ext_borrow() {
    let (mut cpu, mut bus) = setup(0x1000, &[0xF1, 0x20, 0x00]);
    bus.memory[0x2000] = 0x02;
    cpu.regs.b = 0x01;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0x01);
    assert_eq!(cpu.cc & (N | C), N | C);
}

// =============================================================================
// Indexed - 5 cycles, two dead
// =============================================================================

#[test]
fn test_ldaa_idx() {
    let (mut cpu, mut bus) = setup(0x1000, &[0xA6, 0x05]);
    cpu.regs.x = 0x3000;
    bus.memory[0x3005] = 0x42;
    let cycles = step(&mut cpu, &mut bus);
    assert_eq!(cycles.len(), 5);
    assert!(cycles[2].is_dead());
    assert!(cycles[3].is_dead());
    assert_eq!(cycles[2].data, 0xFF);
    assert_eq!(
        accesses(&cycles),
        vec![('R', 0x1000), ('R', 0x1001), ('R', 0x3005)]
    );
    assert_eq!(cpu.regs.a, 0x42);
    assert_eq!(cpu.regs.x, 0x3000);
    assert_eq!(cpu.regs.pc, 0x1002);
}

#[test]
fn test_idx_offset_is_unsigned_and_wraps() {
    let (mut cpu, mut bus) = setup(0x1000, &[0xE6, 0xFF]);
    cpu.regs.x = 0xFF10;
    bus.memory[0x000F] = 0x99;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.regs.b, 0x99);
}
