use m6800_core::cpu::m6800::CcFlag;
mod common;
use common::{accesses, setup, step};

const C: u8 = CcFlag::C as u8;
const V: u8 = CcFlag::V as u8;
const Z: u8 = CcFlag::Z as u8;
const N: u8 = CcFlag::N as u8;

#[test]
fn test_staa_dir() {
    let (mut cpu, mut bus) = setup(0x1000, &[0x97, 0x40]);
    cpu.regs.a = 0x80;
    cpu.cc |= V | C;
    let cycles = step(&mut cpu, &mut bus);
    assert_eq!(cycles.len(), 4);
    assert!(cycles[2].is_dead());
    assert_eq!(cycles[2].addr, 0x0040);
    assert_eq!(
        accesses(&cycles),
        vec![('R', 0x1000), ('R', 0x1001), ('W', 0x0040)]
    );
    assert_eq!(bus.memory[0x0040], 0x80);
    assert_eq!(cpu.cc & (N | Z | V | C), N | C);
    assert_eq!(cpu.regs.a, 0x80);
    assert_eq!(cpu.regs.pc, 0x1002);
}

#[test]
fn test_stab_ext() {
    let (mut cpu, mut bus) = setup(0x1000, &[0xF7, 0x20, 0x00]);
    cpu.regs.a = 0x11;
    cpu.regs.b = 0x00;
    let cycles = step(&mut cpu, &mut bus);
    assert_eq!(cycles.len(), 5);
    assert_eq!(
        accesses(&cycles),
        vec![('R', 0x1000), ('R', 0x1001), ('R', 0x1002), ('W', 0x2000)]
    );
    assert_eq!(cycles[4].data, 0x00);
    assert_ne!(cpu.cc & Z, 0);
    assert_eq!(cpu.regs.pc, 0x1003);
}

#[test]
fn test_staa_idx() {
    let (mut cpu, mut bus) = setup(0x1000, &[0xA7, 0x04]);
    cpu.regs.a = 0x3C;
    cpu.regs.x = 0x2000;
    cpu.cc |= V;
    let cycles = step(&mut cpu, &mut bus);
    assert_eq!(cycles.len(), 6);
    assert_eq!(
        accesses(&cycles),
        vec![('R', 0x1000), ('R', 0x1001), ('W', 0x2004)]
    );
    assert_eq!(bus.memory[0x2004], 0x3C);
    assert_eq!(cpu.cc & (N | Z | V), 0);
    assert_eq!(cpu.regs.x, 0x2000);
}

#[test]
fn test_stab_idx_wraps() {
    let (mut cpu, mut bus) = setup(0x1000, &[0xE7, 0x02]);
    cpu.regs.b = 0x77;
    cpu.regs.x = 0xFFFF;
    step(&mut cpu, &mut bus);
    assert_eq!(bus.memory[0x0001], 0x77);
}

#[test]
fn test_sta_immediate_is_skipped() {
    let (mut cpu, mut bus) = setup(0x1000, &[0x87, 0x01]);
    cpu.regs.a = 0x55;
    let cycles = step(&mut cpu, &mut bus);
    assert_eq!(cycles.len(), 2);
    assert!(cycles.iter().all(|c| !c.is_write()));
    assert_eq!(cpu.regs.pc, 0x1001);
}
