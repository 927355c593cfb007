mod alu;
pub mod alu8;
mod branch;
pub mod decode;
mod inherent;
mod load_store;
pub mod modes;
pub mod registers;

use log::{debug, trace};

use crate::core::{
    Bus, BusAccess, BusCycle, BusSignals, OPEN_BUS, ReadWrite, component::BusMasterComponent,
};
use crate::cpu::{
    Cpu,
    formal::{FormalHook, NoVerification, Observation, Verification},
    state::{CpuStateTrait, M6800State},
};

pub use alu8::{Alu, Alu8, AluFunc, AluOutput};
pub use branch::branch_condition;
pub use decode::Op;
pub use modes::AddressingMode;
pub use registers::{Reg8, Reg16, Registers};

use registers::{hi, lo, with_hi, with_lo};

#[repr(u8)]
#[derive(Copy, Clone, Debug)]
pub enum CcFlag {
    C = 0x01, // Carry
    V = 0x02, // Overflow
    Z = 0x04, // Zero
    N = 0x08, // Negative
    I = 0x10, // IRQ mask
    H = 0x20, // Half carry
}

/// Condition code bits 6 and 7 always read back as 1.
pub const CC_RESERVED: u8 = 0xC0;

pub const RESET_VECTOR_HI: u16 = 0xFFFE;
pub const RESET_VECTOR_LO: u16 = 0xFFFF;

/// Progress through the reset vector fetch.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetState {
    /// Drive 0xFFFE.
    VectorHigh = 0,
    /// Drive 0xFFFF, latch the high byte.
    VectorLow = 1,
    /// Combine the vector and jump to it.
    Jump = 2,
    /// Vector taken; fetch/execute owns the bus.
    Running = 3,
}

/// State that only changes on a clock edge.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Next {
    pub regs: Registers,
    pub cc: u8,
    pub signals: BusSignals,
    pub cycle: u8,
    pub reset_state: ResetState,
}

impl Next {
    pub(crate) fn set8(&mut self, reg: Reg8, value: u8) {
        debug_assert!(reg.is_writable(), "{reg:?} is read-only");
        let r = &mut self.regs;
        match reg {
            Reg8::A => r.a = value,
            Reg8::B => r.b = value,
            Reg8::Xh => r.x = with_hi(r.x, value),
            Reg8::Xl => r.x = with_lo(r.x, value),
            Reg8::Sph => r.sp = with_hi(r.sp, value),
            Reg8::Spl => r.sp = with_lo(r.sp, value),
            Reg8::Pch => r.pc = with_hi(r.pc, value),
            Reg8::Pcl => r.pc = with_lo(r.pc, value),
            Reg8::Tmp8 => r.tmp8 = value,
            Reg8::Tmp16h => r.tmp16 = with_hi(r.tmp16, value),
            Reg8::Tmp16l => r.tmp16 = with_lo(r.tmp16, value),
            Reg8::Dout => self.signals.dout = value,
            Reg8::Din => {}
        }
    }

    pub(crate) fn set16(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::X => self.regs.x = value,
            Reg16::Sp => self.regs.sp = value,
            Reg16::Pc => self.regs.pc = value,
            Reg16::Tmp16 => self.regs.tmp16 = value,
            Reg16::Addr => self.signals.addr = value,
        }
    }
}

/// ALU inputs chosen for the current cycle.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct AluRoute {
    pub func: AluFunc,
    pub input1: u8,
    pub input2: u8,
    /// Register latching the result at the clock edge, if any.
    pub dest: Option<Reg8>,
}

/// Everything decided during one clock, applied at the edge.
pub(crate) struct Step {
    pub next: Next,
    pub alu: AluRoute,
    end_instr: Option<u16>,
    read: Option<BusAccess>,
    write: Option<BusAccess>,
}

impl Step {
    fn new(next: Next) -> Self {
        Self {
            next,
            alu: AluRoute::default(),
            end_instr: None,
            read: None,
            write: None,
        }
    }

    /// Finish the instruction; the next fetch comes from `addr`.
    pub(crate) fn end_instr(&mut self, addr: u16) {
        debug_assert!(self.end_instr.is_none(), "instruction ended twice");
        self.end_instr = Some(addr);
    }

    pub(crate) fn route_alu(&mut self, func: AluFunc, input1: u8, input2: u8, dest: Option<Reg8>) {
        self.alu = AluRoute {
            func,
            input1,
            input2,
            dest,
        };
    }

    pub(crate) fn record_read(&mut self, addr: u16, data: u8) {
        self.read = Some(BusAccess { addr, data });
    }

    pub(crate) fn record_write(&mut self, addr: u16, data: u8) {
        self.write = Some(BusAccess { addr, data });
    }
}

/// Cycle-accurate 6800 core.
///
/// Each clock is evaluated from the current state only and committed in one
/// go at the edge. Bus signals in [`M6800::signals`] are the ones driven
/// during the cycle about to run.
pub struct M6800<V = NoVerification, A = Alu8> {
    // Registers
    pub regs: Registers,
    pub cc: u8,

    // Pins
    pub signals: BusSignals,
    pub(crate) din: u8,

    // Internal state
    pub(crate) cycle: u8,
    pub(crate) reset_state: ResetState,

    alu: A,
    formal: Option<FormalHook<V>>,
}

impl Default for M6800 {
    fn default() -> Self {
        Self::new()
    }
}

impl M6800 {
    pub fn new() -> Self {
        Self::with_parts(Alu8, None)
    }
}

impl<V: Verification> M6800<V> {
    pub fn with_verification(verification: V) -> Self {
        Self::with_parts(Alu8, Some(verification))
    }
}

impl<V, A> M6800<V, A> {
    pub fn with_parts(alu: A, verification: Option<V>) -> Self
    where
        V: Verification,
    {
        Self {
            regs: Registers::default(),
            cc: CC_RESERVED | CcFlag::I as u8,
            signals: BusSignals::default(),
            din: OPEN_BUS,
            cycle: 0,
            reset_state: ResetState::VectorHigh,
            alu,
            formal: verification.map(FormalHook::new),
        }
    }

    /// Cycle within the current instruction (0 = fetch).
    pub fn cycle(&self) -> u8 {
        self.cycle
    }

    pub fn reset_state(&self) -> ResetState {
        self.reset_state
    }

    /// Byte sampled from data-in during the last clock.
    pub fn din(&self) -> u8 {
        self.din
    }

    pub fn formal(&self) -> Option<&FormalHook<V>> {
        self.formal.as_ref()
    }

    /// True when the next clock is an opcode fetch.
    pub fn at_instruction_boundary(&self) -> bool {
        self.reset_state == ResetState::Running && self.cycle == 0
    }

    pub fn reg8(&self, reg: Reg8) -> u8 {
        let r = &self.regs;
        match reg {
            Reg8::A => r.a,
            Reg8::B => r.b,
            Reg8::Xh => hi(r.x),
            Reg8::Xl => lo(r.x),
            Reg8::Sph => hi(r.sp),
            Reg8::Spl => lo(r.sp),
            Reg8::Pch => hi(r.pc),
            Reg8::Pcl => lo(r.pc),
            Reg8::Tmp8 => r.tmp8,
            Reg8::Tmp16h => hi(r.tmp16),
            Reg8::Tmp16l => lo(r.tmp16),
            Reg8::Din => self.din,
            Reg8::Dout => self.signals.dout,
        }
    }

    pub fn reg16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::X => self.regs.x,
            Reg16::Sp => self.regs.sp,
            Reg16::Pc => self.regs.pc,
            Reg16::Tmp16 => self.regs.tmp16,
            Reg16::Addr => self.signals.addr,
        }
    }

    /// Park the core at an instruction boundary with the given registers, as
    /// if the reset vector had pointed at `state.pc`.
    pub fn load_state(&mut self, state: &M6800State) {
        self.regs = Registers {
            a: state.a,
            b: state.b,
            x: state.x,
            sp: state.sp,
            pc: state.pc,
            ..Registers::default()
        };
        self.cc = state.cc;
        self.signals = BusSignals {
            addr: state.pc,
            dout: 0,
            rw: ReadWrite::Read,
            vma: true,
        };
        self.cycle = 0;
        self.reset_state = ResetState::Running;
        if let Some(formal) = self.formal.as_mut() {
            formal.reset();
        }
    }

    fn staged(&self) -> Next {
        Next {
            regs: self.regs,
            cc: self.cc,
            signals: BusSignals {
                vma: true,
                ..self.signals
            },
            cycle: self.cycle.wrapping_add(1),
            reset_state: self.reset_state,
        }
    }

    fn reset_handler(&self, step: &mut Step) {
        match self.reset_state {
            ResetState::VectorHigh => {
                step.next.signals.addr = RESET_VECTOR_HI;
                step.next.signals.rw = ReadWrite::Read;
                step.next.reset_state = ResetState::VectorLow;
            }
            ResetState::VectorLow => {
                step.next.signals.addr = RESET_VECTOR_LO;
                step.next.signals.rw = ReadWrite::Read;
                step.next.regs.tmp8 = self.din;
                step.next.reset_state = ResetState::Jump;
            }
            ResetState::Jump => {
                let vector = u16::from_be_bytes([self.regs.tmp8, self.din]);
                trace!("reset vector {vector:#06x}");
                step.next.reset_state = ResetState::Running;
                step.end_instr(vector);
            }
            ResetState::Running => {}
        }
    }

    /// Cycle 0: latch the opcode and request the first operand byte.
    fn fetch(&self, step: &mut Step) {
        let pc = self.regs.pc.wrapping_add(1);
        step.next.regs.instr = self.din;
        step.next.regs.pc = pc;
        step.next.signals.addr = pc;
        step.next.signals.rw = ReadWrite::Read;
    }

    fn execute(&self, step: &mut Step) {
        match decode::decode(self.regs.instr) {
            Op::Nop => self.op_nop(step),
            Op::Tap => self.op_tap(step),
            Op::Tpa => self.op_tpa(step),
            Op::IncDecX => self.op_inx_dex(step),
            Op::ClearSetV => self.op_clear_set(step, AluFunc::Clv, AluFunc::Sev),
            Op::ClearSetC => self.op_clear_set(step, AluFunc::Clc, AluFunc::Sec),
            Op::ClearSetI => self.op_clear_set(step, AluFunc::Cli, AluFunc::Sei),
            Op::Branch => self.op_branch(step),
            Op::Alu2 {
                func,
                operand1,
                operand2,
                store,
            } => self.op_alu2(step, func, operand1, operand2, store),
            Op::Jmp => self.op_jmp(step),
            Op::Alu { func, store } => self.op_alu(step, func, store),
            Op::Store => self.op_store(step),
            Op::Illegal => self.op_illegal(step),
        }
    }

    /// Unknown opcodes end right away at the current PC.
    pub(crate) fn op_illegal(&self, step: &mut Step) {
        debug!(
            "illegal opcode {:#04x} at {:#06x}",
            self.regs.instr,
            self.regs.pc.wrapping_sub(1)
        );
        step.end_instr(self.regs.pc);
    }

    /// Accumulator picked by opcode bit 6.
    pub(crate) fn accumulator(&self) -> Reg8 {
        if self.regs.instr & 0x40 != 0 {
            Reg8::B
        } else {
            Reg8::A
        }
    }
}

impl<V: Verification, A: Alu> M6800<V, A> {
    /// Run one clock: let memory answer the current bus signals, evaluate the
    /// next state and commit it. Returns what happened on the bus.
    pub fn execute_cycle<B: Bus + ?Sized>(&mut self, bus: &mut B) -> BusCycle {
        let signals = self.signals;
        self.din = OPEN_BUS;
        let data = match (signals.vma, signals.rw) {
            (true, ReadWrite::Read) => {
                self.din = bus.read(signals.addr);
                self.din
            }
            (true, ReadWrite::Write) => {
                bus.write(signals.addr, signals.dout);
                signals.dout
            }
            (false, ReadWrite::Read) => OPEN_BUS,
            (false, ReadWrite::Write) => signals.dout,
        };
        let bus_cycle = BusCycle {
            addr: signals.addr,
            data,
            rw: signals.rw,
            vma: signals.vma,
        };
        trace!(
            "cycle {} addr={:04x} data={:02x} rw={} vma={}",
            self.cycle,
            bus_cycle.addr,
            bus_cycle.data,
            bus_cycle.rw.bit(),
            bus_cycle.vma as u8
        );

        let step = self.evaluate();
        self.observe(&step);
        self.commit(step.next);
        bus_cycle
    }

    /// Compute the next state from the current one without touching it.
    fn evaluate(&self) -> Step {
        let mut step = Step::new(self.staged());

        self.reset_handler(&mut step);
        if self.reset_state == ResetState::Running {
            if self.cycle == 0 {
                self.fetch(&mut step);
            } else {
                self.execute(&mut step);
            }
        }

        let route = step.alu;
        let out = self.alu.apply(route.func, route.input1, route.input2, self.cc);
        if route.func != AluFunc::None {
            step.next.cc = out.flags;
        }
        if let Some(dest) = route.dest {
            step.next.set8(dest, out.result);
        }

        if let Some(addr) = step.end_instr {
            if self.reset_state == ResetState::Running {
                debug!(
                    "{} ({:#04x}) done in {} cycles, next {:#06x}",
                    decode::mnemonic(self.regs.instr),
                    self.regs.instr,
                    self.cycle as u16 + 1,
                    addr
                );
            }
            step.next.set16(Reg16::Pc, addr);
            step.next.set16(Reg16::Addr, addr);
            step.next.signals.rw = ReadWrite::Read;
            step.next.cycle = 0;
        }

        step
    }

    fn observe(&mut self, step: &Step) {
        let boundary = self.at_instruction_boundary();
        let state = self.snapshot();
        if let Some(formal) = self.formal.as_mut() {
            formal.observe(&Observation {
                boundary,
                din: self.din,
                instr: self.regs.instr,
                state,
                read: step.read,
                write: step.write,
            });
        }
    }

    /// Clock edge.
    fn commit(&mut self, next: Next) {
        self.regs = next.regs;
        self.cc = next.cc;
        self.signals = next.signals;
        self.cycle = next.cycle;
        self.reset_state = next.reset_state;
    }
}

impl<V: Verification, A: Alu> BusMasterComponent for M6800<V, A> {
    type Bus = dyn Bus;

    fn tick_with_bus(&mut self, bus: &mut Self::Bus) -> bool {
        self.execute_cycle(bus);
        self.at_instruction_boundary()
    }
}

impl<V: Verification, A: Alu> Cpu for M6800<V, A> {
    fn reset(&mut self) {
        self.reset_state = ResetState::VectorHigh;
        self.cycle = 0;
        self.signals = BusSignals::default();
        self.cc |= CcFlag::I as u8; // IRQ masked
        if let Some(formal) = self.formal.as_mut() {
            formal.reset();
        }
    }

    fn in_reset(&self) -> bool {
        self.reset_state != ResetState::Running
    }
}

impl<V, A> CpuStateTrait for M6800<V, A> {
    type Snapshot = M6800State;

    fn snapshot(&self) -> M6800State {
        M6800State {
            a: self.regs.a,
            b: self.regs.b,
            x: self.regs.x,
            sp: self.regs.sp,
            pc: self.regs.pc,
            cc: self.cc,
        }
    }
}
