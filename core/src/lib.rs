pub mod core;
pub mod cpu;

pub mod prelude {
    pub use crate::core::{Bus, BusAccess, BusCycle, BusMasterComponent, BusSignals, ReadWrite};
    pub use crate::cpu::m6800::{CcFlag, M6800};
    pub use crate::cpu::{Cpu, CpuStateTrait, M6800State};
}
