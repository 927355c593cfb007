use crate::core::component::BusMasterComponent;

/// Generic CPU interface
pub trait Cpu: BusMasterComponent + CpuStateTrait {
    /// Pulse the reset line. The CPU re-runs its vector fetch before executing
    /// anything else.
    fn reset(&mut self);

    /// True while the reset sequence still owns the bus.
    fn in_reset(&self) -> bool;
}

pub mod formal;
pub use formal::{FormalData, FormalError, FormalHook, NoVerification, Verification};

// Re-export state types
pub mod state;
pub use state::{CpuStateTrait, M6800State};

pub mod m6800;
pub use m6800::M6800;
