pub mod bus;
pub mod component;

pub use bus::{Bus, BusAccess, BusCycle, BusSignals, OPEN_BUS, ReadWrite};
pub use component::BusMasterComponent;
