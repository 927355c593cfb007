/// Memory side of the bus.
///
/// The CPU drives address, direction and valid-address pins for a whole cycle;
/// the memory answers a read combinationally within that same cycle and latches
/// a write at the end of it. Dead cycles (valid-address low) never reach the bus.
pub trait Bus {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);
}

/// Value seen on data-in when nothing drives the data lines.
pub const OPEN_BUS: u8 = 0xFF;

/// Direction pin. On the real part R/W is high for read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadWrite {
    #[default]
    Read,
    Write,
}

impl ReadWrite {
    /// Level of the R/W pin (1 = read, 0 = write).
    pub const fn bit(self) -> u8 {
        match self {
            ReadWrite::Read => 1,
            ReadWrite::Write => 0,
        }
    }
}

/// Output pins latched at a clock edge and held for the following cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusSignals {
    pub addr: u16,
    pub dout: u8,
    pub rw: ReadWrite,
    /// Valid memory address (VMA). Low during dead cycles.
    pub vma: bool,
}

/// An (address, data) pair seen on the bus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusAccess {
    pub addr: u16,
    pub data: u8,
}

/// Bus activity of one completed clock cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusCycle {
    pub addr: u16,
    /// Data-in for reads, data-out for writes, open bus for dead reads.
    pub data: u8,
    pub rw: ReadWrite,
    pub vma: bool,
}

impl BusCycle {
    pub fn is_read(&self) -> bool {
        self.vma && self.rw == ReadWrite::Read
    }

    pub fn is_write(&self) -> bool {
        self.vma && self.rw == ReadWrite::Write
    }

    pub fn is_dead(&self) -> bool {
        !self.vma
    }

    pub fn access(&self) -> BusAccess {
        BusAccess {
            addr: self.addr,
            data: self.data,
        }
    }
}
