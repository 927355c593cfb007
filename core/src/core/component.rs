/// A clocked component that owns the bus while it runs.
pub trait BusMasterComponent {
    type Bus: ?Sized;

    /// Advance one clock. Returns true when the component sits on an
    /// instruction boundary (the next cycle is an opcode fetch).
    fn tick_with_bus(&mut self, bus: &mut Self::Bus) -> bool;
}
