
/// Read-after-write hazards resolved by the forwarding unit.
pub mod forwarding;


/// Push, pop and stack pointer behavior.
pub mod stack;

/// Register and memory dump interrupts.
pub mod interrupts;
