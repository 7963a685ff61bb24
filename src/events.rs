//! # Machine Events
//!
//! Host-observable events produced while the machine runs. Events accumulate
//! in an internal queue and are drained by the host through
//! [`crate::Machine::poll_event`] or [`crate::Machine::drain_events`]; the
//! queue is the only diagnostic channel the core has (it never logs).
//!
//! Ordering is deterministic: `CharOut` events appear in the order the
//! corresponding writes to the character-out register executed, and
//! `ProgramHalted` is always the last event of a `run`.

/// An event emitted by the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineEvent {
    /// A byte was written to the character-out register (`0xF001`).
    CharOut(u8),

    /// A `run` call ended, either by BRK halt or budget exhaustion.
    /// Carries the number of steps actually executed.
    ProgramHalted(u64),

    /// Tracing only: the PC at the start of an instruction step.
    TracePc(u16),

    /// Tracing only: a JSR is about to transfer to this target address.
    TraceJsr(u16),
}
