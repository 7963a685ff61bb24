//! # The Machine
//!
//! This module provides [`Machine`], the public emulator facade: a 6502 CPU
//! wired to 64 KiB of RAM with the keyboard/character-out MMIO overlay.
//! Hosts drive it with a handful of operations (load a ROM, boot, run,
//! inject keys, latch interrupts) and observe it through the event queue
//! and the debug accessors.
//!
//! The machine is single-threaded and synchronous; every public operation
//! completes before returning, and callers serialize access themselves.
//! Cancellation of a long run is cooperative: pick a small step budget and
//! call `run` again.

use crate::cpu::CPU;
use crate::events::MachineEvent;
use crate::memory::MachineMemory;
use crate::{MachineError, MemoryBus};

/// Opcode byte for JSR, watched by the tracer.
const OPCODE_JSR: u8 = 0x20;

/// A minimal 6502 machine: CPU, 64 KiB RAM, keyboard in, character out.
///
/// # Examples
///
/// ```
/// use sim6502::Machine;
///
/// let mut machine = Machine::new();
/// machine.load_rom(&[0xEA, 0x00], 0x8000).unwrap(); // NOP / BRK
/// machine.poke(0xFFFC, 0x00);
/// machine.poke(0xFFFD, 0x80);
/// machine.boot();
///
/// machine.run(10).unwrap();
/// assert!(machine.halted());
/// ```
pub struct Machine {
    /// The CPU, owning the machine memory as its bus.
    cpu: CPU<MachineMemory>,

    /// When set, each step emits TracePc (and TraceJsr for JSR).
    trace: bool,
}

impl Machine {
    /// Creates a machine in power-on state: zeroed RAM, no ROM, PC loaded
    /// from the (still zero) reset vector.
    pub fn new() -> Self {
        Self {
            cpu: CPU::new(MachineMemory::new()),
            trace: false,
        }
    }

    /// Copies a ROM image into memory at `base`. One-shot; see
    /// [`MachineMemory::load_rom`] for the failure cases.
    pub fn load_rom(&mut self, bytes: &[u8], base: u16) -> Result<(), MachineError> {
        self.cpu.memory_mut().load_rom(bytes, base)
    }

    /// Resets the CPU to power-on state, rereads the reset vector, clears
    /// the halt flag and interrupt latches, and rewinds the keyboard
    /// cursor. Call after `load_rom` and the reset vector are in place.
    pub fn boot(&mut self) {
        self.cpu.memory_mut().rewind_keyboard();
        self.cpu.boot();
    }

    /// Executes one instruction (servicing pending interrupts first).
    ///
    /// With tracing enabled, emits [`MachineEvent::TracePc`] for the
    /// instruction about to execute and [`MachineEvent::TraceJsr`] for its
    /// target when that instruction is JSR, using side-effect-free peeks.
    pub fn step(&mut self) -> Result<(), MachineError> {
        if self.trace {
            let pc = self.cpu.pc();
            self.cpu.memory_mut().push_event(MachineEvent::TracePc(pc));

            if self.peek(pc) == OPCODE_JSR {
                let target =
                    self.peek(pc.wrapping_add(1)) as u16 | (self.peek(pc.wrapping_add(2)) as u16) << 8;
                self.cpu
                    .memory_mut()
                    .push_event(MachineEvent::TraceJsr(target));
            }
        }

        self.cpu.step()
    }

    /// Runs up to `max_steps` instructions, stopping early when a BRK
    /// halts the machine.
    ///
    /// Emits [`MachineEvent::ProgramHalted`] with the number of steps
    /// actually executed when the loop exits normally; a step error
    /// propagates without the event. A zero budget is rejected with
    /// `ZeroBudget`.
    pub fn run(&mut self, max_steps: u64) -> Result<(), MachineError> {
        if max_steps == 0 {
            return Err(MachineError::ZeroBudget);
        }

        let mut executed: u64 = 0;
        while executed < max_steps && !self.cpu.halted() {
            self.step()?;
            executed += 1;
        }

        self.cpu
            .memory_mut()
            .push_event(MachineEvent::ProgramHalted(executed));

        Ok(())
    }

    // ========== Interrupt Latches ==========

    /// Latches an IRQ request (level-like; pending until serviced).
    pub fn trigger_irq(&mut self) {
        self.cpu.trigger_irq();
    }

    /// Latches an NMI request (edge-like; cleared when serviced).
    pub fn trigger_nmi(&mut self) {
        self.cpu.trigger_nmi();
    }

    // ========== Host I/O ==========

    /// Appends bytes to the keyboard buffer for the CPU to consume at
    /// `0xF000`. Rejects an empty slice with `EmptyKeys`.
    pub fn send_keys(&mut self, bytes: &[u8]) -> Result<(), MachineError> {
        self.cpu.memory_mut().send_keys(bytes)
    }

    /// Number of keyboard bytes not yet consumed by the CPU.
    pub fn keys_pending(&self) -> usize {
        self.cpu.memory().keys_pending()
    }

    /// Removes and returns the oldest pending event.
    pub fn poll_event(&mut self) -> Option<MachineEvent> {
        self.cpu.memory_mut().pop_event()
    }

    /// Drains every pending event, oldest first.
    pub fn drain_events(&mut self) -> Vec<MachineEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.poll_event() {
            events.push(event);
        }
        events
    }

    /// Enables or disables per-step trace events.
    pub fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    // ========== Debug Memory Access ==========

    /// Side-effect-free read bypassing the I/O overlay.
    pub fn peek(&self, addr: u16) -> u8 {
        self.cpu.memory().peek(addr)
    }

    /// Side-effect-free write bypassing the I/O overlay.
    pub fn poke(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().poke(addr, value);
    }

    /// Bus read with full MMIO semantics (consumes keyboard input at
    /// `0xF000`), exactly as the CPU sees it.
    pub fn bus_read(&self, addr: u16) -> u8 {
        self.cpu.memory().read(addr)
    }

    /// Bus write with full MMIO semantics (emits `CharOut` at `0xF001`).
    pub fn bus_write(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    // ========== Register and Flag Accessors ==========

    /// Accumulator register.
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    /// X index register.
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    /// Y index register.
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    /// Stack pointer.
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    /// Program counter.
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    /// Packed status register (NV-BDIZC, bit 5 reads as 1).
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    /// Best-effort cycle counter.
    pub fn cycles(&self) -> u64 {
        self.cpu.cycles()
    }

    /// Whether a BRK has halted the run loop.
    pub fn halted(&self) -> bool {
        self.cpu.halted()
    }

    /// Whether an IRQ is latched and unserviced.
    pub fn irq_pending(&self) -> bool {
        self.cpu.irq_pending()
    }

    /// Whether an NMI is latched and unserviced.
    pub fn nmi_pending(&self) -> bool {
        self.cpu.nmi_pending()
    }

    /// Carry flag.
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Zero flag.
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    /// Interrupt-disable flag.
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    /// Decimal-mode flag (tracked; arithmetic stays binary).
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    /// Overflow flag.
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    /// Break flag (don't-care between pushes).
    pub fn flag_b(&self) -> bool {
        self.cpu.flag_b()
    }

    /// Negative flag.
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    // ========== Register and Flag Setters (test harnesses) ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.cpu.set_a(value);
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.cpu.set_x(value);
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.cpu.set_y(value);
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.cpu.set_sp(value);
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.cpu.set_pc(value);
    }

    /// Unpacks a status byte into the flags (bit 5 ignored).
    pub fn set_status(&mut self, value: u8) {
        self.cpu.set_status(value);
    }

    /// Sets or clears the halt flag (clear it to resume after BRK).
    pub fn set_halted(&mut self, value: bool) {
        self.cpu.set_halted(value);
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.cpu.set_flag_c(value);
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.cpu.set_flag_z(value);
    }

    /// Sets the Interrupt-disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.cpu.set_flag_i(value);
    }

    /// Sets the Decimal-mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.cpu.set_flag_d(value);
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.cpu.set_flag_v(value);
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.cpu.set_flag_b(value);
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.cpu.set_flag_n(value);
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_state() {
        let machine = Machine::new();

        // Reset vector is zero until a ROM/vector is written
        assert_eq!(machine.pc(), 0x0000);
        assert_eq!(machine.sp(), 0xFD);
        assert_eq!((machine.a(), machine.x(), machine.y()), (0, 0, 0));
        assert_eq!(machine.cycles(), 0);
        assert!(machine.flag_i());
        assert!(!machine.halted());
    }

    #[test]
    fn test_boot_rewinds_keyboard() {
        let mut machine = Machine::new();
        machine.send_keys(b"GO").unwrap();
        assert_eq!(machine.bus_read(crate::IO_KBD), b'G');

        machine.boot();
        assert_eq!(machine.keys_pending(), 2);
        assert_eq!(machine.bus_read(crate::IO_KBD), b'G');
    }

    #[test]
    fn test_trace_events() {
        let mut machine = Machine::new();
        // JSR $8005 at 0x8000, then RTS at the target
        machine
            .load_rom(&[0x20, 0x05, 0x80, 0xEA, 0xEA, 0x60], 0x8000)
            .unwrap();
        machine.poke(0xFFFC, 0x00);
        machine.poke(0xFFFD, 0x80);
        machine.boot();
        machine.set_trace(true);

        machine.step().unwrap();

        let events = machine.drain_events();
        assert_eq!(
            events,
            vec![
                MachineEvent::TracePc(0x8000),
                MachineEvent::TraceJsr(0x8005)
            ]
        );
        assert_eq!(machine.pc(), 0x8005);
    }

    #[test]
    fn test_trace_disabled_by_default() {
        let mut machine = Machine::new();
        machine.load_rom(&[0xEA], 0x8000).unwrap();
        machine.poke(0xFFFC, 0x00);
        machine.poke(0xFFFD, 0x80);
        machine.boot();

        machine.step().unwrap();
        assert!(machine.drain_events().is_empty());
    }
}
