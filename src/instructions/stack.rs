//! # Stack Instructions
//!
//! This module implements the stack push/pull operations: PHA, PLA, PHP
//! and PLP.
//!
//! The pushed status byte always carries bits 4 and 5 (PHP behaves like a
//! software interrupt push); a pulled status clears B and ignores bit 5,
//! so the live B flag never round-trips through the stack.

use crate::cpu::{FLAG_B, FLAG_U};
use crate::{MachineError, MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction. No flag effects.
pub(crate) fn execute_pha<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), MachineError> {
    let value = cpu.a;
    cpu.push8(value);

    Ok(())
}

/// Executes the PLA (Pull Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), MachineError> {
    let value = cpu.pop8();
    cpu.a = value;
    cpu.update_zn(value);

    Ok(())
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// Pushes `P | 0x30`: B and bit 5 are always set in the pushed byte.
pub(crate) fn execute_php<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), MachineError> {
    let value = cpu.status() | FLAG_B | FLAG_U;
    cpu.push8(value);

    Ok(())
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Restores all flags from the pulled byte except B, which is cleared in
/// the live register.
pub(crate) fn execute_plp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), MachineError> {
    let value = cpu.pop8();
    cpu.set_status(value & !FLAG_B);

    Ok(())
}
