//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! INC and DEC on memory (read-modify-write), INX, INY, DEX and DEY on
//! the index registers. All update Z and N on the wrapped result.

use crate::{MachineError, MemoryBus, CPU, OPCODE_TABLE};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), MachineError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let operand = cpu.fetch_operand(metadata.addressing_mode);
    let value = cpu.read_operand(operand);

    let result = value.wrapping_add(1);
    cpu.write_operand(operand, result);
    cpu.update_zn(result);

    Ok(())
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), MachineError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let operand = cpu.fetch_operand(metadata.addressing_mode);
    let value = cpu.read_operand(operand);

    let result = value.wrapping_sub(1);
    cpu.write_operand(operand, result);
    cpu.update_zn(result);

    Ok(())
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), MachineError> {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.update_zn(cpu.x);

    Ok(())
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), MachineError> {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.update_zn(cpu.y);

    Ok(())
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), MachineError> {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.update_zn(cpu.x);

    Ok(())
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), MachineError> {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.update_zn(cpu.y);

    Ok(())
}
