//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations: ASL, LSR, ROL
//! and ROR, each on either the accumulator or a memory operand.
//!
//! Memory forms are read-modify-write through the bus. All four update
//! C from the bit shifted out and Z/N from the result (LSR's result can
//! never be negative, so its N is always clear).

use crate::{MachineError, MemoryBus, CPU, OPCODE_TABLE};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// C takes the old bit 7; bit 0 becomes 0.
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), MachineError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let operand = cpu.fetch_operand(metadata.addressing_mode);
    let value = cpu.read_operand(operand);

    cpu.flag_c = (value & 0x80) != 0;
    let result = value << 1;

    cpu.write_operand(operand, result);
    cpu.update_zn(result);

    Ok(())
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// C takes the old bit 0; bit 7 becomes 0, so N is always cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), MachineError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let operand = cpu.fetch_operand(metadata.addressing_mode);
    let value = cpu.read_operand(operand);

    cpu.flag_c = (value & 0x01) != 0;
    let result = value >> 1;

    cpu.write_operand(operand, result);
    cpu.update_zn(result);

    Ok(())
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry rotates into bit 0; C takes the old bit 7.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), MachineError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let operand = cpu.fetch_operand(metadata.addressing_mode);
    let value = cpu.read_operand(operand);
    let old_carry = if cpu.flag_c { 1u8 } else { 0 };

    cpu.flag_c = (value & 0x80) != 0;
    let result = (value << 1) | old_carry;

    cpu.write_operand(operand, result);
    cpu.update_zn(result);

    Ok(())
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry rotates into bit 7; C takes the old bit 0.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), MachineError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let operand = cpu.fetch_operand(metadata.addressing_mode);
    let value = cpu.read_operand(operand);
    let old_carry = if cpu.flag_c { 0x80u8 } else { 0 };

    cpu.flag_c = (value & 0x01) != 0;
    let result = (value >> 1) | old_carry;

    cpu.write_operand(operand, result);
    cpu.update_zn(result);

    Ok(())
}
