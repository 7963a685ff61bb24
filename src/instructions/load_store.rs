//! # Load and Store Instructions
//!
//! This module implements the register/memory transfer operations:
//! LDA, LDX, LDY, STA, STX and STY.
//!
//! Loads update Z and N on the loaded value; stores touch no flags. Stores
//! never take a page-cross penalty (their table cycles already include the
//! indexed fixup), and a store through the bus is what makes the
//! character-out register work for every addressing mode.

use crate::{MachineError, MemoryBus, CPU, OPCODE_TABLE};

/// Executes the LDA (Load Accumulator) instruction. Updates Z and N.
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), MachineError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let operand = cpu.fetch_operand(metadata.addressing_mode);
    let value = cpu.read_operand(operand);
    cpu.add_page_cross_penalty(opcode, operand);

    cpu.a = value;
    cpu.update_zn(value);

    Ok(())
}

/// Executes the LDX (Load X Register) instruction. Updates Z and N.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), MachineError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let operand = cpu.fetch_operand(metadata.addressing_mode);
    let value = cpu.read_operand(operand);
    cpu.add_page_cross_penalty(opcode, operand);

    cpu.x = value;
    cpu.update_zn(value);

    Ok(())
}

/// Executes the LDY (Load Y Register) instruction. Updates Z and N.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), MachineError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let operand = cpu.fetch_operand(metadata.addressing_mode);
    let value = cpu.read_operand(operand);
    cpu.add_page_cross_penalty(opcode, operand);

    cpu.y = value;
    cpu.update_zn(value);

    Ok(())
}

/// Executes the STA (Store Accumulator) instruction. No flag effects.
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), MachineError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let operand = cpu.fetch_operand(metadata.addressing_mode);

    cpu.write_operand(operand, cpu.a);

    Ok(())
}

/// Executes the STX (Store X Register) instruction. No flag effects.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), MachineError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let operand = cpu.fetch_operand(metadata.addressing_mode);

    cpu.write_operand(operand, cpu.x);

    Ok(())
}

/// Executes the STY (Store Y Register) instruction. No flag effects.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), MachineError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let operand = cpu.fetch_operand(metadata.addressing_mode);

    cpu.write_operand(operand, cpu.y);

    Ok(())
}
