//! # Control Flow Instructions
//!
//! This module implements control flow operations: JMP, JSR, RTS, RTI,
//! BRK and NOP.
//!
//! BRK is a software interrupt that additionally halts the machine's run
//! loop: it discards its padding byte (so the pushed return address is
//! BRK+2), services through the IRQ vector with B set in the pushed
//! status, and raises the CPU's halt flag. A host that clears the flag can
//! still return through the handler's RTI.

use crate::cpu::{Operand, FLAG_B, IRQ_VECTOR};
use crate::{MachineError, MemoryBus, CPU, OPCODE_TABLE};

/// Executes the JMP (Jump) instruction.
///
/// Absolute mode loads the operand address into PC. Indirect mode
/// resolution has already applied the NMOS page-wrap bug, so the resolved
/// address is the final target.
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), MachineError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let operand = cpu.fetch_operand(metadata.addressing_mode);

    if let Operand::Memory { addr, .. } = operand {
        cpu.pc = addr;
    }

    Ok(())
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last operand byte (PC-1 after the operand
/// fetch), high byte first, then transfers to the target. RTS undoes this
/// by popping and adding one.
pub(crate) fn execute_jsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    opcode: u8,
) -> Result<(), MachineError> {
    let metadata = &OPCODE_TABLE[opcode as usize];
    let operand = cpu.fetch_operand(metadata.addressing_mode);

    if let Operand::Memory { addr, .. } = operand {
        let return_address = cpu.pc.wrapping_sub(1);
        cpu.push16(return_address);
        cpu.pc = addr;
    }

    Ok(())
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pops the address JSR pushed and resumes one byte past it.
pub(crate) fn execute_rts<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), MachineError> {
    let return_address = cpu.pop16();
    cpu.pc = return_address.wrapping_add(1);

    Ok(())
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pops status (B cleared in the live register), then the interrupted PC.
/// Unlike RTS there is no +1: the pushed PC is resumed exactly.
pub(crate) fn execute_rti<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), MachineError> {
    let status = cpu.pop8();
    cpu.set_status(status & !FLAG_B);
    cpu.pc = cpu.pop16();

    Ok(())
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// Fetches and discards the padding byte so the pushed return address is
/// BRK+2, pushes PC and status with B and bit 5 set, sets I, jumps
/// through the IRQ vector, and halts the run loop.
pub(crate) fn execute_brk<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), MachineError> {
    // BRK carries an unused padding byte; skipping it is what makes the
    // pushed address BRK+2.
    let _padding = cpu.fetch_u8();

    cpu.service_interrupt(IRQ_VECTOR, true);

    // Deliberate deviation from hardware: the run loop treats BRK as a
    // stop request. The BRK vector was still serviced, so a host that
    // clears the flag can resume through RTI.
    cpu.halted = true;

    Ok(())
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(
    _cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), MachineError> {
    Ok(())
}
