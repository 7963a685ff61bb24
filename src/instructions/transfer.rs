//! # Register Transfer Instructions
//!
//! This module implements register-to-register transfers: TAX, TAY, TXA,
//! TYA, TSX and TXS. All update Z and N on the destination value except
//! TXS, which touches no flags.

use crate::{MachineError, MemoryBus, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), MachineError> {
    cpu.x = cpu.a;
    cpu.update_zn(cpu.x);

    Ok(())
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), MachineError> {
    cpu.y = cpu.a;
    cpu.update_zn(cpu.y);

    Ok(())
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), MachineError> {
    cpu.a = cpu.x;
    cpu.update_zn(cpu.a);

    Ok(())
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), MachineError> {
    cpu.a = cpu.y;
    cpu.update_zn(cpu.a);

    Ok(())
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), MachineError> {
    cpu.x = cpu.sp;
    cpu.update_zn(cpu.x);

    Ok(())
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// The one transfer that does NOT update flags.
pub(crate) fn execute_txs<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _opcode: u8,
) -> Result<(), MachineError> {
    cpu.sp = cpu.x;

    Ok(())
}
