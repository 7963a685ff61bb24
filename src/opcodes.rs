//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode metadata table that
//! serves as the single source of truth for 6502 instruction decoding.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 undocumented opcodes** - Marked with the `???` mnemonic and the
//!   `Illegal` instruction tag; dispatching one yields
//!   `MachineError::OpcodeNotImplemented`
//!
//! Each opcode entry includes:
//! - Mnemonic (for display and host tooling)
//! - Instruction tag (the dispatch key)
//! - Addressing mode
//! - Base cycle cost (excluding page-crossing and taken-branch penalties)
//! - Instruction size in bytes
//! - Whether an indexed read of this opcode pays the +1 page-cross cycle

use crate::addressing::AddressingMode;

/// The dispatch tag for an opcode: one variant per documented 6502
/// instruction, plus `Illegal` for the undocumented opcodes this emulator
/// rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// ADC
    Adc,
    /// AND
    And,
    /// ASL
    Asl,
    /// BCC
    Bcc,
    /// BCS
    Bcs,
    /// BEQ
    Beq,
    /// BIT
    Bit,
    /// BMI
    Bmi,
    /// BNE
    Bne,
    /// BPL
    Bpl,
    /// BRK
    Brk,
    /// BVC
    Bvc,
    /// BVS
    Bvs,
    /// CLC
    Clc,
    /// CLD
    Cld,
    /// CLI
    Cli,
    /// CLV
    Clv,
    /// CMP
    Cmp,
    /// CPX
    Cpx,
    /// CPY
    Cpy,
    /// DEC
    Dec,
    /// DEX
    Dex,
    /// DEY
    Dey,
    /// EOR
    Eor,
    /// INC
    Inc,
    /// INX
    Inx,
    /// INY
    Iny,
    /// JMP
    Jmp,
    /// JSR
    Jsr,
    /// LDA
    Lda,
    /// LDX
    Ldx,
    /// LDY
    Ldy,
    /// LSR
    Lsr,
    /// NOP
    Nop,
    /// ORA
    Ora,
    /// PHA
    Pha,
    /// PHP
    Php,
    /// PLA
    Pla,
    /// PLP
    Plp,
    /// ROL
    Rol,
    /// ROR
    Ror,
    /// RTI
    Rti,
    /// RTS
    Rts,
    /// SBC
    Sbc,
    /// SEC
    Sec,
    /// SED
    Sed,
    /// SEI
    Sei,
    /// STA
    Sta,
    /// STX
    Stx,
    /// STY
    Sty,
    /// TAX
    Tax,
    /// TAY
    Tay,
    /// TSX
    Tsx,
    /// TXA
    Txa,
    /// TXS
    Txs,
    /// TYA
    Tya,
    /// Undocumented opcode; dispatch reports `OpcodeNotImplemented`.
    Illegal,
}

/// Metadata for a single 6502 opcode.
///
/// This struct contains all static information about an instruction needed
/// for decoding and execution planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for undocumented
    /// opcodes).
    pub mnemonic: &'static str,

    /// Dispatch tag identifying the instruction semantics.
    pub instruction: Instruction,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing / taken-branch penalties).
    ///
    /// Documented instructions have cycles in the range 2-7. Undocumented
    /// opcodes are marked with 0 cycles.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    ///
    /// - 1 byte: Implicit, Accumulator modes
    /// - 2 bytes: Immediate, Zero Page, Relative, Indexed Indirect modes
    /// - 3 bytes: Absolute, Indirect modes
    pub size_bytes: u8,

    /// Whether an indexed read through this opcode costs one extra cycle
    /// when the effective address crosses a page boundary.
    pub page_cross_penalty: bool,
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// This table is the single source of truth for instruction metadata.
/// Index into the array using the opcode byte to retrieve its entry.
///
/// # Examples
///
/// ```
/// use sim6502::{Instruction, OPCODE_TABLE};
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.mnemonic, "BRK");
/// assert_eq!(brk.base_cycles, 7);
///
/// // Undocumented opcodes carry the Illegal tag
/// assert_eq!(OPCODE_TABLE[0x02].instruction, Instruction::Illegal);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00
    OpcodeMetadata {
        mnemonic: "BRK",
        instruction: Instruction::Brk,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 7,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x01
    OpcodeMetadata {
        mnemonic: "ORA",
        instruction: Instruction::Ora,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x02 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x03 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x04 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x05
    OpcodeMetadata {
        mnemonic: "ORA",
        instruction: Instruction::Ora,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x06
    OpcodeMetadata {
        mnemonic: "ASL",
        instruction: Instruction::Asl,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x07 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x08
    OpcodeMetadata {
        mnemonic: "PHP",
        instruction: Instruction::Php,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 3,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x09
    OpcodeMetadata {
        mnemonic: "ORA",
        instruction: Instruction::Ora,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x0A
    OpcodeMetadata {
        mnemonic: "ASL",
        instruction: Instruction::Asl,
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x0B - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x0C - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x0D
    OpcodeMetadata {
        mnemonic: "ORA",
        instruction: Instruction::Ora,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x0E
    OpcodeMetadata {
        mnemonic: "ASL",
        instruction: Instruction::Asl,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x0F - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x10
    OpcodeMetadata {
        mnemonic: "BPL",
        instruction: Instruction::Bpl,
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x11
    OpcodeMetadata {
        mnemonic: "ORA",
        instruction: Instruction::Ora,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        page_cross_penalty: true,
    },
    // 0x12 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x13 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x14 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x15
    OpcodeMetadata {
        mnemonic: "ORA",
        instruction: Instruction::Ora,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x16
    OpcodeMetadata {
        mnemonic: "ASL",
        instruction: Instruction::Asl,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x17 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x18
    OpcodeMetadata {
        mnemonic: "CLC",
        instruction: Instruction::Clc,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x19
    OpcodeMetadata {
        mnemonic: "ORA",
        instruction: Instruction::Ora,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: true,
    },
    // 0x1A - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x1B - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x1C - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x1D
    OpcodeMetadata {
        mnemonic: "ORA",
        instruction: Instruction::Ora,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: true,
    },
    // 0x1E
    OpcodeMetadata {
        mnemonic: "ASL",
        instruction: Instruction::Asl,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x1F - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x20
    OpcodeMetadata {
        mnemonic: "JSR",
        instruction: Instruction::Jsr,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x21
    OpcodeMetadata {
        mnemonic: "AND",
        instruction: Instruction::And,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x22 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x23 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x24
    OpcodeMetadata {
        mnemonic: "BIT",
        instruction: Instruction::Bit,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x25
    OpcodeMetadata {
        mnemonic: "AND",
        instruction: Instruction::And,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x26
    OpcodeMetadata {
        mnemonic: "ROL",
        instruction: Instruction::Rol,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x27 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x28
    OpcodeMetadata {
        mnemonic: "PLP",
        instruction: Instruction::Plp,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 4,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x29
    OpcodeMetadata {
        mnemonic: "AND",
        instruction: Instruction::And,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x2A
    OpcodeMetadata {
        mnemonic: "ROL",
        instruction: Instruction::Rol,
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x2B - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x2C
    OpcodeMetadata {
        mnemonic: "BIT",
        instruction: Instruction::Bit,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x2D
    OpcodeMetadata {
        mnemonic: "AND",
        instruction: Instruction::And,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x2E
    OpcodeMetadata {
        mnemonic: "ROL",
        instruction: Instruction::Rol,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x2F - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x30
    OpcodeMetadata {
        mnemonic: "BMI",
        instruction: Instruction::Bmi,
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x31
    OpcodeMetadata {
        mnemonic: "AND",
        instruction: Instruction::And,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        page_cross_penalty: true,
    },
    // 0x32 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x33 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x34 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x35
    OpcodeMetadata {
        mnemonic: "AND",
        instruction: Instruction::And,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x36
    OpcodeMetadata {
        mnemonic: "ROL",
        instruction: Instruction::Rol,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x37 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x38
    OpcodeMetadata {
        mnemonic: "SEC",
        instruction: Instruction::Sec,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x39
    OpcodeMetadata {
        mnemonic: "AND",
        instruction: Instruction::And,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: true,
    },
    // 0x3A - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x3B - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x3C - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x3D
    OpcodeMetadata {
        mnemonic: "AND",
        instruction: Instruction::And,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: true,
    },
    // 0x3E
    OpcodeMetadata {
        mnemonic: "ROL",
        instruction: Instruction::Rol,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x3F - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x40
    OpcodeMetadata {
        mnemonic: "RTI",
        instruction: Instruction::Rti,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 6,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x41
    OpcodeMetadata {
        mnemonic: "EOR",
        instruction: Instruction::Eor,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x42 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x43 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x44 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x45
    OpcodeMetadata {
        mnemonic: "EOR",
        instruction: Instruction::Eor,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x46
    OpcodeMetadata {
        mnemonic: "LSR",
        instruction: Instruction::Lsr,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x47 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x48
    OpcodeMetadata {
        mnemonic: "PHA",
        instruction: Instruction::Pha,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 3,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x49
    OpcodeMetadata {
        mnemonic: "EOR",
        instruction: Instruction::Eor,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x4A
    OpcodeMetadata {
        mnemonic: "LSR",
        instruction: Instruction::Lsr,
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x4B - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x4C
    OpcodeMetadata {
        mnemonic: "JMP",
        instruction: Instruction::Jmp,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 3,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x4D
    OpcodeMetadata {
        mnemonic: "EOR",
        instruction: Instruction::Eor,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x4E
    OpcodeMetadata {
        mnemonic: "LSR",
        instruction: Instruction::Lsr,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x4F - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x50
    OpcodeMetadata {
        mnemonic: "BVC",
        instruction: Instruction::Bvc,
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x51
    OpcodeMetadata {
        mnemonic: "EOR",
        instruction: Instruction::Eor,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        page_cross_penalty: true,
    },
    // 0x52 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x53 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x54 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x55
    OpcodeMetadata {
        mnemonic: "EOR",
        instruction: Instruction::Eor,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x56
    OpcodeMetadata {
        mnemonic: "LSR",
        instruction: Instruction::Lsr,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x57 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x58
    OpcodeMetadata {
        mnemonic: "CLI",
        instruction: Instruction::Cli,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x59
    OpcodeMetadata {
        mnemonic: "EOR",
        instruction: Instruction::Eor,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: true,
    },
    // 0x5A - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x5B - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x5C - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x5D
    OpcodeMetadata {
        mnemonic: "EOR",
        instruction: Instruction::Eor,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: true,
    },
    // 0x5E
    OpcodeMetadata {
        mnemonic: "LSR",
        instruction: Instruction::Lsr,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x5F - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x60
    OpcodeMetadata {
        mnemonic: "RTS",
        instruction: Instruction::Rts,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 6,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x61
    OpcodeMetadata {
        mnemonic: "ADC",
        instruction: Instruction::Adc,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x62 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x63 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x64 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x65
    OpcodeMetadata {
        mnemonic: "ADC",
        instruction: Instruction::Adc,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x66
    OpcodeMetadata {
        mnemonic: "ROR",
        instruction: Instruction::Ror,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x67 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x68
    OpcodeMetadata {
        mnemonic: "PLA",
        instruction: Instruction::Pla,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 4,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x69
    OpcodeMetadata {
        mnemonic: "ADC",
        instruction: Instruction::Adc,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x6A
    OpcodeMetadata {
        mnemonic: "ROR",
        instruction: Instruction::Ror,
        addressing_mode: AddressingMode::Accumulator,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x6B - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x6C
    OpcodeMetadata {
        mnemonic: "JMP",
        instruction: Instruction::Jmp,
        addressing_mode: AddressingMode::Indirect,
        base_cycles: 5,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x6D
    OpcodeMetadata {
        mnemonic: "ADC",
        instruction: Instruction::Adc,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x6E
    OpcodeMetadata {
        mnemonic: "ROR",
        instruction: Instruction::Ror,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x6F - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x70
    OpcodeMetadata {
        mnemonic: "BVS",
        instruction: Instruction::Bvs,
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x71
    OpcodeMetadata {
        mnemonic: "ADC",
        instruction: Instruction::Adc,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        page_cross_penalty: true,
    },
    // 0x72 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x73 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x74 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x75
    OpcodeMetadata {
        mnemonic: "ADC",
        instruction: Instruction::Adc,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x76
    OpcodeMetadata {
        mnemonic: "ROR",
        instruction: Instruction::Ror,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x77 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x78
    OpcodeMetadata {
        mnemonic: "SEI",
        instruction: Instruction::Sei,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x79
    OpcodeMetadata {
        mnemonic: "ADC",
        instruction: Instruction::Adc,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: true,
    },
    // 0x7A - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x7B - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x7C - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x7D
    OpcodeMetadata {
        mnemonic: "ADC",
        instruction: Instruction::Adc,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: true,
    },
    // 0x7E
    OpcodeMetadata {
        mnemonic: "ROR",
        instruction: Instruction::Ror,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x7F - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x80 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x81
    OpcodeMetadata {
        mnemonic: "STA",
        instruction: Instruction::Sta,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x82 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x83 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x84
    OpcodeMetadata {
        mnemonic: "STY",
        instruction: Instruction::Sty,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x85
    OpcodeMetadata {
        mnemonic: "STA",
        instruction: Instruction::Sta,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x86
    OpcodeMetadata {
        mnemonic: "STX",
        instruction: Instruction::Stx,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x87 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x88
    OpcodeMetadata {
        mnemonic: "DEY",
        instruction: Instruction::Dey,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x89 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x8A
    OpcodeMetadata {
        mnemonic: "TXA",
        instruction: Instruction::Txa,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x8B - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x8C
    OpcodeMetadata {
        mnemonic: "STY",
        instruction: Instruction::Sty,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x8D
    OpcodeMetadata {
        mnemonic: "STA",
        instruction: Instruction::Sta,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x8E
    OpcodeMetadata {
        mnemonic: "STX",
        instruction: Instruction::Stx,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x8F - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x90
    OpcodeMetadata {
        mnemonic: "BCC",
        instruction: Instruction::Bcc,
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x91
    OpcodeMetadata {
        mnemonic: "STA",
        instruction: Instruction::Sta,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 6,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x92 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x93 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x94
    OpcodeMetadata {
        mnemonic: "STY",
        instruction: Instruction::Sty,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x95
    OpcodeMetadata {
        mnemonic: "STA",
        instruction: Instruction::Sta,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x96
    OpcodeMetadata {
        mnemonic: "STX",
        instruction: Instruction::Stx,
        addressing_mode: AddressingMode::ZeroPageY,
        base_cycles: 4,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0x97 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x98
    OpcodeMetadata {
        mnemonic: "TYA",
        instruction: Instruction::Tya,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x99
    OpcodeMetadata {
        mnemonic: "STA",
        instruction: Instruction::Sta,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 5,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x9A
    OpcodeMetadata {
        mnemonic: "TXS",
        instruction: Instruction::Txs,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x9B - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x9C - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x9D
    OpcodeMetadata {
        mnemonic: "STA",
        instruction: Instruction::Sta,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 5,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0x9E - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0x9F - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xA0
    OpcodeMetadata {
        mnemonic: "LDY",
        instruction: Instruction::Ldy,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xA1
    OpcodeMetadata {
        mnemonic: "LDA",
        instruction: Instruction::Lda,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xA2
    OpcodeMetadata {
        mnemonic: "LDX",
        instruction: Instruction::Ldx,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xA3 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xA4
    OpcodeMetadata {
        mnemonic: "LDY",
        instruction: Instruction::Ldy,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xA5
    OpcodeMetadata {
        mnemonic: "LDA",
        instruction: Instruction::Lda,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xA6
    OpcodeMetadata {
        mnemonic: "LDX",
        instruction: Instruction::Ldx,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xA7 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xA8
    OpcodeMetadata {
        mnemonic: "TAY",
        instruction: Instruction::Tay,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xA9
    OpcodeMetadata {
        mnemonic: "LDA",
        instruction: Instruction::Lda,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xAA
    OpcodeMetadata {
        mnemonic: "TAX",
        instruction: Instruction::Tax,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xAB - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xAC
    OpcodeMetadata {
        mnemonic: "LDY",
        instruction: Instruction::Ldy,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0xAD
    OpcodeMetadata {
        mnemonic: "LDA",
        instruction: Instruction::Lda,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0xAE
    OpcodeMetadata {
        mnemonic: "LDX",
        instruction: Instruction::Ldx,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0xAF - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xB0
    OpcodeMetadata {
        mnemonic: "BCS",
        instruction: Instruction::Bcs,
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xB1
    OpcodeMetadata {
        mnemonic: "LDA",
        instruction: Instruction::Lda,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        page_cross_penalty: true,
    },
    // 0xB2 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xB3 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xB4
    OpcodeMetadata {
        mnemonic: "LDY",
        instruction: Instruction::Ldy,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xB5
    OpcodeMetadata {
        mnemonic: "LDA",
        instruction: Instruction::Lda,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xB6
    OpcodeMetadata {
        mnemonic: "LDX",
        instruction: Instruction::Ldx,
        addressing_mode: AddressingMode::ZeroPageY,
        base_cycles: 4,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xB7 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xB8
    OpcodeMetadata {
        mnemonic: "CLV",
        instruction: Instruction::Clv,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xB9
    OpcodeMetadata {
        mnemonic: "LDA",
        instruction: Instruction::Lda,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: true,
    },
    // 0xBA
    OpcodeMetadata {
        mnemonic: "TSX",
        instruction: Instruction::Tsx,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xBB - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xBC
    OpcodeMetadata {
        mnemonic: "LDY",
        instruction: Instruction::Ldy,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: true,
    },
    // 0xBD
    OpcodeMetadata {
        mnemonic: "LDA",
        instruction: Instruction::Lda,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: true,
    },
    // 0xBE
    OpcodeMetadata {
        mnemonic: "LDX",
        instruction: Instruction::Ldx,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: true,
    },
    // 0xBF - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xC0
    OpcodeMetadata {
        mnemonic: "CPY",
        instruction: Instruction::Cpy,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xC1
    OpcodeMetadata {
        mnemonic: "CMP",
        instruction: Instruction::Cmp,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xC2 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xC3 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xC4
    OpcodeMetadata {
        mnemonic: "CPY",
        instruction: Instruction::Cpy,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xC5
    OpcodeMetadata {
        mnemonic: "CMP",
        instruction: Instruction::Cmp,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xC6
    OpcodeMetadata {
        mnemonic: "DEC",
        instruction: Instruction::Dec,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xC7 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xC8
    OpcodeMetadata {
        mnemonic: "INY",
        instruction: Instruction::Iny,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xC9
    OpcodeMetadata {
        mnemonic: "CMP",
        instruction: Instruction::Cmp,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xCA
    OpcodeMetadata {
        mnemonic: "DEX",
        instruction: Instruction::Dex,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xCB - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xCC
    OpcodeMetadata {
        mnemonic: "CPY",
        instruction: Instruction::Cpy,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0xCD
    OpcodeMetadata {
        mnemonic: "CMP",
        instruction: Instruction::Cmp,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0xCE
    OpcodeMetadata {
        mnemonic: "DEC",
        instruction: Instruction::Dec,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0xCF - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xD0
    OpcodeMetadata {
        mnemonic: "BNE",
        instruction: Instruction::Bne,
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xD1
    OpcodeMetadata {
        mnemonic: "CMP",
        instruction: Instruction::Cmp,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        page_cross_penalty: true,
    },
    // 0xD2 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xD3 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xD4 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xD5
    OpcodeMetadata {
        mnemonic: "CMP",
        instruction: Instruction::Cmp,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xD6
    OpcodeMetadata {
        mnemonic: "DEC",
        instruction: Instruction::Dec,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xD7 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xD8
    OpcodeMetadata {
        mnemonic: "CLD",
        instruction: Instruction::Cld,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xD9
    OpcodeMetadata {
        mnemonic: "CMP",
        instruction: Instruction::Cmp,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: true,
    },
    // 0xDA - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xDB - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xDC - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xDD
    OpcodeMetadata {
        mnemonic: "CMP",
        instruction: Instruction::Cmp,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: true,
    },
    // 0xDE
    OpcodeMetadata {
        mnemonic: "DEC",
        instruction: Instruction::Dec,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0xDF - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xE0
    OpcodeMetadata {
        mnemonic: "CPX",
        instruction: Instruction::Cpx,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xE1
    OpcodeMetadata {
        mnemonic: "SBC",
        instruction: Instruction::Sbc,
        addressing_mode: AddressingMode::IndirectX,
        base_cycles: 6,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xE2 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xE3 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xE4
    OpcodeMetadata {
        mnemonic: "CPX",
        instruction: Instruction::Cpx,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xE5
    OpcodeMetadata {
        mnemonic: "SBC",
        instruction: Instruction::Sbc,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 3,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xE6
    OpcodeMetadata {
        mnemonic: "INC",
        instruction: Instruction::Inc,
        addressing_mode: AddressingMode::ZeroPage,
        base_cycles: 5,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xE7 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xE8
    OpcodeMetadata {
        mnemonic: "INX",
        instruction: Instruction::Inx,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xE9
    OpcodeMetadata {
        mnemonic: "SBC",
        instruction: Instruction::Sbc,
        addressing_mode: AddressingMode::Immediate,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xEA
    OpcodeMetadata {
        mnemonic: "NOP",
        instruction: Instruction::Nop,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xEB - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xEC
    OpcodeMetadata {
        mnemonic: "CPX",
        instruction: Instruction::Cpx,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0xED
    OpcodeMetadata {
        mnemonic: "SBC",
        instruction: Instruction::Sbc,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0xEE
    OpcodeMetadata {
        mnemonic: "INC",
        instruction: Instruction::Inc,
        addressing_mode: AddressingMode::Absolute,
        base_cycles: 6,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0xEF - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xF0
    OpcodeMetadata {
        mnemonic: "BEQ",
        instruction: Instruction::Beq,
        addressing_mode: AddressingMode::Relative,
        base_cycles: 2,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xF1
    OpcodeMetadata {
        mnemonic: "SBC",
        instruction: Instruction::Sbc,
        addressing_mode: AddressingMode::IndirectY,
        base_cycles: 5,
        size_bytes: 2,
        page_cross_penalty: true,
    },
    // 0xF2 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xF3 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xF4 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xF5
    OpcodeMetadata {
        mnemonic: "SBC",
        instruction: Instruction::Sbc,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 4,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xF6
    OpcodeMetadata {
        mnemonic: "INC",
        instruction: Instruction::Inc,
        addressing_mode: AddressingMode::ZeroPageX,
        base_cycles: 6,
        size_bytes: 2,
        page_cross_penalty: false,
    },
    // 0xF7 - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xF8
    OpcodeMetadata {
        mnemonic: "SED",
        instruction: Instruction::Sed,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 2,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xF9
    OpcodeMetadata {
        mnemonic: "SBC",
        instruction: Instruction::Sbc,
        addressing_mode: AddressingMode::AbsoluteY,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: true,
    },
    // 0xFA - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xFB - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xFC - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
    // 0xFD
    OpcodeMetadata {
        mnemonic: "SBC",
        instruction: Instruction::Sbc,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 4,
        size_bytes: 3,
        page_cross_penalty: true,
    },
    // 0xFE
    OpcodeMetadata {
        mnemonic: "INC",
        instruction: Instruction::Inc,
        addressing_mode: AddressingMode::AbsoluteX,
        base_cycles: 7,
        size_bytes: 3,
        page_cross_penalty: false,
    },
    // 0xFF - Illegal/Undocumented opcode
    OpcodeMetadata {
        mnemonic: "???",
        instruction: Instruction::Illegal,
        addressing_mode: AddressingMode::Implicit,
        base_cycles: 0,
        size_bytes: 1,
        page_cross_penalty: false,
    },
];
