//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state
//! and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C (individual bool fields)
//! - **Cycle counter**: u64 monotonically increasing best-effort count
//! - **Interrupt latches**: IRQ (level-like) and NMI (edge-like)
//! - **Halt flag**: set by BRK so a host run loop can stop
//!
//! ## Execution Model
//!
//! `step()` first services a pending interrupt (NMI beats IRQ; IRQ is
//! masked by the I flag), then fetches one opcode, looks it up in
//! [`OPCODE_TABLE`], and dispatches on the table's instruction tag. Operand
//! resolution advances the PC past the operand bytes, so after an
//! `OpcodeNotImplemented` error the PC sits exactly one byte past the
//! offending opcode.
//!
//! The live B flag is not meaningful: pushes compute the status byte at
//! push time (bit 5 always set; bit 4 set for BRK/PHP, clear for hardware
//! interrupts) and pulls clear it.

use crate::{AddressingMode, Instruction, MachineError, MemoryBus, OPCODE_TABLE};

/// NMI handler pointer (little-endian word).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// Power-on / reset entry pointer (little-endian word).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ and BRK handler pointer (little-endian word).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Base of the stack page; the effective stack address is `0x0100 | SP`.
const STACK_BASE: u16 = 0x0100;

/// Cycles charged for servicing a hardware interrupt.
const INTERRUPT_CYCLES: u64 = 7;

// Status register bit masks (NV-BDIZC).
pub(crate) const FLAG_C: u8 = 0b0000_0001;
pub(crate) const FLAG_Z: u8 = 0b0000_0010;
pub(crate) const FLAG_I: u8 = 0b0000_0100;
pub(crate) const FLAG_D: u8 = 0b0000_1000;
pub(crate) const FLAG_B: u8 = 0b0001_0000;
pub(crate) const FLAG_U: u8 = 0b0010_0000;
pub(crate) const FLAG_V: u8 = 0b0100_0000;
pub(crate) const FLAG_N: u8 = 0b1000_0000;

/// A resolved operand: where an instruction's data lives.
///
/// Produced by [`CPU::fetch_operand`], which has already advanced the PC
/// past the operand bytes. For `Relative` mode the address is the branch
/// target; for `Indirect` it is the final JMP target (page-wrap bug
/// applied).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    /// No operand (implied instructions).
    Implied,

    /// The operand is the accumulator register.
    Accumulator,

    /// The operand lives in memory at `addr`. `page_crossed` reports
    /// whether indexed/relative resolution crossed a page boundary.
    Memory { addr: u16, page_crossed: bool },
}

impl Operand {
    pub(crate) fn page_crossed(&self) -> bool {
        matches!(
            self,
            Operand::Memory {
                page_crossed: true,
                ..
            }
        )
    }
}

/// 6502 CPU state and execution context.
///
/// The CPU struct contains all processor state including registers, flags,
/// program counter, stack pointer, interrupt latches and cycle counter. It
/// is generic over the memory implementation via the [`MemoryBus`] trait.
/// Every memory access (operand fetches, stack traffic, vector reads)
/// goes through the bus, which is what makes memory-mapped I/O work for
/// every addressing mode.
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 | sp gives the full stack address)
    pub(crate) sp: u8,

    /// Negative flag (set if bit 7 of result is 1)
    pub(crate) flag_n: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Break flag (don't-care between pushes; see module docs)
    pub(crate) flag_b: bool,

    /// Decimal mode flag (tracked; arithmetic stays binary)
    pub(crate) flag_d: bool,

    /// Interrupt disable flag (blocks IRQ when set)
    pub(crate) flag_i: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Carry flag (set on unsigned overflow/underflow)
    pub(crate) flag_c: bool,

    /// Total CPU cycles executed (best-effort)
    pub(crate) cycles: u64,

    /// Level-like IRQ latch; stays pending until serviced.
    pub(crate) irq_pending: bool,

    /// Edge-like NMI latch; cleared when serviced.
    pub(crate) nmi_pending: bool,

    /// Set by BRK so a host run loop can stop.
    pub(crate) halted: bool,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU in the 6502 power-on reset state.
    ///
    /// Equivalent to constructing and immediately calling [`CPU::boot`]:
    /// registers zeroed, SP = 0xFD, only the I flag set, and the PC loaded
    /// from the reset vector at 0xFFFC/0xFFFD.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFD,
            flag_n: false,
            flag_v: false,
            flag_b: false,
            flag_d: false,
            flag_i: true,
            flag_z: false,
            flag_c: false,
            cycles: 0,
            irq_pending: false,
            nmi_pending: false,
            halted: false,
            memory,
        };
        cpu.boot();
        cpu
    }

    /// Restores power-on state and rereads the reset vector.
    ///
    /// Register file cleared, SP = 0xFD, status = only I set, halt flag and
    /// both interrupt latches cleared, cycle counter zeroed, and PC loaded
    /// from the little-endian word at 0xFFFC.
    pub fn boot(&mut self) {
        self.a = 0x00;
        self.x = 0x00;
        self.y = 0x00;
        self.sp = 0xFD;
        self.set_status(FLAG_I);
        self.cycles = 0;
        self.irq_pending = false;
        self.nmi_pending = false;
        self.halted = false;

        let pc_low = self.memory.read(RESET_VECTOR) as u16;
        let pc_high = self.memory.read(RESET_VECTOR.wrapping_add(1)) as u16;
        self.pc = (pc_high << 8) | pc_low;
    }

    /// Executes one instruction and advances the CPU state.
    ///
    /// Performs, in order:
    /// 1. Interrupt service: a pending NMI, else a pending IRQ when the I
    ///    flag is clear (the serviced latch is cleared; a masked IRQ stays
    ///    latched)
    /// 2. Fetch the opcode byte at PC (advancing PC)
    /// 3. Look up the instruction in [`OPCODE_TABLE`] and charge its base
    ///    cycles
    /// 4. Dispatch to the instruction handler
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the instruction executed
    /// - `Err(MachineError::OpcodeNotImplemented(opcode))` for an
    ///   undocumented opcode; the PC is left just past the opcode byte
    pub fn step(&mut self) -> Result<(), MachineError> {
        // NMI beats IRQ; IRQ is masked by the I flag and stays latched
        // while masked.
        if self.nmi_pending {
            self.nmi_pending = false;
            self.service_interrupt(NMI_VECTOR, false);
            self.cycles += INTERRUPT_CYCLES;
        } else if self.irq_pending && !self.flag_i {
            self.irq_pending = false;
            self.service_interrupt(IRQ_VECTOR, false);
            self.cycles += INTERRUPT_CYCLES;
        }

        let opcode = self.fetch_u8();
        let metadata = &OPCODE_TABLE[opcode as usize];

        // Base cycle cost; handlers add taken-branch and page-cross
        // penalties on top.
        self.cycles += metadata.base_cycles as u64;

        match metadata.instruction {
            Instruction::Adc => crate::instructions::alu::execute_adc(self, opcode)?,
            Instruction::And => crate::instructions::alu::execute_and(self, opcode)?,
            Instruction::Asl => crate::instructions::shifts::execute_asl(self, opcode)?,
            Instruction::Bcc => crate::instructions::branches::execute_bcc(self, opcode)?,
            Instruction::Bcs => crate::instructions::branches::execute_bcs(self, opcode)?,
            Instruction::Beq => crate::instructions::branches::execute_beq(self, opcode)?,
            Instruction::Bit => crate::instructions::alu::execute_bit(self, opcode)?,
            Instruction::Bmi => crate::instructions::branches::execute_bmi(self, opcode)?,
            Instruction::Bne => crate::instructions::branches::execute_bne(self, opcode)?,
            Instruction::Bpl => crate::instructions::branches::execute_bpl(self, opcode)?,
            Instruction::Brk => crate::instructions::control::execute_brk(self, opcode)?,
            Instruction::Bvc => crate::instructions::branches::execute_bvc(self, opcode)?,
            Instruction::Bvs => crate::instructions::branches::execute_bvs(self, opcode)?,
            Instruction::Clc => crate::instructions::flags::execute_clc(self, opcode)?,
            Instruction::Cld => crate::instructions::flags::execute_cld(self, opcode)?,
            Instruction::Cli => crate::instructions::flags::execute_cli(self, opcode)?,
            Instruction::Clv => crate::instructions::flags::execute_clv(self, opcode)?,
            Instruction::Cmp => crate::instructions::alu::execute_cmp(self, opcode)?,
            Instruction::Cpx => crate::instructions::alu::execute_cpx(self, opcode)?,
            Instruction::Cpy => crate::instructions::alu::execute_cpy(self, opcode)?,
            Instruction::Dec => crate::instructions::inc_dec::execute_dec(self, opcode)?,
            Instruction::Dex => crate::instructions::inc_dec::execute_dex(self, opcode)?,
            Instruction::Dey => crate::instructions::inc_dec::execute_dey(self, opcode)?,
            Instruction::Eor => crate::instructions::alu::execute_eor(self, opcode)?,
            Instruction::Inc => crate::instructions::inc_dec::execute_inc(self, opcode)?,
            Instruction::Inx => crate::instructions::inc_dec::execute_inx(self, opcode)?,
            Instruction::Iny => crate::instructions::inc_dec::execute_iny(self, opcode)?,
            Instruction::Jmp => crate::instructions::control::execute_jmp(self, opcode)?,
            Instruction::Jsr => crate::instructions::control::execute_jsr(self, opcode)?,
            Instruction::Lda => crate::instructions::load_store::execute_lda(self, opcode)?,
            Instruction::Ldx => crate::instructions::load_store::execute_ldx(self, opcode)?,
            Instruction::Ldy => crate::instructions::load_store::execute_ldy(self, opcode)?,
            Instruction::Lsr => crate::instructions::shifts::execute_lsr(self, opcode)?,
            Instruction::Nop => crate::instructions::control::execute_nop(self, opcode)?,
            Instruction::Ora => crate::instructions::alu::execute_ora(self, opcode)?,
            Instruction::Pha => crate::instructions::stack::execute_pha(self, opcode)?,
            Instruction::Php => crate::instructions::stack::execute_php(self, opcode)?,
            Instruction::Pla => crate::instructions::stack::execute_pla(self, opcode)?,
            Instruction::Plp => crate::instructions::stack::execute_plp(self, opcode)?,
            Instruction::Rol => crate::instructions::shifts::execute_rol(self, opcode)?,
            Instruction::Ror => crate::instructions::shifts::execute_ror(self, opcode)?,
            Instruction::Rti => crate::instructions::control::execute_rti(self, opcode)?,
            Instruction::Rts => crate::instructions::control::execute_rts(self, opcode)?,
            Instruction::Sbc => crate::instructions::alu::execute_sbc(self, opcode)?,
            Instruction::Sec => crate::instructions::flags::execute_sec(self, opcode)?,
            Instruction::Sed => crate::instructions::flags::execute_sed(self, opcode)?,
            Instruction::Sei => crate::instructions::flags::execute_sei(self, opcode)?,
            Instruction::Sta => crate::instructions::load_store::execute_sta(self, opcode)?,
            Instruction::Stx => crate::instructions::load_store::execute_stx(self, opcode)?,
            Instruction::Sty => crate::instructions::load_store::execute_sty(self, opcode)?,
            Instruction::Tax => crate::instructions::transfer::execute_tax(self, opcode)?,
            Instruction::Tay => crate::instructions::transfer::execute_tay(self, opcode)?,
            Instruction::Tsx => crate::instructions::transfer::execute_tsx(self, opcode)?,
            Instruction::Txa => crate::instructions::transfer::execute_txa(self, opcode)?,
            Instruction::Txs => crate::instructions::transfer::execute_txs(self, opcode)?,
            Instruction::Tya => crate::instructions::transfer::execute_tya(self, opcode)?,
            Instruction::Illegal => {
                return Err(MachineError::OpcodeNotImplemented(opcode));
            }
        }

        Ok(())
    }

    // ========== Interrupt Controller ==========

    /// Latches an IRQ request. Level-like: stays pending until serviced,
    /// so a request made while the I flag is set is not lost.
    pub fn trigger_irq(&mut self) {
        self.irq_pending = true;
    }

    /// Latches an NMI request. Edge-like: cleared when serviced.
    pub fn trigger_nmi(&mut self) {
        self.nmi_pending = true;
    }

    /// Pushes PC and status, sets I, and jumps through `vector`.
    ///
    /// The pushed status byte always carries bit 5; bit 4 (B) is set only
    /// for software interrupts (`set_b`, used by BRK) and cleared for
    /// hardware IRQ/NMI. The live flags other than I are unchanged. The
    /// caller accounts for cycles (the interrupt head charges 7; BRK's
    /// come from its table entry).
    pub(crate) fn service_interrupt(&mut self, vector: u16, set_b: bool) {
        self.push16(self.pc);

        let mut pushed = self.status() | FLAG_U;
        if set_b {
            pushed |= FLAG_B;
        } else {
            pushed &= !FLAG_B;
        }
        self.push8(pushed);

        self.flag_i = true;

        let pc_low = self.memory.read(vector) as u16;
        let pc_high = self.memory.read(vector.wrapping_add(1)) as u16;
        self.pc = (pc_high << 8) | pc_low;
    }

    // ========== Fetch and Stack Primitives ==========

    /// Reads the byte at PC and advances PC (wrapping at 0xFFFF).
    pub(crate) fn fetch_u8(&mut self) -> u8 {
        let byte = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Reads a little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_u16(&mut self) -> u16 {
        let low = self.fetch_u8() as u16;
        let high = self.fetch_u8() as u16;
        (high << 8) | low
    }

    /// Pushes a byte at `0x0100 | SP`, then decrements SP (wrapping within
    /// the stack page).
    pub(crate) fn push8(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Increments SP (wrapping), then reads the byte at `0x0100 | SP`.
    pub(crate) fn pop8(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pushes a word, high byte first, so it pops back low-then-high.
    pub(crate) fn push16(&mut self, value: u16) {
        self.push8((value >> 8) as u8);
        self.push8((value & 0xFF) as u8);
    }

    /// Pops a word pushed by [`CPU::push16`].
    pub(crate) fn pop16(&mut self) -> u16 {
        let low = self.pop8() as u16;
        let high = self.pop8() as u16;
        (high << 8) | low
    }

    // ========== Addressing Unit ==========

    /// Resolves the operand for `mode`, advancing PC past the operand
    /// bytes.
    ///
    /// All pointer reads go through the bus. Zero-page indexed modes wrap
    /// within the zero page; `(zp,X)` and `(zp),Y` pointer high bytes wrap
    /// at 0xFF; `Indirect` applies the NMOS JMP page-wrap bug; `Relative`
    /// resolves to the branch target and reports a page cross against the
    /// PC after the operand byte.
    pub(crate) fn fetch_operand(&mut self, mode: AddressingMode) -> Operand {
        match mode {
            AddressingMode::Implicit => Operand::Implied,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => {
                let addr = self.pc;
                self.pc = self.pc.wrapping_add(1);
                Operand::Memory {
                    addr,
                    page_crossed: false,
                }
            }
            AddressingMode::ZeroPage => {
                let addr = self.fetch_u8() as u16;
                Operand::Memory {
                    addr,
                    page_crossed: false,
                }
            }
            AddressingMode::ZeroPageX => {
                let addr = self.fetch_u8().wrapping_add(self.x) as u16;
                Operand::Memory {
                    addr,
                    page_crossed: false,
                }
            }
            AddressingMode::ZeroPageY => {
                let addr = self.fetch_u8().wrapping_add(self.y) as u16;
                Operand::Memory {
                    addr,
                    page_crossed: false,
                }
            }
            AddressingMode::Absolute => {
                let addr = self.fetch_u16();
                Operand::Memory {
                    addr,
                    page_crossed: false,
                }
            }
            AddressingMode::AbsoluteX => {
                let base = self.fetch_u16();
                let addr = base.wrapping_add(self.x as u16);
                Operand::Memory {
                    addr,
                    page_crossed: (base & 0xFF00) != (addr & 0xFF00),
                }
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_u16();
                let addr = base.wrapping_add(self.y as u16);
                Operand::Memory {
                    addr,
                    page_crossed: (base & 0xFF00) != (addr & 0xFF00),
                }
            }
            AddressingMode::IndirectX => {
                let ptr = self.fetch_u8().wrapping_add(self.x);
                let addr_low = self.memory.read(ptr as u16) as u16;
                let addr_high = self.memory.read(ptr.wrapping_add(1) as u16) as u16;
                Operand::Memory {
                    addr: (addr_high << 8) | addr_low,
                    page_crossed: false,
                }
            }
            AddressingMode::IndirectY => {
                let ptr = self.fetch_u8();
                let base_low = self.memory.read(ptr as u16) as u16;
                let base_high = self.memory.read(ptr.wrapping_add(1) as u16) as u16;
                let base = (base_high << 8) | base_low;
                let addr = base.wrapping_add(self.y as u16);
                Operand::Memory {
                    addr,
                    page_crossed: (base & 0xFF00) != (addr & 0xFF00),
                }
            }
            AddressingMode::Relative => {
                let offset = self.fetch_u8() as i8;
                let addr = self.pc.wrapping_add_signed(offset as i16);
                Operand::Memory {
                    addr,
                    page_crossed: (self.pc & 0xFF00) != (addr & 0xFF00),
                }
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_u16();
                let target_low = self.memory.read(ptr) as u16;
                // NMOS bug: the high byte is fetched from the start of the
                // same page when the pointer sits at 0xNNFF.
                let high_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let target_high = self.memory.read(high_addr) as u16;
                Operand::Memory {
                    addr: (target_high << 8) | target_low,
                    page_crossed: false,
                }
            }
        }
    }

    /// Reads the value a resolved operand refers to.
    pub(crate) fn read_operand(&mut self, operand: Operand) -> u8 {
        match operand {
            Operand::Accumulator => self.a,
            Operand::Memory { addr, .. } => self.memory.read(addr),
            Operand::Implied => 0,
        }
    }

    /// Writes a value back to a resolved operand (accumulator or memory).
    pub(crate) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::Accumulator => self.a = value,
            Operand::Memory { addr, .. } => self.memory.write(addr, value),
            Operand::Implied => {}
        }
    }

    /// Charges the +1 cycle for an indexed read that crossed a page, when
    /// the opcode is subject to the penalty.
    pub(crate) fn add_page_cross_penalty(&mut self, opcode: u8, operand: Operand) {
        if OPCODE_TABLE[opcode as usize].page_cross_penalty && operand.page_crossed() {
            self.cycles += 1;
        }
    }

    // ========== Flag Helpers ==========

    /// Sets Z iff `value == 0` and N iff bit 7 of `value` is set.
    pub(crate) fn update_zn(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = (value & 0x80) != 0;
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    ///
    /// Bit 5 reads as 1, matching what a push would produce; bit 4 reflects
    /// the live B flag, which is not meaningful between pushes.
    pub fn status(&self) -> u8 {
        let mut status: u8 = FLAG_U;

        if self.flag_n {
            status |= FLAG_N;
        }
        if self.flag_v {
            status |= FLAG_V;
        }
        if self.flag_b {
            status |= FLAG_B;
        }
        if self.flag_d {
            status |= FLAG_D;
        }
        if self.flag_i {
            status |= FLAG_I;
        }
        if self.flag_z {
            status |= FLAG_Z;
        }
        if self.flag_c {
            status |= FLAG_C;
        }

        status
    }

    /// Unpacks a status byte into the individual flags. Bit 5 is ignored.
    pub fn set_status(&mut self, value: u8) {
        self.flag_n = (value & FLAG_N) != 0;
        self.flag_v = (value & FLAG_V) != 0;
        self.flag_b = (value & FLAG_B) != 0;
        self.flag_d = (value & FLAG_D) != 0;
        self.flag_i = (value & FLAG_I) != 0;
        self.flag_z = (value & FLAG_Z) != 0;
        self.flag_c = (value & FLAG_C) != 0;
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: the full stack address is 0x0100 | SP. The stack grows
    /// downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the total number of CPU cycles executed since boot.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Whether a BRK has halted execution.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Whether an IRQ is latched and waiting to be serviced.
    pub fn irq_pending(&self) -> bool {
        self.irq_pending
    }

    /// Whether an NMI is latched and waiting to be serviced.
    pub fn nmi_pending(&self) -> bool {
        self.nmi_pending
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Break flag is set (don't-care between pushes).
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    // ========== Register Setters (for hosts and test harnesses) ==========

    /// Sets the accumulator register value.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register value.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register value.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter value.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer value.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Clears (or sets) the halt flag so a host can resume after BRK.
    pub fn set_halted(&mut self, value: bool) {
        self.halted = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }
}
