//! Conditional branch tests: each condition taken and not taken, plus
//! inc/dec-driven loop termination the way real ROM loops use them.

use sim6502::Machine;

/// Machine with `program` at 0x8000 and the reset vector pointing at it.
fn boot_with_program(program: &[u8]) -> Machine {
    let mut machine = Machine::new();
    machine.load_rom(program, 0x8000).unwrap();
    machine.poke(0xFFFC, 0x00);
    machine.poke(0xFFFD, 0x80);
    machine.boot();
    machine
}

#[test]
fn test_beq_taken_on_zero() {
    let mut machine = boot_with_program(&[0xF0, 0x04]); // BEQ +4
    machine.set_flag_z(true);

    machine.step().unwrap();
    assert_eq!(machine.pc(), 0x8006);
}

#[test]
fn test_beq_not_taken() {
    let mut machine = boot_with_program(&[0xF0, 0x04]);
    machine.set_flag_z(false);

    machine.step().unwrap();
    assert_eq!(machine.pc(), 0x8002);
}

#[test]
fn test_bne_taken_on_nonzero() {
    let mut machine = boot_with_program(&[0xD0, 0x02]);
    machine.set_flag_z(false);

    machine.step().unwrap();
    assert_eq!(machine.pc(), 0x8004);
}

#[test]
fn test_bcc_bcs_follow_carry() {
    let mut machine = boot_with_program(&[0x90, 0x02, 0xB0, 0x02]); // BCC +2 / BCS +2
    machine.set_flag_c(true);

    machine.step().unwrap();
    assert_eq!(machine.pc(), 0x8002, "BCC falls through with C set");

    machine.step().unwrap();
    assert_eq!(machine.pc(), 0x8006, "BCS taken with C set");
}

#[test]
fn test_bmi_bpl_follow_negative() {
    let mut machine = boot_with_program(&[0x30, 0x02, 0x10, 0x02]); // BMI +2 / BPL +2
    machine.set_flag_n(false);

    machine.step().unwrap();
    assert_eq!(machine.pc(), 0x8002, "BMI falls through with N clear");

    machine.step().unwrap();
    assert_eq!(machine.pc(), 0x8006, "BPL taken with N clear");
}

#[test]
fn test_bvc_bvs_follow_overflow() {
    let mut machine = boot_with_program(&[0x50, 0x02, 0x70, 0x02]); // BVC +2 / BVS +2
    machine.set_flag_v(true);

    machine.step().unwrap();
    assert_eq!(machine.pc(), 0x8002, "BVC falls through with V set");

    machine.step().unwrap();
    assert_eq!(machine.pc(), 0x8006, "BVS taken with V set");
}

#[test]
fn test_backward_branch_offset() {
    // Place BNE at 0x8004 branching back to 0x8000
    let mut machine = boot_with_program(&[0xEA, 0xEA, 0xEA, 0xEA, 0xD0, 0xFA]);
    machine.set_pc(0x8004);
    machine.set_flag_z(false);

    machine.step().unwrap();
    assert_eq!(machine.pc(), 0x8000);
}

#[test]
fn test_dex_bne_countdown_loop() {
    // LDX #3 / loop: DEX / BNE loop / BRK
    let mut machine = boot_with_program(&[0xA2, 0x03, 0xCA, 0xD0, 0xFD, 0x00]);

    machine.run(100).unwrap();

    assert!(machine.halted());
    assert_eq!(machine.x(), 0x00);
    assert!(machine.flag_z(), "loop exits when DEX reaches zero");
}

#[test]
fn test_iny_wraps_and_sets_zero() {
    // LDY #$FF / INY
    let mut machine = boot_with_program(&[0xA0, 0xFF, 0xC8]);

    machine.step().unwrap();
    machine.step().unwrap();

    assert_eq!(machine.y(), 0x00);
    assert!(machine.flag_z());
    assert!(!machine.flag_n());
}

#[test]
fn test_inc_dec_memory() {
    // INC $10 / DEC $10 / DEC $10
    let mut machine = boot_with_program(&[0xE6, 0x10, 0xC6, 0x10, 0xC6, 0x10]);
    machine.poke(0x0010, 0x01);

    machine.step().unwrap();
    assert_eq!(machine.peek(0x0010), 0x02);

    machine.step().unwrap();
    assert_eq!(machine.peek(0x0010), 0x01);

    machine.step().unwrap();
    assert_eq!(machine.peek(0x0010), 0x00);
    assert!(machine.flag_z());
}

#[test]
fn test_dec_underflow_sets_negative() {
    let mut machine = boot_with_program(&[0xC6, 0x10]); // DEC $10
    machine.poke(0x0010, 0x00);

    machine.step().unwrap();

    assert_eq!(machine.peek(0x0010), 0xFF);
    assert!(machine.flag_n());
    assert!(!machine.flag_z());
}
