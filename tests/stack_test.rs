//! Stack instruction tests: PHA/PLA, PHP/PLP status rules, JSR/RTS
//! return-address layout, and stack-page wrap-around.

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

// ========== PHA / PLA ==========

#[test]
fn test_pha_pushes_and_decrements_sp() {
    let mut machine = boot_with_program(&[0x48]); // PHA
    machine.set_a(0x42);

    machine.step().unwrap();

    assert_eq!(machine.sp(), 0xFC);
    assert_eq!(machine.peek(0x01FD), 0x42);
}

#[test]
fn test_pha_pla_round_trip() {
    // PHA / LDA #0 / PLA
    let mut machine = boot_with_program(&[0x48, 0xA9, 0x00, 0x68]);
    machine.set_a(0x99);

    machine.step().unwrap();
    machine.step().unwrap();
    assert_eq!(machine.a(), 0x00);

    machine.step().unwrap();
    assert_eq!(machine.a(), 0x99);
    assert_eq!(machine.sp(), 0xFD, "SP restored");
    assert!(machine.flag_n(), "PLA updates N from the pulled value");
    assert!(!machine.flag_z());
}

#[test]
fn test_pla_sets_zero_flag() {
    let mut machine = boot_with_program(&[0x68]); // PLA
    machine.set_sp(0xFC);
    machine.poke(0x01FD, 0x00);
    machine.set_flag_z(false);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x00);
    assert!(machine.flag_z());
}

// ========== PHP / PLP ==========

#[test]
fn test_php_pushes_b_and_bit5() {
    let mut machine = boot_with_program(&[0x08]); // PHP

    machine.step().unwrap();

    // Boot status is 0x24 (I set, bit 5); PHP ORs in 0x30
    assert_eq!(machine.peek(0x01FD), 0x34);
    assert_eq!(machine.sp(), 0xFC);
}

#[test]
fn test_plp_clears_b_and_restores_flags() {
    let mut machine = boot_with_program(&[0x28]); // PLP
    machine.set_sp(0xFC);
    machine.poke(0x01FD, 0xDB); // N V - B D - Z C with B set

    machine.step().unwrap();

    assert!(machine.flag_n());
    assert!(machine.flag_v());
    assert!(machine.flag_d());
    assert!(!machine.flag_i());
    assert!(machine.flag_z());
    assert!(machine.flag_c());
    assert_eq!(machine.status() & 0x10, 0x00, "B cleared in the register");
    assert_eq!(machine.sp(), 0xFD);
}

#[test]
fn test_php_plp_round_trip_preserves_flags() {
    // PHP / PLP with a busy status word
    let mut machine = boot_with_program(&[0x08, 0x28]);
    machine.set_status(0xC3); // N, V, Z, C

    machine.step().unwrap();
    machine.step().unwrap();

    assert!(machine.flag_n());
    assert!(machine.flag_v());
    assert!(machine.flag_z());
    assert!(machine.flag_c());
    assert!(!machine.flag_i());
    assert_eq!(machine.sp(), 0xFD);
}

// ========== JSR / RTS ==========

#[test]
fn test_jsr_pushes_last_operand_byte_address() {
    let mut machine = boot_with_program(&[0x20, 0x00, 0x90]); // JSR $9000

    machine.step().unwrap();

    assert_eq!(machine.pc(), 0x9000);
    assert_eq!(machine.sp(), 0xFB);
    // Pushed word is PC-1 = 0x8002, high byte first
    assert_eq!(machine.peek(0x01FD), 0x80);
    assert_eq!(machine.peek(0x01FC), 0x02);
}

#[test]
fn test_jsr_rts_round_trip() {
    let mut machine = boot_with_program(&[0x20, 0x00, 0x90, 0xA9, 0x07]); // JSR / LDA #7
    machine.poke(0x9000, 0x60); // RTS

    machine.step().unwrap();
    assert_eq!(machine.pc(), 0x9000);

    machine.step().unwrap();
    assert_eq!(machine.pc(), 0x8003, "RTS resumes after the JSR operand");
    assert_eq!(machine.sp(), 0xFD);

    machine.step().unwrap();
    assert_eq!(machine.a(), 0x07);
}

#[test]
fn test_nested_jsr_rts() {
    // JSR $9000; at $9000: JSR $9100 / RTS; at $9100: RTS
    let mut machine = boot_with_program(&[0x20, 0x00, 0x90]);
    machine.poke(0x9000, 0x20);
    machine.poke(0x9001, 0x00);
    machine.poke(0x9002, 0x91);
    machine.poke(0x9003, 0x60);
    machine.poke(0x9100, 0x60);

    machine.step().unwrap(); // JSR $9000
    machine.step().unwrap(); // JSR $9100
    assert_eq!(machine.pc(), 0x9100);
    assert_eq!(machine.sp(), 0xF9);

    machine.step().unwrap(); // inner RTS
    assert_eq!(machine.pc(), 0x9003);

    machine.step().unwrap(); // outer RTS
    assert_eq!(machine.pc(), 0x8003);
    assert_eq!(machine.sp(), 0xFD);
}

// ========== Stack Page Wrap ==========

#[test]
fn test_stack_wraps_at_page_boundary() {
    let mut machine = boot_with_program(&[0x48, 0x68]); // PHA / PLA
    machine.set_sp(0x00);
    machine.set_a(0x5A);

    machine.step().unwrap();
    assert_eq!(machine.sp(), 0xFF, "SP wrapped below 0x00");
    assert_eq!(machine.peek(0x0100), 0x5A);

    machine.set_a(0x00);
    machine.step().unwrap();
    assert_eq!(machine.a(), 0x5A);
    assert_eq!(machine.sp(), 0x00);
}
