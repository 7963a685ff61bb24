//! Flag-exact tests for the ALU instructions: ADC, SBC, logic ops, BIT
//! and the compare family.

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

// ========== ADC ==========

#[test]
fn test_adc_simple_addition() {
    let mut machine = boot_with_program(&[0x69, 0x10]); // ADC #$10
    machine.set_a(0x20);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x30);
    assert!(!machine.flag_c());
    assert!(!machine.flag_z());
    assert!(!machine.flag_n());
    assert!(!machine.flag_v());
}

#[test]
fn test_adc_uses_carry_in() {
    let mut machine = boot_with_program(&[0x69, 0x10]);
    machine.set_a(0x20);
    machine.set_flag_c(true);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x31);
    assert!(!machine.flag_c());
}

#[test]
fn test_adc_carry_out_and_zero() {
    let mut machine = boot_with_program(&[0x69, 0x01]);
    machine.set_a(0xFF);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x00);
    assert!(machine.flag_c());
    assert!(machine.flag_z());
    assert!(!machine.flag_v(), "0xFF + 1 does not overflow signed");
}

#[test]
fn test_adc_signed_overflow_positive() {
    // 0x50 + 0x50 = 0xA0: two positives yielding a negative
    let mut machine = boot_with_program(&[0x69, 0x50]);
    machine.set_a(0x50);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0xA0);
    assert!(machine.flag_v());
    assert!(machine.flag_n());
    assert!(!machine.flag_c());
}

#[test]
fn test_adc_signed_overflow_negative() {
    // 0x90 + 0x90 = 0x120: two negatives yielding a positive (with carry)
    let mut machine = boot_with_program(&[0x69, 0x90]);
    machine.set_a(0x90);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x20);
    assert!(machine.flag_v());
    assert!(machine.flag_c());
    assert!(!machine.flag_n());
}

#[test]
fn test_adc_ignores_decimal_flag() {
    // 0x09 + 0x01 stays binary 0x0A even with D set
    let mut machine = boot_with_program(&[0x69, 0x01]);
    machine.set_a(0x09);
    machine.set_flag_d(true);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x0A);
    assert!(machine.flag_d(), "D flag itself is preserved");
}

// ========== SBC ==========

#[test]
fn test_sbc_with_no_borrow() {
    // SBC #$10 with C=1: 0x50 - 0x10 = 0x40, C stays set (no borrow)
    let mut machine = boot_with_program(&[0xE9, 0x10]);
    machine.set_a(0x50);
    machine.set_flag_c(true);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x40);
    assert!(machine.flag_c());
    assert!(!machine.flag_n());
}

#[test]
fn test_sbc_with_borrow_out() {
    // 0x10 - 0x20 underflows: result wraps, C cleared (borrow taken)
    let mut machine = boot_with_program(&[0xE9, 0x20]);
    machine.set_a(0x10);
    machine.set_flag_c(true);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0xF0);
    assert!(!machine.flag_c());
    assert!(machine.flag_n());
}

#[test]
fn test_sbc_borrow_in_subtracts_extra_one() {
    // With C=0 the subtraction borrows one more: 0x50 - 0x10 - 1 = 0x3F
    let mut machine = boot_with_program(&[0xE9, 0x10]);
    machine.set_a(0x50);
    machine.set_flag_c(false);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x3F);
    assert!(machine.flag_c());
}

#[test]
fn test_sbc_zero_result_sets_carry_and_zero() {
    let mut machine = boot_with_program(&[0xE9, 0x42]);
    machine.set_a(0x42);
    machine.set_flag_c(true);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x00);
    assert!(machine.flag_c());
    assert!(machine.flag_z());
}

// ========== Logic ==========

#[test]
fn test_and_masks_and_sets_flags() {
    let mut machine = boot_with_program(&[0x29, 0x0F]); // AND #$0F
    machine.set_a(0xF5);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x05);
    assert!(!machine.flag_z());
    assert!(!machine.flag_n());
}

#[test]
fn test_and_zero_result() {
    let mut machine = boot_with_program(&[0x29, 0x0F]);
    machine.set_a(0xF0);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x00);
    assert!(machine.flag_z());
}

#[test]
fn test_ora_sets_negative() {
    let mut machine = boot_with_program(&[0x09, 0x80]); // ORA #$80
    machine.set_a(0x01);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x81);
    assert!(machine.flag_n());
    assert!(!machine.flag_z());
}

#[test]
fn test_eor_toggles_bits() {
    let mut machine = boot_with_program(&[0x49, 0xFF]); // EOR #$FF
    machine.set_a(0x55);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0xAA);
    assert!(machine.flag_n());
}

// ========== BIT ==========

#[test]
fn test_bit_copies_high_bits_and_tests_mask() {
    let mut machine = boot_with_program(&[0x24, 0x10]); // BIT $10
    machine.poke(0x0010, 0xC0); // bits 7 and 6 set
    machine.set_a(0x0F);

    machine.step().unwrap();

    assert!(machine.flag_z(), "A & M == 0");
    assert!(machine.flag_n(), "N copies bit 7 of M");
    assert!(machine.flag_v(), "V copies bit 6 of M");
    assert_eq!(machine.a(), 0x0F, "A unchanged");
    assert_eq!(machine.peek(0x0010), 0xC0, "M unchanged");
}

#[test]
fn test_bit_nonzero_mask_clears_z() {
    let mut machine = boot_with_program(&[0x24, 0x10]);
    machine.poke(0x0010, 0x01);
    machine.set_a(0x01);

    machine.step().unwrap();

    assert!(!machine.flag_z());
    assert!(!machine.flag_n());
    assert!(!machine.flag_v());
}

// ========== Compares ==========

#[test]
fn test_cmp_equal() {
    let mut machine = boot_with_program(&[0xC9, 0x42]); // CMP #$42
    machine.set_a(0x42);

    machine.step().unwrap();

    assert!(machine.flag_c(), "C set when A >= M");
    assert!(machine.flag_z());
    assert!(!machine.flag_n());
    assert_eq!(machine.a(), 0x42, "register unchanged");
}

#[test]
fn test_cmp_greater() {
    let mut machine = boot_with_program(&[0xC9, 0x10]);
    machine.set_a(0x42);

    machine.step().unwrap();

    assert!(machine.flag_c());
    assert!(!machine.flag_z());
}

#[test]
fn test_cmp_less_sets_borrow_and_negative() {
    let mut machine = boot_with_program(&[0xC9, 0x50]);
    machine.set_a(0x10);

    machine.step().unwrap();

    assert!(!machine.flag_c(), "C clear when A < M");
    assert!(!machine.flag_z());
    // 0x10 - 0x50 wraps to 0xC0
    assert!(machine.flag_n());
}

#[test]
fn test_cpx_and_cpy() {
    let mut machine = boot_with_program(&[0xE0, 0x05, 0xC0, 0x09]); // CPX #5 / CPY #9
    machine.set_x(0x05);
    machine.set_y(0x08);

    machine.step().unwrap();
    assert!(machine.flag_c());
    assert!(machine.flag_z());

    machine.step().unwrap();
    assert!(!machine.flag_c());
    assert!(!machine.flag_z());
    assert_eq!((machine.x(), machine.y()), (0x05, 0x08));
}
