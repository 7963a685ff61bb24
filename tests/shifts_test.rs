//! Shift and rotate tests covering accumulator and read-modify-write
//! memory forms, with the carry in/out rules for each of the four.

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

// ========== ASL ==========

#[test]
fn test_asl_accumulator_shifts_bit7_to_carry() {
    let mut machine = boot_with_program(&[0x0A]); // ASL A
    machine.set_a(0x81);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x02);
    assert!(machine.flag_c());
    assert!(!machine.flag_n());
    assert!(!machine.flag_z());
}

#[test]
fn test_asl_zero_result() {
    let mut machine = boot_with_program(&[0x0A]);
    machine.set_a(0x80);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x00);
    assert!(machine.flag_c());
    assert!(machine.flag_z());
}

#[test]
fn test_asl_memory_read_modify_write() {
    let mut machine = boot_with_program(&[0x06, 0x10]); // ASL $10
    machine.poke(0x0010, 0x40);

    machine.step().unwrap();

    assert_eq!(machine.peek(0x0010), 0x80);
    assert!(!machine.flag_c());
    assert!(machine.flag_n());
}

// ========== LSR ==========

#[test]
fn test_lsr_shifts_bit0_to_carry() {
    let mut machine = boot_with_program(&[0x4A]); // LSR A
    machine.set_a(0x01);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x00);
    assert!(machine.flag_c());
    assert!(machine.flag_z());
    assert!(!machine.flag_n(), "LSR result can never be negative");
}

#[test]
fn test_lsr_never_sets_negative() {
    let mut machine = boot_with_program(&[0x4A]);
    machine.set_a(0xFF);
    machine.set_flag_n(true);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x7F);
    assert!(machine.flag_c());
    assert!(!machine.flag_n());
}

// ========== ROL ==========

#[test]
fn test_rol_rotates_carry_into_bit0() {
    let mut machine = boot_with_program(&[0x2A]); // ROL A
    machine.set_a(0x80);
    machine.set_flag_c(true);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x01);
    assert!(machine.flag_c(), "old bit 7 moved into carry");
}

#[test]
fn test_rol_without_carry_in() {
    let mut machine = boot_with_program(&[0x2A]);
    machine.set_a(0x40);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x80);
    assert!(!machine.flag_c());
    assert!(machine.flag_n());
}

#[test]
fn test_rol_memory() {
    let mut machine = boot_with_program(&[0x26, 0x20]); // ROL $20
    machine.poke(0x0020, 0x81);
    machine.set_flag_c(false);

    machine.step().unwrap();

    assert_eq!(machine.peek(0x0020), 0x02);
    assert!(machine.flag_c());
}

// ========== ROR ==========

#[test]
fn test_ror_rotates_carry_into_bit7() {
    let mut machine = boot_with_program(&[0x6A]); // ROR A
    machine.set_a(0x01);
    machine.set_flag_c(true);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x80);
    assert!(machine.flag_c(), "old bit 0 moved into carry");
    assert!(machine.flag_n());
}

#[test]
fn test_ror_without_carry_in() {
    let mut machine = boot_with_program(&[0x6A]);
    machine.set_a(0x02);

    machine.step().unwrap();

    assert_eq!(machine.a(), 0x01);
    assert!(!machine.flag_c());
    assert!(!machine.flag_n());
}

#[test]
fn test_ror_memory() {
    let mut machine = boot_with_program(&[0x66, 0x30]); // ROR $30
    machine.poke(0x0030, 0x03);

    machine.step().unwrap();

    assert_eq!(machine.peek(0x0030), 0x01);
    assert!(machine.flag_c());
}

// ========== Round Trips ==========

#[test]
fn test_rol_ror_round_trip_through_carry() {
    // ROL A then ROR A restores both A and the carry
    let mut machine = boot_with_program(&[0x2A, 0x6A]);
    machine.set_a(0xB5);
    machine.set_flag_c(true);

    machine.step().unwrap();
    machine.step().unwrap();

    assert_eq!(machine.a(), 0xB5);
    assert!(machine.flag_c());
}
