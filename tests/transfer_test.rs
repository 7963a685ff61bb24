//! Register transfer tests, including the TXS exception to the Z/N rule.

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
fn test_tax_copies_and_sets_flags() {
    let mut machine = boot_with_program(&[0xAA]); // TAX
    machine.set_a(0x80);

    machine.step().unwrap();

    assert_eq!(machine.x(), 0x80);
    assert!(machine.flag_n());
    assert!(!machine.flag_z());
}

#[test]
fn test_tay_zero_sets_z() {
    let mut machine = boot_with_program(&[0xA8]); // TAY
    machine.set_a(0x00);
    machine.set_y(0x55);

    machine.step().unwrap();

    assert_eq!(machine.y(), 0x00);
    assert!(machine.flag_z());
}

#[test]
fn test_txa_and_tya() {
    let mut machine = boot_with_program(&[0x8A, 0x98]); // TXA / TYA
    machine.set_x(0x21);
    machine.set_y(0x43);

    machine.step().unwrap();
    assert_eq!(machine.a(), 0x21);

    machine.step().unwrap();
    assert_eq!(machine.a(), 0x43);
}

#[test]
fn test_tsx_reads_stack_pointer() {
    let mut machine = boot_with_program(&[0xBA]); // TSX
    machine.set_sp(0xF0);

    machine.step().unwrap();

    assert_eq!(machine.x(), 0xF0);
    assert!(machine.flag_n());
}

#[test]
fn test_txs_does_not_update_flags() {
    let mut machine = boot_with_program(&[0x9A]); // TXS
    machine.set_x(0x00);
    machine.set_sp(0xFD);
    machine.set_flag_z(false);
    machine.set_flag_n(true);

    machine.step().unwrap();

    assert_eq!(machine.sp(), 0x00);
    assert!(!machine.flag_z(), "TXS must not set Z even for zero");
    assert!(machine.flag_n(), "TXS must not clear N");
}

#[test]
fn test_txs_tsx_round_trip() {
    let mut machine = boot_with_program(&[0x9A, 0xBA]); // TXS / TSX
    machine.set_x(0x37);

    machine.step().unwrap();
    machine.set_x(0x00);
    machine.step().unwrap();

    assert_eq!(machine.x(), 0x37);
    assert_eq!(machine.sp(), 0x37);
}
