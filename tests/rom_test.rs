//! ROM loading preconditions: one-shot semantics and bounds checking.

use sim6502::{Machine, MachineError};

#[test]
fn test_load_rom_places_bytes() {
    let mut machine = Machine::new();
    machine.load_rom(&[0xDE, 0xAD, 0xBE, 0xEF], 0x4000).unwrap();

    assert_eq!(machine.peek(0x4000), 0xDE);
    assert_eq!(machine.peek(0x4001), 0xAD);
    assert_eq!(machine.peek(0x4002), 0xBE);
    assert_eq!(machine.peek(0x4003), 0xEF);

    // Surrounding memory untouched
    assert_eq!(machine.peek(0x3FFF), 0x00);
    assert_eq!(machine.peek(0x4004), 0x00);
}

#[test]
fn test_load_rom_twice_rejected() {
    let mut machine = Machine::new();
    machine.load_rom(&[0xEA], 0x8000).unwrap();

    assert_eq!(
        machine.load_rom(&[0xEA], 0x9000),
        Err(MachineError::RomAlreadyLoaded)
    );

    // The original image is untouched
    assert_eq!(machine.peek(0x8000), 0xEA);
    assert_eq!(machine.peek(0x9000), 0x00);
}

#[test]
fn test_load_rom_rejects_empty_image() {
    let mut machine = Machine::new();
    assert_eq!(machine.load_rom(&[], 0x8000), Err(MachineError::RomTooBig));
}

#[test]
fn test_load_rom_rejects_overrun() {
    let mut machine = Machine::new();
    assert_eq!(
        machine.load_rom(&[0x01, 0x02], 0xFFFF),
        Err(MachineError::RomTooBig)
    );

    // A failed load does not consume the one-shot
    machine.load_rom(&[0x01], 0xFFFF).unwrap();
    assert_eq!(machine.peek(0xFFFF), 0x01);
}

#[test]
fn test_load_rom_to_end_of_address_space() {
    let mut machine = Machine::new();
    machine.load_rom(&[0xAA, 0xBB], 0xFFFE).unwrap();

    assert_eq!(machine.peek(0xFFFE), 0xAA);
    assert_eq!(machine.peek(0xFFFF), 0xBB);
}

#[test]
fn test_rom_can_carry_its_own_vectors() {
    // A full-page image ending at 0xFFFF supplies the reset vector itself
    let mut image = vec![0xEA; 0x100];
    image[0xFC] = 0x00; // reset vector low
    image[0xFD] = 0xFF; // reset vector high -> 0xFF00 (start of this page)

    let mut machine = Machine::new();
    machine.load_rom(&image, 0xFF00).unwrap();
    machine.boot();

    assert_eq!(machine.pc(), 0xFF00);
}
