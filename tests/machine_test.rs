//! End-to-end machine scenarios: ROM programs producing character output,
//! run-loop budget and halt behavior, and the `ProgramHalted` event.

use sim6502::{Machine, MachineError, MachineEvent};

/// Machine with `program` loaded at `base` and the reset vector pointing
/// at it, freshly booted.
fn boot_with_program(program: &[u8], base: u16) -> Machine {
    let mut machine = Machine::new();
    machine.load_rom(program, base).unwrap();
    machine.poke(0xFFFC, (base & 0xFF) as u8);
    machine.poke(0xFFFD, (base >> 8) as u8);
    machine.boot();
    machine
}

/// Collects the CharOut payloads from a drained event list.
fn char_out_bytes(events: &[MachineEvent]) -> Vec<u8> {
    events
        .iter()
        .filter_map(|event| match event {
            MachineEvent::CharOut(byte) => Some(*byte),
            _ => None,
        })
        .collect()
}

// ========== Output Programs ==========

#[test]
fn test_hello_world_rom() {
    // LDX #0
    // loop: LDA data,X / BEQ done / STA $F001 / INX / BNE loop
    // data: "HELLO WORLD!", 0
    // done: BRK
    let program = [
        0xA2, 0x00, 0xBD, 0x0D, 0x90, 0xF0, 0x13, 0x8D, 0x01, 0xF0, 0xE8, 0xD0, 0xF5, 0x48,
        0x45, 0x4C, 0x4C, 0x4F, 0x20, 0x57, 0x4F, 0x52, 0x4C, 0x44, 0x21, 0x00, 0x00,
    ];
    let mut machine = boot_with_program(&program, 0x9000);

    machine.run(5000).unwrap();

    let events = machine.drain_events();
    assert_eq!(char_out_bytes(&events), b"HELLO WORLD!");
    assert!(machine.halted());

    match events.last() {
        Some(MachineEvent::ProgramHalted(steps)) => {
            assert!(*steps < 5000, "program should halt well inside the budget");
        }
        other => panic!("expected trailing ProgramHalted, got {:?}", other),
    }
}

#[test]
fn test_print_literal_four() {
    // LDA #$34 / STA $F001 / BRK
    let mut machine = boot_with_program(&[0xA9, 0x34, 0x8D, 0x01, 0xF0, 0x00], 0x8000);

    machine.run(50).unwrap();

    let events = machine.drain_events();
    assert_eq!(char_out_bytes(&events), vec![0x34]);
    assert!(machine.halted());

    // The TTY byte is also stored, so it stays visible to debug reads
    assert_eq!(machine.peek(0xF001), 0x34);
}

// ========== Run Loop ==========

#[test]
fn test_run_rejects_zero_budget() {
    let mut machine = boot_with_program(&[0xEA], 0x8000);
    assert_eq!(machine.run(0), Err(MachineError::ZeroBudget));
    assert!(machine.drain_events().is_empty());
}

#[test]
fn test_run_exhausts_budget_without_halt() {
    let mut machine = boot_with_program(&[0xEA; 16], 0x8000);

    machine.run(5).unwrap();

    assert!(!machine.halted());
    assert_eq!(machine.pc(), 0x8005);
    assert_eq!(
        machine.drain_events(),
        vec![MachineEvent::ProgramHalted(5)]
    );
}

#[test]
fn test_run_stops_on_brk() {
    // NOP / NOP / BRK / NOP...
    let mut machine = boot_with_program(&[0xEA, 0xEA, 0x00, 0xEA, 0xEA], 0x8000);

    machine.run(100).unwrap();

    assert!(machine.halted());
    assert_eq!(
        machine.drain_events(),
        vec![MachineEvent::ProgramHalted(3)]
    );
}

#[test]
fn test_run_resumes_after_halt_cleared() {
    let mut machine = boot_with_program(&[0x00], 0x8000);
    machine.run(10).unwrap();
    assert!(machine.halted());

    // While halted, run executes nothing
    machine.run(10).unwrap();
    assert_eq!(
        machine.drain_events(),
        vec![
            MachineEvent::ProgramHalted(1),
            MachineEvent::ProgramHalted(0)
        ]
    );

    // Clearing the flag makes the loop execute again (the BRK vector holds
    // zeroed RAM, i.e. another BRK)
    machine.set_halted(false);
    machine.run(10).unwrap();
    assert_eq!(
        machine.drain_events(),
        vec![MachineEvent::ProgramHalted(1)]
    );
}

#[test]
fn test_run_propagates_step_error_without_halt_event() {
    // 0x02 is undocumented
    let mut machine = boot_with_program(&[0x02], 0x8000);

    assert_eq!(
        machine.run(10),
        Err(MachineError::OpcodeNotImplemented(0x02))
    );
    assert!(machine.drain_events().is_empty());
    assert_eq!(machine.pc(), 0x8001, "PC sits just past the opcode");
}

#[test]
fn test_char_out_events_in_program_order() {
    // LDA #'A' / STA $F001 / LDA #'B' / STA $F001 / BRK
    let program = [0xA9, 0x41, 0x8D, 0x01, 0xF0, 0xA9, 0x42, 0x8D, 0x01, 0xF0, 0x00];
    let mut machine = boot_with_program(&program, 0x8000);

    machine.run(20).unwrap();

    assert_eq!(char_out_bytes(&machine.drain_events()), b"AB");
}
