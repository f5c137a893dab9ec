use lc3vm::{Condition, State};

/// Clears R0, adds 5, then halts. Covers immediate arithmetic plus the
/// ordinary halt path.
#[test]
fn immediate_arithmetic_then_halt() {
    let mut state = State::new();
    state.load_words(
        0x3000,
        &[
            0x5020, // AND R0, R0, #0
            0x1025, // ADD R0, R0, #5
            0xF025, // TRAP HALT
        ],
    );

    state.run_until_halt();

    assert_eq!(state.register(0), 5);
    assert_eq!(state.condition, Condition::Pos);
    assert!(!state.running);
}

/// LEA loads the address of a packed string into R0; PUTS walks it until the
/// NUL terminator, then execution falls through to HALT.
#[test]
fn lea_then_puts_walks_to_halt() {
    let mut state = State::new();
    state.load_words(
        0x3000,
        &[
            0xE002, // LEA R0, #2          -> R0 = 0x3003
            0xF022, // TRAP PUTS
            0xF025, // TRAP HALT
            0x0048, // 'H'
            0x0069, // 'i'
            0x0000, // NUL
        ],
    );

    state.run_until_halt();

    assert_eq!(state.register(0), 0x3003);
    assert_eq!(state.condition, Condition::Pos);
    assert!(!state.running);
}

/// LDI dereferences a pointer stored at a PC-relative address to reach the
/// final value, two hops away from the instruction itself.
#[test]
fn ldi_dereferences_through_a_pointer() {
    let mut state = State::new();
    state.load_words(
        0x3000,
        &[
            0xA202, // LDI R1, #2          -> addr = mem[0x3003]
            0xF025, // TRAP HALT
        ],
    );
    state.load_words(0x3003, &[0x4000]);
    state.load_words(0x4000, &[42]);

    state.run_until_halt();

    assert_eq!(state.register(1), 42);
    assert_eq!(state.condition, Condition::Pos);
}

/// A backward branch counts R1 down from 3 to 0, then falls through once the
/// condition code goes to zero.
#[test]
fn backward_branch_counts_down_to_zero() {
    let mut state = State::new();
    state.load_words(
        0x3000,
        &[
            0x1263, // ADD R1, R1, #3
            0x127F, // ADD R1, R1, #-1     <- loop
            0x03FE, // BRp -2
            0xF025, // TRAP HALT
        ],
    );

    state.run_until_halt();

    assert_eq!(state.register(1), 0);
    assert_eq!(state.condition, Condition::Zero);
    assert!(!state.running);
}

/// JSR links R7 to the return address, the subroutine does its work, and JMP
/// R7 (RET) gets back to the instruction after the call.
#[test]
fn jsr_and_ret_round_trip() {
    let mut state = State::new();
    state.load_words(
        0x3000,
        &[
            0x4801, // JSR #1              -> call 0x3002, R7 = 0x3001
            0xF025, // TRAP HALT
            0x1025, // ADD R0, R0, #5      <- subroutine
            0xC1C0, // JMP R7              (RET)
        ],
    );

    state.run_until_halt();

    assert_eq!(state.register(0), 5);
    assert!(!state.running);
}
