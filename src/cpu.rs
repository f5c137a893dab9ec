use crate::instruction::Condition as Nzp;
use crate::instruction::Instruction;
use crate::instruction::Register::*;
use crate::state::{Condition, State};
use crate::trap_vector::TrapVector;
use crate::SignExtend;
use std::io::{self, Read, Write};

pub fn execute(state: &mut State, instruction: Instruction) {
    match instruction {
        // BR - Conditional Branch
        //
        // The condition codes specified by bits [11:9] are tested. If any of the condition codes
        // tested is set, the program branches to the location specified by adding the
        // sign-extended PCoffset9 field to the incremented PC. BRnzp (all three bits clear) never
        // branches; the encoding with all three bits set always branches.
        Instruction::Br(Nzp { n, z, p }, pc_offset) => {
            let taken = (n && state.condition == Condition::Neg)
                || (z && state.condition == Condition::Zero)
                || (p && state.condition == Condition::Pos);

            if taken {
                state.pc = state.pc.wrapping_add(pc_offset.sign_extend(9));
            }
        }

        // ADD - Addition
        //
        // DR <- SR1 + SR2, or DR <- SR1 + sext(imm5). Flags set from the result.
        Instruction::Add(dr, sr1, sr2) => {
            let value = state
                .registers
                .read(sr1)
                .wrapping_add(state.registers.read(sr2));

            state.registers.write(dr, value);
            state.update_flags(dr);
        }
        Instruction::AddImm(dr, sr1, immediate_value) => {
            let value = state.registers.read(sr1).wrapping_add(immediate_value);

            state.registers.write(dr, value);
            state.update_flags(dr);
        }

        // LD - Load
        //
        // DR <- mem[incremented PC + sext(PCoffset9)]. Flags set from the loaded value.
        Instruction::Ld(dr, pc_offset) => {
            let address = state.pc.wrapping_add(pc_offset.sign_extend(9));
            let value = state.memory.read(address);

            state.registers.write(dr, value);
            state.update_flags(dr);
        }

        // ST - Store
        //
        // mem[incremented PC + sext(PCoffset9)] <- SR.
        Instruction::St(sr, pc_offset) => {
            let address = state.pc.wrapping_add(pc_offset.sign_extend(9));

            state.memory.write(address, state.registers.read(sr));
        }

        // JSR / JSRR - Jump to Subroutine
        //
        // R7 <- incremented PC, then PC <- BaseR (JSRR) or incremented PC + sext(PCoffset11) (JSR).
        Instruction::Jsr(pc_offset) => {
            let return_address = state.pc;
            state.pc = state.pc.wrapping_add(pc_offset.sign_extend(11));
            state.registers.write(R7, return_address);
        }
        Instruction::Jsrr(base_r) => {
            let return_address = state.pc;
            state.pc = state.registers.read(base_r);
            state.registers.write(R7, return_address);
        }

        // AND - Bit-wise Logical AND
        //
        // DR <- SR1 AND SR2, or DR <- SR1 AND sext(imm5). Flags set from the result.
        Instruction::And(dr, sr1, sr2) => {
            let value = state.registers.read(sr1) & state.registers.read(sr2);

            state.registers.write(dr, value);
            state.update_flags(dr);
        }
        Instruction::AndImm(dr, sr1, immediate_value) => {
            let value = state.registers.read(sr1) & immediate_value;

            state.registers.write(dr, value);
            state.update_flags(dr);
        }

        // LDR - Load Base+offset
        //
        // DR <- mem[BaseR + sext(offset6)]. Flags set from the loaded value.
        Instruction::Ldr(dr, base_r, offset) => {
            let address = state.registers.read(base_r).wrapping_add(offset.sign_extend(6));
            let value = state.memory.read(address);

            state.registers.write(dr, value);
            state.update_flags(dr);
        }

        // STR - Store Base+offset
        //
        // mem[BaseR + sext(offset6)] <- SR.
        Instruction::Str(sr, base_r, offset) => {
            let address = state
                .registers
                .read(base_r)
                .wrapping_add(offset.sign_extend(6));
            let value = state.registers.read(sr);

            state.memory.write(address, value);
        }

        // RTI - Return from Interrupt
        //
        // Not supported outside privileged mode; there is no supervisor stack to return through.
        Instruction::Rti => {
            panic!("RTI is not supported: no privileged mode in this interpreter");
        }

        // NOT - Bit-Wise Complement
        //
        // DR <- NOT(SR). Flags set from the result.
        Instruction::Not(dr, sr) => {
            state.registers.write(dr, !state.registers.read(sr));
            state.update_flags(dr);
        }

        // LDI - Load Indirect
        //
        // DR <- mem[mem[incremented PC + sext(PCoffset9)]]. Flags set from the loaded value.
        Instruction::Ldi(dr, pc_offset) => {
            let address = state.memory.read(state.pc.wrapping_add(pc_offset.sign_extend(9)));
            let value = state.memory.read(address);

            state.registers.write(dr, value);
            state.update_flags(dr);
        }

        // STI - Store Indirect
        //
        // mem[mem[incremented PC + sext(PCoffset9)]] <- SR.
        Instruction::Sti(sr, pc_offset) => {
            let address = state.pc.wrapping_add(pc_offset.sign_extend(9));
            let address = state.memory.read(address);

            state.memory.write(address, state.registers.read(sr));
        }

        // JMP / RET - Jump
        //
        // PC <- BaseR. RET is the special case BaseR = R7.
        Instruction::Jmp(base_r) => {
            state.pc = state.registers.read(base_r);
        }

        // XOR - Bit-wise Exclusive OR (non-standard extension)
        //
        // Decoded the same way as AND: DR <- SR1 XOR SR2, or DR <- SR1 XOR sext(imm5).
        Instruction::Xor(dr, sr1, sr2) => {
            let value = state.registers.read(sr1) ^ state.registers.read(sr2);

            state.registers.write(dr, value);
            state.update_flags(dr);
        }
        Instruction::XorImm(dr, sr1, immediate_value) => {
            let value = state.registers.read(sr1) ^ immediate_value;

            state.registers.write(dr, value);
            state.update_flags(dr);
        }

        // LEA - Load Effective Address
        //
        // DR <- incremented PC + sext(PCoffset9). Flags set from the computed address.
        Instruction::Lea(dr, pc_offset) => {
            let address = state.pc.wrapping_add(pc_offset.sign_extend(9));

            state.registers.write(dr, address);
            state.update_flags(dr);
        }

        // TRAP - System Call
        //
        // R7 <- incremented PC (the PC has already been advanced before `execute` is called), then
        // dispatch to the host service routine named by the low byte. An undefined vector is a
        // no-op.
        Instruction::Trap(trap_vector) => {
            state.registers.write(R7, state.pc);

            match trap_vector {
                // Read a single character from the keyboard. Not echoed. Copied into R0, high
                // byte cleared.
                Some(TrapVector::Getc) => {
                    let mut buffer = [0; 1];
                    io::stdin().read_exact(&mut buffer).expect("unable to read from STDIN");

                    state.registers.write(R0, u16::from(buffer[0]));
                }

                // Write R0[7:0] to the console.
                Some(TrapVector::Out) => {
                    print!("{}", (state.registers.read(R0) as u8) as char);
                    io::stdout().flush().expect("unable to flush STDOUT");
                }

                // Write the NUL-terminated string starting at R0, one character per word.
                Some(TrapVector::Puts) => {
                    let mut address = state.registers.read(R0);
                    loop {
                        let word = state.memory.read(address);
                        if word == 0 {
                            break;
                        }
                        print!("{}", (word as u8) as char);
                        address = address.wrapping_add(1);
                    }
                    io::stdout().flush().expect("unable to flush STDOUT");
                }

                // Prompt, read a single character, echo it, and copy it into R0.
                Some(TrapVector::In) => {
                    print!("Enter character");
                    io::stdout().flush().expect("unable to flush STDOUT");

                    let mut buffer = [0; 1];
                    io::stdin().read_exact(&mut buffer).expect("unable to read from STDIN");

                    print!("{}", buffer[0] as char);
                    io::stdout().flush().expect("unable to flush STDOUT");

                    state.registers.write(R0, u16::from(buffer[0]));
                }

                // Write the NUL-terminated string starting at R0, two characters packed per word
                // (low byte first, then high byte if nonzero).
                Some(TrapVector::Putsp) => {
                    let mut address = state.registers.read(R0);
                    loop {
                        let word = state.memory.read(address);
                        if word == 0 {
                            break;
                        }

                        let low = (word & 0xFF) as u8;
                        print!("{}", low as char);

                        let high = (word >> 8) as u8;
                        if high != 0 {
                            print!("{}", high as char);
                        }

                        address = address.wrapping_add(1);
                    }
                    io::stdout().flush().expect("unable to flush STDOUT");
                }

                // Halt execution.
                Some(TrapVector::Halt) => {
                    println!("HALT");
                    io::stdout().flush().expect("unable to flush STDOUT");
                    state.running = false;
                }

                // Undefined trap vectors are a no-op.
                None => {}
            }
        }
    }
}
