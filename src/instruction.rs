use crate::trap_vector::TrapVector;
use crate::SignExtend;

/// These instruction types don't map directly to the 4-bit opcodes.
/// Some have been split into multiple enum variants for better ergonomics
/// (e.g. `ADD`/`ADDIMM` instead of one variant carrying a mode flag).
#[derive(Debug)]
pub enum Instruction {
    Br(Condition, u16),
    Add(Register, Register, Register),
    AddImm(Register, Register, u16),
    Ld(Register, u16),
    St(Register, u16),
    Jsr(u16),
    Jsrr(Register),
    And(Register, Register, Register),
    AndImm(Register, Register, u16),
    Ldr(Register, Register, u16),
    Str(Register, Register, u16),
    Rti,
    Not(Register, Register),
    Ldi(Register, u16),
    Sti(Register, u16),
    Jmp(Register),
    Xor(Register, Register, Register),
    XorImm(Register, Register, u16),
    Lea(Register, u16),
    Trap(Option<TrapVector>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Register {
    R0 = 0,
    R1 = 1,
    R2 = 2,
    R3 = 3,
    R4 = 4,
    R5 = 5,
    R6 = 6,
    R7 = 7,
}

impl Register {
    fn from(n: u16) -> Register {
        match n {
            0 => Register::R0,
            1 => Register::R1,
            2 => Register::R2,
            3 => Register::R3,
            4 => Register::R4,
            5 => Register::R5,
            6 => Register::R6,
            7 => Register::R7,
            _ => unreachable!("register index is always masked to 3 bits"),
        }
    }
}

#[derive(Debug)]
pub struct Condition {
    pub n: bool,
    pub z: bool,
    pub p: bool,
}

impl Instruction {
    pub fn decode(instruction: u16) -> Self {
        let opcode = instruction >> 12;

        match opcode {
            0x0 => {
                let n = ((instruction >> 11) & 0x1) == 1;
                let z = ((instruction >> 10) & 0x1) == 1;
                let p = ((instruction >> 9) & 0x1) == 1;
                let pc_offset = instruction & 0x1ff;

                Instruction::Br(Condition { n, z, p }, pc_offset)
            }

            0x1 => {
                let r0 = Register::from((instruction >> 9) & 0x7);
                let r1 = Register::from((instruction >> 6) & 0x7);
                let immediate_flag = ((instruction >> 5) & 0x1) == 0x1;

                if immediate_flag {
                    let immediate_value = (instruction & 0x1f).sign_extend(5);
                    Instruction::AddImm(r0, r1, immediate_value)
                } else {
                    let r2 = Register::from(instruction & 0x7);
                    Instruction::Add(r0, r1, r2)
                }
            }

            0x2 => {
                let r0 = Register::from((instruction >> 9) & 0x7);
                let pc_offset = instruction & 0x1ff;

                Instruction::Ld(r0, pc_offset)
            }

            0x3 => {
                let r0 = Register::from((instruction >> 9) & 0x7);
                let pc_offset = instruction & 0x1ff;

                Instruction::St(r0, pc_offset)
            }

            0x4 => {
                let use_pc_offset = ((instruction >> 11) & 1) == 1;

                if use_pc_offset {
                    let pc_offset = instruction & 0x7ff;
                    Instruction::Jsr(pc_offset)
                } else {
                    let r0 = Register::from((instruction >> 6) & 0x7);
                    Instruction::Jsrr(r0)
                }
            }

            0x5 => {
                let r0 = Register::from((instruction >> 9) & 0x7);
                let r1 = Register::from((instruction >> 6) & 0x7);
                let immediate_flag = ((instruction >> 5) & 1) == 1;

                if immediate_flag {
                    let immediate_value = (instruction & 0x1f).sign_extend(5);
                    Instruction::AndImm(r0, r1, immediate_value)
                } else {
                    let r2 = Register::from(instruction & 0x7);
                    Instruction::And(r0, r1, r2)
                }
            }

            0x6 => {
                let r0 = Register::from((instruction >> 9) & 0x7);
                let r1 = Register::from((instruction >> 6) & 0x7);
                let offset = instruction & 0x3f;

                Instruction::Ldr(r0, r1, offset)
            }

            0x7 => {
                let sr = Register::from((instruction >> 9) & 0x7);
                let base_r = Register::from((instruction >> 6) & 0x7);
                let offset = instruction & 0x3f;

                Instruction::Str(sr, base_r, offset)
            }

            0x8 => Instruction::Rti,

            0x9 => {
                let r0 = Register::from((instruction >> 9) & 0x7);
                let r1 = Register::from((instruction >> 6) & 0x7);

                Instruction::Not(r0, r1)
            }

            0xa => {
                let dr = Register::from((instruction >> 9) & 0x7);
                let pc_offset = instruction & 0x1ff;

                Instruction::Ldi(dr, pc_offset)
            }

            0xb => {
                let r0 = Register::from((instruction >> 9) & 0x7);
                let pc_offset = instruction & 0x1ff;

                Instruction::Sti(r0, pc_offset)
            }

            0xc => {
                let r0 = Register::from((instruction >> 6) & 0x7);

                Instruction::Jmp(r0)
            }

            0xd => {
                let r0 = Register::from((instruction >> 9) & 0x7);
                let r1 = Register::from((instruction >> 6) & 0x7);
                let immediate_flag = ((instruction >> 5) & 1) == 1;

                if immediate_flag {
                    let immediate_value = (instruction & 0x1f).sign_extend(5);
                    Instruction::XorImm(r0, r1, immediate_value)
                } else {
                    let r2 = Register::from(instruction & 0x7);
                    Instruction::Xor(r0, r1, r2)
                }
            }

            0xe => {
                let r0 = Register::from((instruction >> 9) & 0x7);
                let pc_offset = instruction & 0x1ff;

                Instruction::Lea(r0, pc_offset)
            }

            0xf => Instruction::Trap(TrapVector::decode(instruction)),

            _ => unreachable!("opcode is always masked to 4 bits"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_add_register_mode() {
        // ADD R2, R3, R4
        let instr = 0b0001_010_011_0_00_100;
        match Instruction::decode(instr) {
            Instruction::Add(Register::R2, Register::R3, Register::R4) => {}
            other => panic!("unexpected decode: {:?}", other),
        }
    }

    #[test]
    fn decodes_add_immediate_mode() {
        // ADD R2, R3, #-1
        let instr = 0b0001_010_011_1_11111;
        match Instruction::decode(instr) {
            Instruction::AddImm(Register::R2, Register::R3, 0xFFFF) => {}
            other => panic!("unexpected decode: {:?}", other),
        }
    }

    #[test]
    fn decodes_rti_as_rti_not_unused() {
        match Instruction::decode(0x8000) {
            Instruction::Rti => {}
            other => panic!("unexpected decode: {:?}", other),
        }
    }

    #[test]
    fn decodes_opcode_0xd_as_xor() {
        // XOR R1, R2, R3
        let instr = 0b1101_001_010_0_00_011;
        match Instruction::decode(instr) {
            Instruction::Xor(Register::R1, Register::R2, Register::R3) => {}
            other => panic!("unexpected decode: {:?}", other),
        }
    }

    #[test]
    fn decodes_xor_immediate_mode() {
        let instr = 0b1101_001_010_1_00011;
        match Instruction::decode(instr) {
            Instruction::XorImm(Register::R1, Register::R2, 3) => {}
            other => panic!("unexpected decode: {:?}", other),
        }
    }

    #[test]
    fn decodes_jsr_vs_jsrr() {
        let jsr = 0b0100_1_00000000011;
        match Instruction::decode(jsr) {
            Instruction::Jsr(3) => {}
            other => panic!("unexpected decode: {:?}", other),
        }

        let jsrr = 0b0100_0_00_011_000000;
        match Instruction::decode(jsrr) {
            Instruction::Jsrr(Register::R3) => {}
            other => panic!("unexpected decode: {:?}", other),
        }
    }
}
