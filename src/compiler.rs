// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Translates a normalized token stream into a flat instruction
//! vector: loop bodies are classified into `CLEAR`/`DCLEAR`/`MUL`
//! where possible, remaining brackets are linked into matching
//! `CJUMP`/`JUMP` pairs, and everything else is fused by
//! [`contract::contract`].
mod contract;
mod loops;

use crate::error::{Error, Result};
use crate::instruction::Instruction;
use log::{debug, trace};

/// Maximum nesting depth of unclassified `[...]` loops. Matches the
/// bracket stack capacity of the interpreter this design is modeled
/// on.
const MAX_STACK_DEPTH: usize = 4096;

pub struct Compiler;

impl Compiler {
    /// Compile an already-normalized token stream into an instruction
    /// vector terminated by `END`.
    pub fn compile(tokens: &[u8]) -> Result<Vec<Instruction>> {
        let mut code = Vec::new();
        let mut stack: Vec<usize> = Vec::new();
        let mut pos = 0;

        while pos < tokens.len() {
            match tokens[pos] {
                b'[' => {
                    if let Some(n) = loops::try_clear_loop(&tokens[pos..]) {
                        trace!("recognized clear loop at {pos}");
                        code.push(Instruction::clear());
                        pos += n;
                        continue;
                    }
                    if let Some((n, count)) = loops::try_dangerous_clear(&tokens[pos..]) {
                        trace!("recognized dangerous clear loop at {pos}: count={count}");
                        code.push(Instruction::dclear(count));
                        pos += n;
                        continue;
                    }
                    if let Some((n, cells)) = loops::try_multiplication_loop(&tokens[pos..]) {
                        trace!("recognized multiplication loop at {pos}: offsets={cells:?}");
                        for (offset, delta) in cells.iter().filter(|(o, _)| *o != 0) {
                            code.push(Instruction::mul(*delta, *offset));
                        }
                        code.push(Instruction::clear());
                        pos += n;
                        continue;
                    }

                    if stack.len() >= MAX_STACK_DEPTH {
                        return Err(Error::BracketStackOverflow);
                    }
                    stack.push(code.len());
                    code.push(Instruction::cjump_placeholder());
                    pos += 1;
                }
                b']' => {
                    let open = stack.pop().ok_or(Error::UnmatchedClose)?;
                    let close = code.len();
                    code.push(Instruction::jump(open as i32));
                    code[open].data = close as i32;
                    pos += 1;
                }
                _ => contract::contract(tokens, &mut pos, &mut code),
            }
        }

        if !stack.is_empty() {
            return Err(Error::UnmatchedOpen);
        }

        debug!("compiled {} tokens into {} instructions", tokens.len(), code.len() + 1);
        code.push(Instruction::end());
        Ok(code)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::Opcode;
    use crate::normalize::normalize;

    fn compile(src: &[u8]) -> Vec<Instruction> {
        Compiler::compile(&normalize(src)).unwrap()
    }

    #[test]
    fn clear_loop_compiles_to_clear() {
        let code = compile(b"[-]");
        assert_eq!(code[0].opcode, Opcode::Clear);
        assert_eq!(code[1].opcode, Opcode::End);
    }

    #[test]
    fn dangerous_clear_carries_character_count() {
        let code = compile(b"[+++]");
        assert_eq!(code[0], Instruction::dclear(3));
    }

    #[test]
    fn multiplication_loop_emits_mul_then_clear() {
        let code = compile(b"[->+<]");
        assert_eq!(code[0], Instruction::mul(1, 1));
        assert_eq!(code[1], Instruction::clear());
        assert_eq!(code[2].opcode, Opcode::End);
    }

    #[test]
    fn generic_loop_links_brackets_by_index() {
        // `+` -> ADD; `[` -> CJUMP at 1; `-` -> ADD; `]` -> JUMP at 3.
        let code = compile(b"+[->.+]");
        let cjump_idx = code.iter().position(|i| i.opcode == Opcode::CJump).unwrap();
        let jump_idx = code.iter().position(|i| i.opcode == Opcode::Jump).unwrap();
        assert_eq!(code[cjump_idx].data, jump_idx as i32);
        assert_eq!(code[jump_idx].data, cjump_idx as i32);
    }

    #[test]
    fn unmatched_close_is_an_error() {
        assert_eq!(Compiler::compile(b"]"), Err(Error::UnmatchedClose));
    }

    #[test]
    fn unmatched_open_is_an_error() {
        assert_eq!(Compiler::compile(b"["), Err(Error::UnmatchedOpen));
    }

    #[test]
    fn bracket_stack_overflow_is_detected() {
        let src = "[".repeat(MAX_STACK_DEPTH + 1);
        assert_eq!(Compiler::compile(src.as_bytes()), Err(Error::BracketStackOverflow));
    }

    #[test]
    fn trailing_arithmetic_before_end_is_contracted() {
        let code = compile(b"+++");
        assert_eq!(code[0], Instruction::add(3, 0));
        assert_eq!(code[1].opcode, Opcode::End);
    }
}
