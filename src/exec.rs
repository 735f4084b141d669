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
//! A direct threaded-switch executor over the flat instruction vector
//! produced by [`crate::compiler::Compiler`].
use crate::error::{Error, Result};
use crate::instruction::{Instruction, Opcode};
use crate::tape::Tape;
use log::{trace, warn};
use std::io::{self, Read, Write};

/// Run a compiled program to completion, reading from `input` and
/// writing to `output`.
pub fn execute<R: Read, W: Write>(code: &[Instruction], input: &mut R, output: &mut W) -> Result<()> {
    let mut tape = Tape::new();
    let mut ip: usize = 0;

    loop {
        let instr = &code[ip];
        trace!("ip={ip} {instr}");

        match instr.opcode {
            Opcode::Add => tape.add(instr.offset, instr.data),
            Opcode::Sub => tape.add(instr.offset, -instr.data),
            Opcode::AddPtr => tape.move_ptr(instr.data),
            Opcode::SubPtr => tape.move_ptr(-instr.data),
            Opcode::PutCh => {
                let byte = tape.get(instr.offset);
                for _ in 0..instr.data {
                    output.write_all(&[byte]).map_err(io_error)?;
                }
            }
            Opcode::GetCh => {
                for _ in 0..instr.data {
                    let mut byte = [0u8; 1];
                    let value = match input.read(&mut byte).map_err(io_error)? {
                        0 => 0,
                        _ => byte[0],
                    };
                    tape.set(instr.offset, value);
                }
            }
            Opcode::CJump => {
                if tape.current() == 0 {
                    ip = instr.data as usize;
                }
            }
            Opcode::Jump => {
                // `ip` is about to be incremented below; landing one
                // short re-tests the matching CJUMP's condition.
                ip = (instr.data as usize).wrapping_sub(1);
            }
            Opcode::Clear => tape.clear(),
            Opcode::DClear => {
                let cell = tape.current();
                if instr.data % 3 == 0 || (instr.data % 2 == 0 && cell % 2 == 0) {
                    tape.clear();
                } else {
                    warn!("DCLEAR trap: data={} cell={cell}", instr.data);
                    return Err(Error::NonTerminatingLoop);
                }
            }
            Opcode::Mul => {
                let factor = tape.current();
                tape.add(instr.offset, instr.data.wrapping_mul(factor as i32));
            }
            Opcode::End => {
                output.flush().map_err(io_error)?;
                return Ok(());
            }
        }

        ip += 1;
    }
}

fn io_error(e: io::Error) -> Error {
    Error::SourceIo(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
