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
//! Fuses a maximal run of non-bracket commands into `ADD`/`GETCH`/
//! `PUTCH` instructions with pointer movement folded into their
//! `offset`, deferring the real pointer update to a single trailing
//! `ADDPTR`.
use crate::instruction::Instruction;

fn is_contractible(c: u8) -> bool {
    matches!(c, b'+' | b'-' | b'<' | b'>' | b',' | b'.')
}

/// Consume a (possibly empty) run of `<`/`>` starting at `*pos`,
/// returning the net displacement.
fn consume_ptr_moves(tokens: &[u8], pos: &mut usize) -> i32 {
    let mut delta = 0;
    while let Some(&c) = tokens.get(*pos) {
        match c {
            b'<' => {
                delta -= 1;
                *pos += 1;
            }
            b'>' => {
                delta += 1;
                *pos += 1;
            }
            _ => break,
        }
    }
    delta
}

/// Contract the maximal contractible run starting at `tokens[*pos]`,
/// appending the resulting instructions to `code` and advancing
/// `*pos` past the run. The caller guarantees `tokens[*pos]` is
/// contractible (i.e. not `[` or `]`).
pub fn contract(tokens: &[u8], pos: &mut usize, code: &mut Vec<Instruction>) {
    // Net pointer displacement since this run began; never reset
    // mid-run, so every emitted offset is relative to the pointer's
    // real position when `contract` was entered.
    let mut offset: i32 = 0;

    while pos_contractible(tokens, *pos) {
        offset += consume_ptr_moves(tokens, pos);

        match tokens.get(*pos) {
            Some(b'+') | Some(b'-') => {
                let mut data: i32 = 0;
                while matches!(tokens.get(*pos), Some(b'+') | Some(b'-')) {
                    data += if tokens[*pos] == b'+' { 1 } else { -1 };
                    *pos += 1;
                }
                code.push(Instruction::add(data, offset));
            }
            Some(b',') => {
                let mut data: i32 = 0;
                while tokens.get(*pos) == Some(&b',') {
                    data += 1;
                    *pos += 1;
                }
                code.push(Instruction::get_ch(data, offset));
            }
            Some(b'.') => {
                let mut data: i32 = 0;
                while tokens.get(*pos) == Some(&b'.') {
                    data += 1;
                    *pos += 1;
                }
                code.push(Instruction::put_ch(data, offset));
            }
            _ => {}
        }
    }

    if offset != 0 {
        code.push(Instruction::add_ptr(offset));
    }
}

fn pos_contractible(tokens: &[u8], pos: usize) -> bool {
    tokens.get(pos).is_some_and(|&c| is_contractible(c))
}

// ============================================================================
// Tests
// ============================================================================
