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
use std::fmt;

/// A sentinel used for the `offset` field when an instruction has no
/// meaningful displacement (e.g. `ADDPTR`, `CLEAR`, `END`).
pub const NO_OFFSET: i32 = 0;

// ============================================================================
// Opcode
// ============================================================================

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Opcode {
    /// `tape[ptr+offset] += data` (modulo 256).
    Add,
    /// `tape[ptr+offset] -= data` (modulo 256). Never produced by the
    /// compiler (which folds signs into `Add`'s signed `data`); kept
    /// so a hand-assembled instruction stream can still use it.
    Sub,
    /// `ptr += data` (modulo the tape size).
    AddPtr,
    /// `ptr -= data` (modulo the tape size). Never produced by the
    /// compiler, for the same reason as `Sub`.
    SubPtr,
    /// Emit `tape[ptr+offset]` to standard output `data` times.
    PutCh,
    /// Read a byte into `tape[ptr+offset]`, `data` times; EOF stores 0.
    GetCh,
    /// If `tape[ptr] == 0`, set the instruction counter to `data`.
    CJump,
    /// Unconditionally set the instruction counter to `data`.
    Jump,
    /// `tape[ptr] = 0`.
    Clear,
    /// Parity-conditional clear of `tape[ptr]`; traps otherwise.
    DClear,
    /// `tape[ptr+offset] += tape[ptr] * data` (modulo 256).
    Mul,
    /// Terminate the executor.
    End,
}

// ============================================================================
// Instruction
// ============================================================================

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: Opcode,
    pub data: i32,
    pub offset: i32,
}

impl Instruction {
    pub fn new(opcode: Opcode, data: i32, offset: i32) -> Self {
        Instruction { opcode, data, offset }
    }

    pub fn add(data: i32, offset: i32) -> Self {
        Self::new(Opcode::Add, data, offset)
    }

    pub fn sub(data: i32, offset: i32) -> Self {
        Self::new(Opcode::Sub, data, offset)
    }

    pub fn add_ptr(data: i32) -> Self {
        Self::new(Opcode::AddPtr, data, NO_OFFSET)
    }

    pub fn sub_ptr(data: i32) -> Self {
        Self::new(Opcode::SubPtr, data, NO_OFFSET)
    }

    pub fn put_ch(data: i32, offset: i32) -> Self {
        Self::new(Opcode::PutCh, data, offset)
    }

    pub fn get_ch(data: i32, offset: i32) -> Self {
        Self::new(Opcode::GetCh, data, offset)
    }

    /// Construct a `CJUMP` whose target will be patched in later by
    /// the bracket linker.
    pub fn cjump_placeholder() -> Self {
        Self::new(Opcode::CJump, -1, NO_OFFSET)
    }

    pub fn jump(target: i32) -> Self {
        Self::new(Opcode::Jump, target, NO_OFFSET)
    }

    pub fn clear() -> Self {
        Self::new(Opcode::Clear, 0, NO_OFFSET)
    }

    pub fn dclear(count: i32) -> Self {
        Self::new(Opcode::DClear, count, NO_OFFSET)
    }

    pub fn mul(data: i32, offset: i32) -> Self {
        Self::new(Opcode::Mul, data, offset)
    }

    pub fn end() -> Self {
        Self::new(Opcode::End, 0, NO_OFFSET)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.opcode {
            Opcode::End => write!(f, "end"),
            Opcode::Clear => write!(f, "clear"),
            Opcode::CJump | Opcode::Jump => write!(f, "{:?} {}", self.opcode, self.data),
            _ => write!(f, "{:?} data={} offset={}", self.opcode, self.data, self.offset),
        }
    }
}
