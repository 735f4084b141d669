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

// ============================================================================
// Error
// ============================================================================

/// Everything which can go fatally wrong between loading a source file
/// and the executor returning control to `main`.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Either no input file was given, or more than one was.
    Usage,
    /// The source file could not be opened or read.
    SourceIo(String),
    /// A `]` was encountered with no corresponding open `[`.
    UnmatchedClose,
    /// Source ended with one or more `[` left open.
    UnmatchedOpen,
    /// Loop nesting exceeded the bracket stack's capacity.
    BracketStackOverflow,
    /// A `DCLEAR` opcode's parity test failed at runtime.
    NonTerminatingLoop,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Usage => write!(f, "usage: tapeil [-t] [-v] INPUT_FILE"),
            Error::SourceIo(msg) => write!(f, "could not load file: {msg}"),
            Error::UnmatchedClose => write!(f, "unmatched ]"),
            Error::UnmatchedOpen => write!(f, "unmatched ["),
            Error::BracketStackOverflow => write!(f, "loop nesting too deep"),
            Error::NonTerminatingLoop => write!(f, "program has entered an infinite loop"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
