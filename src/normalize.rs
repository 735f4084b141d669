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
use log::debug;

/// Determine whether a byte is one of the eight surviving commands.
fn is_command(c: u8) -> bool {
    matches!(c, b'+' | b'-' | b'<' | b'>' | b'.' | b',' | b'[' | b']')
}

/// Run a single left-to-right normalization pass: coalesce runs of
/// `+`/`-` and of `<`/`>`, drop a `][...]` dead block, and copy
/// through every other command byte (discarding anything else).
fn normalize_pass(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;

    while i < input.len() {
        let c = input[i];
        if c == b'+' || c == b'-' {
            let mut sum: i64 = 0;
            while i < input.len() && (input[i] == b'+' || input[i] == b'-') {
                sum += if input[i] == b'+' { 1 } else { -1 };
                i += 1;
            }
            let ch = if sum >= 0 { b'+' } else { b'-' };
            out.resize(out.len() + sum.unsigned_abs() as usize, ch);
        } else if c == b'<' || c == b'>' {
            let mut sum: i64 = 0;
            while i < input.len() && (input[i] == b'<' || input[i] == b'>') {
                sum += if input[i] == b'>' { 1 } else { -1 };
                i += 1;
            }
            let ch = if sum >= 0 { b'>' } else { b'<' };
            out.resize(out.len() + sum.unsigned_abs() as usize, ch);
        } else if c == b']' && input.get(i + 1) == Some(&b'[') {
            // Drop the `][` together with the dead loop it opens.
            i += 2;
            let mut depth = 1usize;
            while i < input.len() && depth > 0 {
                match input[i] {
                    b'[' => depth += 1,
                    b']' => depth -= 1,
                    _ => {}
                }
                i += 1;
            }
        } else if is_command(c) {
            out.push(c);
            i += 1;
        } else {
            i += 1;
        }
    }

    out
}

/// Normalize a raw source buffer into a byte string containing only
/// `+ - < > . , [ ]`, running to a fixed point so that comments
/// removed in one pass can expose new coalescing/dead-loop
/// opportunities for the next.
pub fn normalize(input: &[u8]) -> Vec<u8> {
    let mut current = input.to_vec();
    loop {
        let next = normalize_pass(&current);
        debug!("normalize pass: {} -> {} bytes", current.len(), next.len());
        if next.len() == current.len() {
            return next;
        }
        current = next;
    }
}

// ============================================================================
// Tests
// ============================================================================
