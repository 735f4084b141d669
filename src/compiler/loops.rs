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
//! Classification of `[...]` loops into `CLEAR`, `DCLEAR`, or a
//! multiplication/copy loop. All three recognizers operate on a slice
//! beginning at the loop's opening `[` and, on success, report how
//! many bytes of the token stream (including both brackets) they
//! consumed.

/// Scan the flat (unnested, bracket-only-at-the-ends) body of a loop.
/// Returns the body slice (excluding both brackets) if every token up
/// to the matching `]` is one of `+ - < >`; returns `None` if a
/// nested `[` or any other command is seen first, or if the loop
/// never closes within `tokens`.
fn flat_body(tokens: &[u8]) -> Option<&[u8]> {
    debug_assert_eq!(tokens.first(), Some(&b'['));
    let mut i = 1;
    while i < tokens.len() {
        match tokens[i] {
            b']' => return Some(&tokens[1..i]),
            b'+' | b'-' | b'<' | b'>' => i += 1,
            _ => return None,
        }
    }
    None
}

/// Recognize the exact token sequences `[-]` and `[+]`. Returns the
/// number of bytes consumed (always 3) on a match.
pub fn try_clear_loop(tokens: &[u8]) -> Option<usize> {
    if tokens.starts_with(b"[-]") || tokens.starts_with(b"[+]") {
        Some(3)
    } else {
        None
    }
}

/// Recognize a flat loop whose body is solely a nonzero run of `+`/`-`
/// (any mix). Returns `(bytes consumed, character count)` on a match;
/// `character count` becomes `DCLEAR`'s `data`.
pub fn try_dangerous_clear(tokens: &[u8]) -> Option<(usize, i32)> {
    debug_assert_eq!(tokens.first(), Some(&b'['));
    let mut i = 1;
    while i < tokens.len() && tokens[i] != b']' {
        if tokens[i] != b'+' && tokens[i] != b'-' {
            return None;
        }
        i += 1;
    }
    if i >= tokens.len() {
        return None;
    }
    let count = i - 1;
    if count == 0 {
        return None;
    }
    Some((i + 1, count as i32))
}

/// Recognize a flat, pointer-balanced loop whose body reduces to an
/// offset-0 delta of exactly `-1`. Returns `(bytes consumed, offset ->
/// delta pairs in first-encountered order)` on a match; the pair for
/// offset 0 is included and must be filtered out by the caller before
/// emitting `MUL` instructions (only `CLEAR` corresponds to it).
pub fn try_multiplication_loop(tokens: &[u8]) -> Option<(usize, Vec<(i32, i32)>)> {
    let body = flat_body(tokens)?;

    let net_ptr: i32 = body.iter().fold(0, |acc, &c| match c {
        b'<' => acc - 1,
        b'>' => acc + 1,
        _ => acc,
    });
    if net_ptr != 0 {
        return None;
    }

    let mut cells: Vec<(i32, i32)> = Vec::new();
    let mut offset: i32 = 0;
    for &c in body {
        match c {
            b'<' => offset -= 1,
            b'>' => offset += 1,
            b'+' | b'-' => {
                let delta = if c == b'+' { 1 } else { -1 };
                match cells.iter_mut().find(|(o, _)| *o == offset) {
                    Some((_, d)) => *d += delta,
                    None => cells.push((offset, delta)),
                }
            }
            _ => unreachable!("flat_body only admits + - < >"),
        }
    }

    let zero_delta = cells.iter().find(|(o, _)| *o == 0).map(|(_, d)| *d);
    if zero_delta != Some(-1) {
        return None;
    }

    Some((body.len() + 2, cells))
}

// ============================================================================
// Tests
// ============================================================================
