// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-character escaping for service-message attribute values.

/// Escape a value for the single-quoted attribute syntax.
///
/// Reserved characters map to pipe sequences; every other character,
/// tab and remaining control characters included, passes through
/// unchanged. Downstream parsers key on this exact escape set, so the
/// table must not grow.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\n' => out.push_str("|n"),
            '\r' => out.push_str("|r"),
            '\'' => out.push_str("|'"),
            '|' => out.push_str("||"),
            '[' => out.push_str("|["),
            ']' => out.push_str("|]"),
            _ => out.push(ch),
        }
    }
    out
}

/// Inverse of [`escape`].
///
/// Unknown pipe sequences and a trailing bare pipe are preserved as-is
/// rather than rejected; the input may be arbitrary text scraped from a
/// log stream.
pub fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '|' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('\'') => out.push('\''),
            Some('|') => out.push('|'),
            Some('[') => out.push('['),
            Some(']') => out.push(']'),
            Some(other) => {
                out.push('|');
                out.push(other);
            }
            None => out.push('|'),
        }
    }
    out
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
