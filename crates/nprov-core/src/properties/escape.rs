//! Backslash escaping for keys and values.

use anyhow::{bail, Result};
use std::fmt::Write as _;

/// Escape a key: every space is escaped so the key cannot be cut short by
/// the whitespace separator rule on load.
pub(crate) fn escape_key(s: &str) -> String {
    escape(s, true)
}

/// Escape a value: only leading spaces need escaping, embedded ones survive.
pub(crate) fn escape_value(s: &str) -> String {
    escape(s, false)
}

fn escape(s: &str, escape_all_spaces: bool) -> String {
    let mut out = String::with_capacity(s.len());
    let mut leading = true;
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ' ' => {
                if escape_all_spaces || leading {
                    out.push('\\');
                }
                out.push(' ');
            }
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{c}' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            c if (' '..='\u{7e}').contains(&c) => out.push(c),
            c => {
                // Non-ASCII goes out as UTF-16 code units, surrogate pairs
                // included, matching what the receiving parser reads back.
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{:04X}", unit);
                }
            }
        }
        if c != ' ' {
            leading = false;
        }
    }
    out
}

/// Reverse [`escape`]: resolve `\uXXXX` (including surrogate pairs) and the
/// single-character escapes; an unknown `\x` yields `x`.
pub(crate) fn unescape(s: &str) -> Result<String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            None => bail!("dangling backslash at end of input"),
            Some('u') => {
                let unit = read_code_unit(&mut chars)?;
                if (0xD800..=0xDBFF).contains(&unit) {
                    // High surrogate: the low half must follow as another \uXXXX.
                    if chars.next() != Some('\\') || chars.next() != Some('u') {
                        bail!("unpaired surrogate in \\u escape");
                    }
                    let low = read_code_unit(&mut chars)?;
                    match char::decode_utf16([unit, low]).next() {
                        Some(Ok(c)) => out.push(c),
                        _ => bail!("invalid surrogate pair in \\u escape"),
                    }
                } else {
                    match char::from_u32(unit as u32) {
                        Some(c) => out.push(c),
                        None => bail!("unpaired surrogate in \\u escape"),
                    }
                }
            }
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some(other) => out.push(other),
        }
    }
    Ok(out)
}

fn read_code_unit(chars: &mut std::str::Chars<'_>) -> Result<u16> {
    let mut unit: u16 = 0;
    for _ in 0..4 {
        let c = match chars.next() {
            Some(c) => c,
            None => bail!("truncated \\u escape"),
        };
        let digit = match c.to_digit(16) {
            Some(d) => d as u16,
            None => bail!("invalid hex digit '{}' in \\u escape", c),
        };
        unit = (unit << 4) | digit;
    }
    Ok(unit)
}
