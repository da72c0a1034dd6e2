//! Property text parsing: logical lines, separators, unescaping.

use anyhow::Result;

use super::unescape;

/// Parse property text into key/value pairs in encounter order.
pub(crate) fn parse(text: &str) -> Result<Vec<(String, String)>> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = normalized.split('\n');
    let mut pairs = Vec::new();

    while let Some(raw) = lines.next() {
        let line = raw.trim_start();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        // A trailing unescaped backslash joins the next natural line, with
        // that line's leading whitespace dropped.
        let mut logical = line.to_string();
        while ends_with_odd_backslashes(&logical) {
            logical.pop();
            match lines.next() {
                Some(next) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        pairs.push(split_pair(&logical)?);
    }

    Ok(pairs)
}

fn ends_with_odd_backslashes(s: &str) -> bool {
    s.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split one logical line at the first unescaped `=`, `:` or whitespace.
fn split_pair(logical: &str) -> Result<(String, String)> {
    let mut sep: Option<(usize, bool)> = None;
    let mut escaped = false;
    for (i, c) in logical.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                sep = Some((i, true));
                break;
            }
            c if c.is_whitespace() => {
                sep = Some((i, false));
                break;
            }
            _ => {}
        }
    }

    let (key_raw, value_raw) = match sep {
        None => (logical, ""),
        Some((i, explicit)) => {
            let key = &logical[..i];
            let sep_len = logical[i..].chars().next().map_or(0, char::len_utf8);
            let mut tail = logical[i + sep_len..].trim_start();
            // A whitespace separator may still be followed by one `=` or `:`.
            if !explicit {
                if let Some(stripped) = tail.strip_prefix(['=', ':']) {
                    tail = stripped.trim_start();
                }
            }
            (key, tail)
        }
    };

    Ok((unescape(key_raw)?, unescape(value_raw)?))
}
