//! Textual property-list codec for the provisioning payload.
//!
//! Writes and reads the Java `Properties` text format the receiving
//! platform parses: a `#` header comment, one `key=value` pair per line,
//! backslash escapes, `\uXXXX` for non-ASCII, and backslash line
//! continuations on load. The writer emits pairs in the order given and no
//! timestamp line, so equal input always produces equal bytes.

mod escape;
mod parse;

use anyhow::Result;

pub(crate) use escape::{escape_key, escape_value, unescape};

/// Serialize `pairs` with a leading `#` header comment.
pub fn store(pairs: &[(String, String)], comment: &str) -> Vec<u8> {
    let mut out = String::new();
    out.push('#');
    out.push_str(comment);
    out.push('\n');
    for (key, value) in pairs {
        out.push_str(&escape_key(key));
        out.push('=');
        out.push_str(&escape_value(value));
        out.push('\n');
    }
    out.into_bytes()
}

/// Parse serialized properties back into pairs, in encounter order.
///
/// Duplicate keys are kept; callers that want Java's last-wins semantics
/// can scan from the end.
pub fn load(bytes: &[u8]) -> Result<Vec<(String, String)>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| anyhow::anyhow!("payload is not valid UTF-8: {}", e))?;
    parse::parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn store_simple_pairs() {
        let pairs = vec![pair("alpha", "1"), pair("beta", "two")];
        let bytes = store(&pairs, "header");
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "#header\nalpha=1\nbeta=two\n"
        );
    }

    #[test]
    fn store_empty_comment_still_writes_header_line() {
        let bytes = store(&[], "");
        assert_eq!(String::from_utf8(bytes).unwrap(), "#\n");
    }

    #[test]
    fn round_trip_plain() {
        let pairs = vec![
            pair("android.app.extra.PROVISIONING_DEVICE_ADMIN_COMPONENT_NAME", "com.example/.Admin"),
            pair("android.app.extra.PROVISIONING_DEVICE_ADMIN_PACKAGE_DOWNLOAD_LOCATION", "https://x/y.apk"),
            pair("android.app.extra.PROVISIONING_DEVICE_ADMIN_SIGNATURE_CHECKSUM", "abc"),
        ];
        let loaded = load(&store(&pairs, "nprov")).unwrap();
        assert_eq!(loaded, pairs);
    }

    #[test]
    fn round_trip_specials_and_whitespace() {
        let pairs = vec![
            pair("key with spaces", "value with spaces"),
            pair("eq=colon:", "a=b:c"),
            pair("hash#bang!", "#not a comment"),
            pair("tabs", "a\tb"),
            pair("newline", "line1\nline2"),
            pair("backslash", "C:\\path\\to"),
            pair("leading", "  indented value"),
        ];
        let loaded = load(&store(&pairs, "t")).unwrap();
        assert_eq!(loaded, pairs);
    }

    #[test]
    fn round_trip_non_ascii() {
        let pairs = vec![pair("ssid", "caf\u{e9}-\u{4e2d}\u{6587}"), pair("emoji", "\u{1f512}")];
        let bytes = store(&pairs, "t");
        // Writer output is pure ASCII.
        assert!(bytes.iter().all(|b| b.is_ascii()));
        let loaded = load(&bytes).unwrap();
        assert_eq!(loaded, pairs);
    }

    #[test]
    fn load_skips_comments_and_blank_lines() {
        let text = "# comment\n! also comment\n\n   \nkey=value\n";
        let loaded = load(text.as_bytes()).unwrap();
        assert_eq!(loaded, vec![pair("key", "value")]);
    }

    #[test]
    fn load_colon_and_whitespace_separators() {
        let loaded = load(b"a:1\nb 2\nc = 3\n").unwrap();
        assert_eq!(loaded, vec![pair("a", "1"), pair("b", "2"), pair("c", "3")]);
    }

    #[test]
    fn load_line_continuation() {
        let loaded = load(b"key=one \\\n    two\n").unwrap();
        assert_eq!(loaded, vec![pair("key", "one two")]);
    }

    #[test]
    fn load_escaped_backslash_is_not_a_continuation() {
        let loaded = load(b"key=ends\\\\\nnext=1\n").unwrap();
        assert_eq!(loaded, vec![pair("key", "ends\\"), pair("next", "1")]);
    }

    #[test]
    fn load_key_without_value() {
        let loaded = load(b"lonely\n").unwrap();
        assert_eq!(loaded, vec![pair("lonely", "")]);
    }

    #[test]
    fn load_keeps_duplicates_in_order() {
        let loaded = load(b"k=1\nk=2\n").unwrap();
        assert_eq!(loaded, vec![pair("k", "1"), pair("k", "2")]);
    }

    #[test]
    fn load_rejects_bad_unicode_escape() {
        assert!(load(b"k=\\u12").is_err());
        assert!(load(b"k=\\uZZZZ").is_err());
    }

    #[test]
    fn load_rejects_invalid_utf8() {
        assert!(load(&[0x6b, 0x3d, 0xff, 0xfe]).is_err());
    }
}
