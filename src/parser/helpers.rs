//! Helper functions for diff parsing.

/// Whether `bytes` contains only ASCII whitespace (or nothing).
pub(super) fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}

/// A git file mode: one to six octal digits, e.g. `100644`.
pub(super) fn is_octal_mode(mode: &[u8]) -> bool {
    !mode.is_empty() && mode.len() <= 6 && mode.iter().all(|b| (b'0'..=b'7').contains(b))
}

/// An abbreviated or full object id.
pub(super) fn is_hex_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse `NN%` with `NN` in `0..=100`.
pub(super) fn parse_percent(raw: &[u8]) -> Option<u8> {
    let digits = raw.strip_suffix(b"%")?;
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let value: u8 = std::str::from_utf8(digits).ok()?.parse().ok()?;
    (value <= 100).then_some(value)
}

/// Remove a side prefix such as `a/` or `b/`, if present.
pub(super) fn strip_side_prefix<'a>(path: &'a [u8], prefix: &[u8]) -> &'a [u8] {
    path.strip_prefix(prefix).unwrap_or(path)
}

/// Decode a git C-style quoted path (`"..."` with backslash escapes).
///
/// Returns `None` if `raw` is not a complete quoted string. Octal escapes
/// produce raw bytes, so multi-byte UTF-8 survives.
pub(super) fn unquote_c_style(raw: &[u8]) -> Option<Vec<u8>> {
    let inner = raw.strip_prefix(b"\"")?.strip_suffix(b"\"")?;
    let mut out = Vec::with_capacity(inner.len());
    let mut bytes = inner.iter().copied().peekable();

    while let Some(byte) = bytes.next() {
        if byte != b'\\' {
            out.push(byte);
            continue;
        }

        let escaped = bytes.next()?;
        let decoded = match escaped {
            b'a' => 0x07,
            b'b' => 0x08,
            b't' => b'\t',
            b'n' => b'\n',
            b'v' => 0x0b,
            b'f' => 0x0c,
            b'r' => b'\r',
            b'"' => b'"',
            b'\\' => b'\\',
            b'0'..=b'3' => {
                let mut value = u32::from(escaped - b'0');
                for _ in 0..2 {
                    let digit = bytes.next_if(|b| (b'0'..=b'7').contains(b))?;
                    value = value * 8 + u32::from(digit - b'0');
                }
                u8::try_from(value).ok()?
            }
            _ => return None,
        };
        out.push(decoded);
    }

    Some(out)
}
