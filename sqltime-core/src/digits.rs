//! Byte-range integer parsing shared by the date, time and interval parsers

/// Parse an unsigned decimal number from `text[start..end]`.
///
/// Returns `None` for an empty range, a non-digit, or a value that does not
/// fit into `u64`.
pub(crate) fn parse_u64(text: &str, start: usize, end: usize) -> Option<u64> {
    let bytes = text.as_bytes().get(start..end)?;
    if bytes.is_empty() {
        return None;
    }
    let mut value: u64 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        value = value.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
    }
    Some(value)
}

pub(crate) fn parse_u32(text: &str, start: usize, end: usize) -> Option<u32> {
    parse_u64(text, start, end).and_then(|v| u32::try_from(v).ok())
}

/// Parse a decimal number with an optional leading `+` or `-`.
///
/// Returns the magnitude and whether a minus sign was present.
pub(crate) fn parse_signed(text: &str, start: usize, end: usize) -> Option<(u64, bool)> {
    match text.as_bytes().get(start)? {
        b'-' => parse_u64(text, start + 1, end).map(|v| (v, true)),
        b'+' => parse_u64(text, start + 1, end).map(|v| (v, false)),
        _ => parse_u64(text, start, end).map(|v| (v, false)),
    }
}

/// Position of `needle` in `text[from..end]`, as an absolute index
pub(crate) fn find(text: &str, needle: u8, from: usize, end: usize) -> Option<usize> {
    let bytes = text.as_bytes().get(from..end)?;
    bytes.iter().position(|&b| b == needle).map(|p| p + from)
}
