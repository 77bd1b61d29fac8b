use crate::core::error::{MalformedLiteral, MalformedReason};

/// Read exactly `digits` hex digits at `at`.
pub(super) fn read_hex(body: &[u8], at: usize, digits: usize) -> Option<u32> {
    let slice = body.get(at..at + digits)?;
    slice
        .iter()
        .try_fold(0u32, |acc, &b| {
            acc.checked_mul(16)?.checked_add(char::from(b).to_digit(16)?)
        })
}

/// Read up to `max` octal digits at `at`; returns the value and digit count.
pub(super) fn read_octal(body: &[u8], at: usize, max: usize) -> (u32, usize) {
    body.iter()
        .skip(at)
        .take(max)
        .map_while(|&b| char::from(b).to_digit(8))
        .fold((0, 0), |(value, count), digit| (value * 8 + digit, count + 1))
}

pub(super) fn is_surrogate(code: u32) -> bool {
    (0xD800..=0xDFFF).contains(&code)
}

pub(super) fn is_high_surrogate(code: u32) -> bool {
    (0xD800..=0xDBFF).contains(&code)
}

pub(super) fn is_low_surrogate(code: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&code)
}

/// Append the UTF-8 encoding of a code point.
pub(super) fn push_code_point(
    out: &mut Vec<u8>,
    code: u32,
    offset: usize,
) -> Result<(), MalformedLiteral> {
    if is_surrogate(code) {
        return Err(MalformedLiteral::new(offset, MalformedReason::LoneSurrogate));
    }
    let c = char::from_u32(code)
        .ok_or(MalformedLiteral::new(offset, MalformedReason::InvalidEscape))?;
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    Ok(())
}
