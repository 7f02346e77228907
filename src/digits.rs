//! Fixed-width ASCII decimal scanning.
//!
//! Every numeric field in the grammar is either two or four digits wide. The
//! scanners here never read past the end of the buffer: a field that does not
//! fit is simply not a match.

#[cfg(test)]
#[path = "./digits_tests.rs"]
mod tests;

#[inline(always)]
pub(crate) fn digit(byte: u8) -> Option<u8> {
    let d = byte.wrapping_sub(b'0');
    if d <= 9 { Some(d) } else { None }
}

/// Reads exactly two ASCII digits starting at `at`.
///
/// Returns the value and the offset just past the field, or `None` if fewer
/// than two bytes remain or either byte is not a digit.
#[inline]
pub fn scan_two(input: &[u8], at: usize) -> Option<(u8, usize)> {
    let &[hi, lo] = input.get(at..at.checked_add(2)?)? else {
        return None;
    };
    let value = digit(hi)? * 10 + digit(lo)?;
    Some((value, at + 2))
}

/// Reads exactly four ASCII digits starting at `at`.
///
/// Fails as soon as any of the four bytes is not a digit.
#[inline]
pub fn scan_four(input: &[u8], at: usize) -> Option<(u16, usize)> {
    let &[a, b, c, d] = input.get(at..at.checked_add(4)?)? else {
        return None;
    };
    let value = digit(a)? as u16 * 1000
        + digit(b)? as u16 * 100
        + digit(c)? as u16 * 10
        + digit(d)? as u16;
    Some((value, at + 4))
}
