/// Returns the width in bytes of a UTF-8 encoded character given its first byte.
///
/// Continuation bytes never start a character in valid `str` data, they are reported as width 1.
#[inline]
pub(crate) const fn utf8_char_width(first: u8) -> usize {
    match first {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
