//====================================================================
// Assorted helper functions.
//====================================================================

// Heuristic check that a buffer holds text rather than binary data:
// no control bytes other than tab, line feed and carriage return.
// Bytes >= 128 are allowed so UTF-8 labels or markers pass.
#[inline]
pub fn looks_like_text(bytes: &[u8]) -> bool {
    !bytes.iter().any(|&byte| byte == 127 || (byte < 32 && !matches!(byte, 9 | 10 | 13)))
}
