//! UTF-8 codepoint length decoding
//!
//! Used when neither the punctuation catalog nor the dictionary matches at
//! the cursor and a single character must be consumed.

/// Byte length of the UTF-8 sequence starting with `lead`
///
/// Recognizes 1-, 2-, and 3-byte leading patterns. Four-byte leading bytes
/// (supplementary-plane characters) and continuation bytes decode as length
/// 1; such bytes are then consumed one at a time without producing a token.
pub fn utf8_char_len(lead: u8) -> usize {
    if lead & 0x80 == 0 {
        1
    } else if lead & 0xE0 == 0xC0 {
        2
    } else if lead & 0xF0 == 0xE0 {
        3
    } else {
        1
    }
}
