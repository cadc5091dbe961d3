//! Token conventions shared by training and encoding.
//!
//! A token is either *initial* (may start a word) or a *continuation*, marked
//! with the `##` prefix and attached to the previous token without a space.

use compact_str::{format_compact, CompactString};

/// Marker prefixed to tokens that continue a word.
pub const CONTINUATION_PREFIX: &str = "##";

/// Padding token, always at position 0 of a trained vocabulary.
pub const PAD_TOKEN: &str = "[PAD]";

/// Unknown-word token, always at position 1 of a trained vocabulary.
pub const UNK_TOKEN: &str = "[UNK]";

/// A pair of adjacent tokens in a word's segmentation.
pub type Pair = (CompactString, CompactString);

/// Check whether a token carries the continuation marker.
#[inline]
pub fn is_continuation(token: &str) -> bool {
    token.starts_with(CONTINUATION_PREFIX)
}

/// Strip the continuation marker, if present.
#[inline]
pub fn strip_continuation(token: &str) -> &str {
    token.strip_prefix(CONTINUATION_PREFIX).unwrap_or(token)
}

/// Mark a piece of text as a continuation token.
#[inline]
pub fn continuation(piece: &str) -> CompactString {
    format_compact!("{CONTINUATION_PREFIX}{piece}")
}

/// Fuse two adjacent tokens into one.
///
/// The right token's marker is dropped; an unmarked right token is appended
/// verbatim.
pub fn fuse(left: &str, right: &str) -> CompactString {
    let mut fused = CompactString::new(left);
    fused.push_str(strip_continuation(right));
    fused
}

/// Split a word into its initial segmentation: the first character as an
/// initial token, every later character as a continuation token.
pub fn split_chars(word: &str) -> Vec<CompactString> {
    let mut buf = [0u8; 4];
    word.chars()
        .enumerate()
        .map(|(i, c)| {
            let piece: &str = c.encode_utf8(&mut buf);
            if i == 0 {
                CompactString::new(piece)
            } else {
                continuation(piece)
            }
        })
        .collect()
}

/// Rebuild text from a token sequence.
///
/// Continuation tokens attach to the previous token; every other token starts
/// a new space-separated word.
pub fn decode<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut text = String::new();
    for token in tokens {
        let token = token.as_ref();
        if is_continuation(token) {
            text.push_str(strip_continuation(token));
        } else {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(token);
        }
    }
    text
}
