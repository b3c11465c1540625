// crates/truncate_text/src/lib.rs

use std::borrow::Cow;

/// The single glyph appended in place of the cut-off tail.
const ELLIPSIS: char = '…';

/// Truncates `source` to at most `max_length` characters.
///
/// A `max_length` of zero, an empty source, or a source that already fits
/// all return the source unchanged (borrowed). Otherwise, with
/// `add_ellipsis` the result is the first `max_length - 1` characters plus a
/// single `…` glyph, so the result is still exactly `max_length` characters;
/// without it, the first `max_length` characters. Lengths are counted in
/// `char`s, so multi-byte text never splits a code point.
pub fn truncate_at(source: &str, max_length: usize, add_ellipsis: bool) -> Cow<'_, str> {
    if max_length == 0 || source.is_empty() {
        return Cow::Borrowed(source);
    }
    // nth(max_length) existing means the source has more than max_length
    // characters; its byte index is also the no-ellipsis cut point.
    let Some((limit, _)) = source.char_indices().nth(max_length) else {
        return Cow::Borrowed(source);
    };
    if !add_ellipsis {
        return Cow::Borrowed(&source[..limit]);
    }
    let cut = source
        .char_indices()
        .nth(max_length - 1)
        .map(|(i, _)| i)
        .unwrap_or(limit);
    let mut truncated = String::with_capacity(cut + ELLIPSIS.len_utf8());
    truncated.push_str(&source[..cut]);
    truncated.push(ELLIPSIS);
    Cow::Owned(truncated)
}
