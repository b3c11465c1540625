// crates/text_rewrite/src/lib.rs

use std::borrow::Cow;

use substring_occurrence::{after, before, OccurrencePolicy};

/// Returns `input` concatenated with itself `count` times.
///
/// An empty input yields `""` regardless of `count`; `count == 0` yields
/// `""` regardless of input.
pub fn repeat(input: &str, count: usize) -> String {
    if input.is_empty() {
        return String::new();
    }
    input.repeat(count)
}

/// Replaces `find` with `replace`, but only in the part of `source` up to
/// and including the first occurrence of `separator`.
///
/// The head (everything up to and including the separator) is rewritten
/// with exact, case-sensitive matching; the tail is appended untouched.
/// When the separator does not occur the head is empty and the whole source
/// comes back unchanged.
pub fn replace_until(source: &str, separator: &str, find: &str, replace: &str) -> String {
    let head = before(
        source,
        separator,
        OccurrencePolicy::new().including_occurrence().empty_when_missing(),
    );
    let tail = after(source, separator, OccurrencePolicy::new());
    let mut rewritten = head.replace(find, replace);
    rewritten.push_str(tail);
    rewritten
}

/// Deletes every occurrence of `text_to_remove` from `source`, comparing
/// exactly (case-sensitive).
///
/// An empty source or an empty `text_to_remove` returns the source
/// unchanged, borrowed.
pub fn remove<'a>(source: &'a str, text_to_remove: &str) -> Cow<'a, str> {
    if source.is_empty() || text_to_remove.is_empty() || !source.contains(text_to_remove) {
        return Cow::Borrowed(source);
    }
    Cow::Owned(source.replace(text_to_remove, ""))
}
