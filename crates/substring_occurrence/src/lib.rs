// crates/substring_occurrence/src/lib.rs

//! Occurrence-based string slicing.
//!
//! Every function here takes a subject string, a [`Locator`] (a single
//! character or a substring) and an [`OccurrencePolicy`], and returns a
//! contiguous slice of the subject. An empty subject is returned unchanged
//! before any search happens, so an optional subject composes with
//! `Option::map` and never needs special handling:
//!
//! ```
//! use substring_occurrence::{before, OccurrencePolicy};
//!
//! let host: Option<&str> = Some("example.com:8080");
//! let name = host.map(|h| before(h, ':', OccurrencePolicy::new()));
//! assert_eq!(name, Some("example.com"));
//! ```

mod locate;
mod policy;

pub use policy::{CaseMatching, Locator, NotFound, OccurrencePolicy};

use locate::{find_first, find_last};
use thiserror::Error;

/// The only error the slicing family produces. Missing locators and empty
/// subjects are policy-selected return values, never errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SliceError {
    /// `between` computed an end boundary left of the start boundary, which
    /// can happen because the end locator is searched from the top of the
    /// subject rather than from the start boundary.
    #[error("end boundary {end} precedes start boundary {start}")]
    InvertedRange { start: usize, end: usize },
}

/// The policy-selected result for a locator that does not occur.
fn missing(subject: &str, not_found: NotFound) -> &str {
    match not_found {
        NotFound::KeepSubject => subject,
        NotFound::Empty => "",
    }
}

/// Returns the part of `subject` before the first occurrence of `locator`.
///
/// With `include_occurrence` the marker's own characters stay in the result.
/// A missing locator yields the subject or `""` per the policy's
/// [`NotFound`] choice; an empty subject is returned unchanged.
pub fn before<'a, 'l>(
    subject: &'a str,
    locator: impl Into<Locator<'l>>,
    policy: OccurrencePolicy,
) -> &'a str {
    if subject.is_empty() {
        return subject;
    }
    match find_first(subject, &locator.into(), policy.case) {
        None => missing(subject, policy.not_found),
        Some(found) => {
            let cut = if policy.include_occurrence {
                found.end
            } else {
                found.start
            };
            &subject[..cut]
        }
    }
}

/// Returns the part of `subject` after the first occurrence of `locator`.
///
/// `include_occurrence` keeps the marker at the front of the result. The
/// not-found and empty-subject behavior matches [`before`].
pub fn after<'a, 'l>(
    subject: &'a str,
    locator: impl Into<Locator<'l>>,
    policy: OccurrencePolicy,
) -> &'a str {
    if subject.is_empty() {
        return subject;
    }
    match find_first(subject, &locator.into(), policy.case) {
        None => missing(subject, policy.not_found),
        Some(found) => {
            let cut = if policy.include_occurrence {
                found.start
            } else {
                found.end
            };
            &subject[cut..]
        }
    }
}

/// Returns the part of `subject` before the *last* occurrence of `locator`.
pub fn before_last<'a, 'l>(
    subject: &'a str,
    locator: impl Into<Locator<'l>>,
    policy: OccurrencePolicy,
) -> &'a str {
    if subject.is_empty() {
        return subject;
    }
    match find_last(subject, &locator.into(), policy.case) {
        None => missing(subject, policy.not_found),
        Some(found) => {
            let cut = if policy.include_occurrence {
                found.end
            } else {
                found.start
            };
            &subject[..cut]
        }
    }
}

/// Returns the part of `subject` after the *last* occurrence of `locator`.
pub fn after_last<'a, 'l>(
    subject: &'a str,
    locator: impl Into<Locator<'l>>,
    policy: OccurrencePolicy,
) -> &'a str {
    if subject.is_empty() {
        return subject;
    }
    match find_last(subject, &locator.into(), policy.case) {
        None => missing(subject, policy.not_found),
        Some(found) => {
            let cut = if policy.include_occurrence {
                found.start
            } else {
                found.end
            };
            &subject[cut..]
        }
    }
}

/// Returns the part of `subject` between the first occurrence of
/// `start_locator` and the first occurrence of `end_locator`.
///
/// The end locator is searched from the top of the subject, not from the
/// start boundary; a match sitting before the start marker still counts.
/// When that produces an end boundary left of the start boundary the call
/// fails with [`SliceError::InvertedRange`].
///
/// A missing start locator follows the policy's [`NotFound`] choice. A
/// missing end locator yields `""` under [`NotFound::Empty`]; otherwise the
/// whole tail of the subject is kept and `include_occurrence` is ignored for
/// that end.
pub fn between<'a, 's, 'e>(
    subject: &'a str,
    start_locator: impl Into<Locator<'s>>,
    end_locator: impl Into<Locator<'e>>,
    policy: OccurrencePolicy,
) -> Result<&'a str, SliceError> {
    if subject.is_empty() {
        return Ok(subject);
    }
    let start = match find_first(subject, &start_locator.into(), policy.case) {
        None => return Ok(missing(subject, policy.not_found)),
        Some(found) => {
            if policy.include_occurrence {
                found.start
            } else {
                found.end
            }
        }
    };
    let end = match find_first(subject, &end_locator.into(), policy.case) {
        None => match policy.not_found {
            NotFound::Empty => return Ok(""),
            NotFound::KeepSubject => subject.len(),
        },
        Some(found) => {
            if policy.include_occurrence {
                found.end
            } else {
                found.start
            }
        }
    };
    if end < start {
        return Err(SliceError::InvertedRange { start, end });
    }
    Ok(&subject[start..end])
}

/// Case-insensitive equality over whole strings.
pub fn equals_ignore_case(text: &str, other: &str) -> bool {
    text.to_lowercase() == other.to_lowercase()
}

/// Whether `needle` occurs anywhere in `text`, comparing case-insensitively.
pub fn contains_ignore_case(text: &str, needle: &str) -> bool {
    find_first(text, &Locator::Text(needle), CaseMatching::IgnoreCase).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn before_first_slash() {
        assert_eq!(before("a/b/c", '/', OccurrencePolicy::new()), "a");
        assert_eq!(
            before("a/b/c", '/', OccurrencePolicy::new().including_occurrence()),
            "a/"
        );
    }

    #[test]
    fn after_first_slash() {
        assert_eq!(after("a/b/c", '/', OccurrencePolicy::new()), "b/c");
        assert_eq!(
            after("a/b/c", '/', OccurrencePolicy::new().including_occurrence()),
            "/b/c"
        );
    }

    #[test]
    fn before_missing_locator_follows_policy() {
        assert_eq!(before("hello", "z", OccurrencePolicy::new()), "hello");
        assert_eq!(
            before("hello", "z", OccurrencePolicy::new().empty_when_missing()),
            ""
        );
    }

    #[test]
    fn empty_subject_short_circuits() {
        let policy = OccurrencePolicy::new().empty_when_missing();
        // Even with the empty-when-missing policy, an empty subject comes
        // back as-is without any locator search.
        assert_eq!(before("", "x", policy), "");
        assert_eq!(after("", "x", policy), "");
        assert_eq!(before_last("", "x", policy), "");
        assert_eq!(after_last("", "x", policy), "");
        assert_eq!(between("", "<", ">", policy), Ok(""));
    }

    #[test]
    fn search_is_case_insensitive_but_result_keeps_casing() {
        assert_eq!(before("Key=Value", "KEY=", OccurrencePolicy::new()), "");
        assert_eq!(
            after("Key=Value", "KEY=", OccurrencePolicy::new().including_occurrence()),
            "Key=Value"
        );
        assert_eq!(after("Key=Value", "KEY=", OccurrencePolicy::new()), "Value");
    }

    #[test]
    fn exact_case_matching_when_requested() {
        let policy = OccurrencePolicy::new().case_sensitive();
        assert_eq!(after("Key=Value", "KEY=", policy), "Key=Value");
        assert_eq!(after("Key=Value", "Key=", policy), "Value");
    }

    #[test]
    fn last_occurrence_slicing() {
        assert_eq!(after_last("a/b/c", '/', OccurrencePolicy::new()), "c");
        assert_eq!(before_last("a/b/c", '/', OccurrencePolicy::new()), "a/b");
        assert_eq!(
            before_last("a/b/c", '/', OccurrencePolicy::new().including_occurrence()),
            "a/b/"
        );
        assert_eq!(
            after_last("a/b/c", '/', OccurrencePolicy::new().including_occurrence()),
            "/c"
        );
    }

    #[test]
    fn last_occurrence_missing_locator_follows_policy() {
        assert_eq!(before_last("abc", '/', OccurrencePolicy::new()), "abc");
        assert_eq!(
            after_last("abc", '/', OccurrencePolicy::new().empty_when_missing()),
            ""
        );
    }

    #[test]
    fn between_markers() {
        assert_eq!(
            between("<x>VALUE</x>", "<x>", "</x>", OccurrencePolicy::new()),
            Ok("VALUE")
        );
        assert_eq!(
            between(
                "<x>VALUE</x>",
                "<x>",
                "</x>",
                OccurrencePolicy::new().including_occurrence()
            ),
            Ok("<x>VALUE</x>")
        );
    }

    #[test]
    fn between_missing_start_follows_policy() {
        assert_eq!(
            between("VALUE</x>", "<x>", "</x>", OccurrencePolicy::new()),
            Ok("VALUE</x>")
        );
        assert_eq!(
            between(
                "VALUE</x>",
                "<x>",
                "</x>",
                OccurrencePolicy::new().empty_when_missing()
            ),
            Ok("")
        );
    }

    #[test]
    fn between_missing_end_keeps_tail_or_empties() {
        assert_eq!(
            between("<x>VALUE", "<x>", "</x>", OccurrencePolicy::new()),
            Ok("VALUE")
        );
        assert_eq!(
            between(
                "<x>VALUE",
                "<x>",
                "</x>",
                OccurrencePolicy::new().empty_when_missing()
            ),
            Ok("")
        );
    }

    #[test]
    fn between_end_found_before_start_is_an_error() {
        // The end locator search starts from the top of the subject, so the
        // comma here lands left of the start boundary.
        let result = between("end,start tail", "start", ",", OccurrencePolicy::new());
        assert_eq!(result, Err(SliceError::InvertedRange { start: 9, end: 3 }));
    }

    #[test]
    fn between_adjacent_markers_yield_empty() {
        assert_eq!(
            between("ab<x></x>cd", "<x>", "</x>", OccurrencePolicy::new()),
            Ok("")
        );
    }

    #[test]
    fn between_char_locators() {
        assert_eq!(
            between("key[idx]=v", '[', ']', OccurrencePolicy::new()),
            Ok("idx")
        );
    }

    #[test]
    fn ignore_case_comparisons() {
        assert!(equals_ignore_case("Content-Type", "content-type"));
        assert!(!equals_ignore_case("Content-Type", "content"));
        assert!(contains_ignore_case("Content-Type: text/html", "TEXT/HTML"));
        assert!(!contains_ignore_case("Content-Type: text/html", "json"));
    }
}
