// crates/substring_occurrence/src/locate.rs

use std::ops::Range;

use regex::{Regex, RegexBuilder};

use crate::policy::{CaseMatching, Locator};

/// Compiles the locator text into a case-insensitive literal pattern.
/// The text is escaped first, so the pattern always compiles.
fn ignore_case_pattern(text: &str) -> Regex {
    RegexBuilder::new(&regex::escape(text))
        .case_insensitive(true)
        .build()
        .unwrap()
}

/// Returns the byte range of the first occurrence of `locator` in `subject`.
///
/// Under `IgnoreCase` the range is the actual matched text in the subject,
/// which can differ in length from the locator for non-ASCII case pairs.
pub(crate) fn find_first(
    subject: &str,
    locator: &Locator<'_>,
    case: CaseMatching,
) -> Option<Range<usize>> {
    match (locator, case) {
        (Locator::Char(c), CaseMatching::Exact) => {
            subject.find(*c).map(|start| start..start + c.len_utf8())
        }
        (Locator::Text(text), CaseMatching::Exact) => {
            subject.find(text).map(|start| start..start + text.len())
        }
        (Locator::Char(c), CaseMatching::IgnoreCase) => {
            let mut buf = [0u8; 4];
            find_first(subject, &Locator::Text(c.encode_utf8(&mut buf)), case)
        }
        (Locator::Text(text), CaseMatching::IgnoreCase) => {
            ignore_case_pattern(text).find(subject).map(|m| m.range())
        }
    }
}

/// Returns the byte range of the last occurrence of `locator` in `subject`.
pub(crate) fn find_last(
    subject: &str,
    locator: &Locator<'_>,
    case: CaseMatching,
) -> Option<Range<usize>> {
    match (locator, case) {
        (Locator::Char(c), CaseMatching::Exact) => {
            subject.rfind(*c).map(|start| start..start + c.len_utf8())
        }
        (Locator::Text(text), CaseMatching::Exact) => {
            subject.rfind(text).map(|start| start..start + text.len())
        }
        (Locator::Char(c), CaseMatching::IgnoreCase) => {
            let mut buf = [0u8; 4];
            find_last(subject, &Locator::Text(c.encode_utf8(&mut buf)), case)
        }
        (Locator::Text(text), CaseMatching::IgnoreCase) => ignore_case_pattern(text)
            .find_iter(subject)
            .last()
            .map(|m| m.range()),
    }
}
