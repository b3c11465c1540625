// crates/substring_occurrence/src/policy.rs

/// The marker used to find a split point in a subject string.
///
/// Both forms behave identically; `Char` is just the single-character case.
/// `From` impls let call sites pass a `char` or `&str` literal directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator<'a> {
    Char(char),
    Text(&'a str),
}

impl From<char> for Locator<'static> {
    fn from(c: char) -> Self {
        Locator::Char(c)
    }
}

impl<'a> From<&'a str> for Locator<'a> {
    fn from(text: &'a str) -> Self {
        Locator::Text(text)
    }
}

/// How locator characters are compared against the subject.
///
/// `IgnoreCase` folds case during the search only; the returned slice always
/// keeps the subject's original characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMatching {
    Exact,
    #[default]
    IgnoreCase,
}

/// What a slicing function returns when the locator does not occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotFound {
    /// Return the subject unchanged.
    #[default]
    KeepSubject,
    /// Return the empty string.
    Empty,
}

/// The full occurrence policy for one slicing call.
///
/// The default (exclude the marker, keep the subject when missing, ignore
/// case) matches the most common call shape; every other combination is a
/// chained builder call away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OccurrencePolicy {
    /// Whether the located marker's characters are part of the kept slice.
    pub include_occurrence: bool,
    pub not_found: NotFound,
    pub case: CaseMatching,
}

impl OccurrencePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the marker's characters in the result.
    pub fn including_occurrence(mut self) -> Self {
        self.include_occurrence = true;
        self
    }

    /// Return `""` instead of the subject when the locator is missing.
    pub fn empty_when_missing(mut self) -> Self {
        self.not_found = NotFound::Empty;
        self
    }

    /// Compare locator characters exactly instead of case-folding.
    pub fn case_sensitive(mut self) -> Self {
        self.case = CaseMatching::Exact;
        self
    }
}
