//! Indexing into single-pass cursors.
//!
//! A cursor is any [`Iterator`]: finite or infinite, never restarted, never
//! random-accessed. Indexing consumes it one step at a time and keeps only
//! the most recently produced element.

use tracing::debug;
use typecompat_common::{Error, Result, argument_not_null};

/// How exhaustion is detected once the cursor stops early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExhaustionCheck {
    /// Fail unless the cursor produced the element at the requested index.
    #[default]
    Strict,
    /// Fail only when fewer than `index` elements were produced.
    ///
    /// A cursor that ends exactly one element short of the index yields the
    /// last element it produced instead of failing.
    Legacy,
}

/// Policy knobs for cursor indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexingPolicy {
    pub exhaustion: ExhaustionCheck,
}

impl IndexingPolicy {
    pub fn with_exhaustion_check(mut self, exhaustion: ExhaustionCheck) -> Self {
        self.exhaustion = exhaustion;
        self
    }
}

/// Returns the element at zero-based `index`, consuming the cursor up to and
/// including that element.
///
/// Fails with [`Error::RangeViolation`] when `index` is negative or the cursor
/// is exhausted before reaching it.
pub fn element_at<I: Iterator>(cursor: I, index: isize) -> Result<I::Item> {
    element_at_with_policy(cursor, index, IndexingPolicy::default())
}

/// [`element_at`] with the exhaustion rule chosen by `policy`.
pub fn element_at_with_policy<I: Iterator>(
    cursor: I,
    index: isize,
    policy: IndexingPolicy,
) -> Result<I::Item> {
    if index < 0 {
        debug!(index, "negative cursor index");
        return Err(Error::RangeViolation { index, produced: 0 });
    }
    let target = index.unsigned_abs();

    let mut element = None;
    let mut produced = 0usize;
    for item in cursor {
        element = Some(item);
        produced += 1;
        if produced > target {
            break;
        }
    }

    let exhausted = match policy.exhaustion {
        ExhaustionCheck::Strict => produced <= target,
        ExhaustionCheck::Legacy => produced < target,
    };
    match element {
        Some(element) if !exhausted => Ok(element),
        _ => {
            debug!(index, produced, "cursor exhausted before reaching index");
            Err(Error::RangeViolation { index, produced })
        }
    }
}

/// The first element of `cursor`; an empty cursor is a range violation.
pub fn first_element<I: Iterator>(cursor: I) -> Result<I::Item> {
    element_at(cursor, 0)
}

/// [`element_at`] over a fresh cursor obtained from `source`.
///
/// An absent source is a contract violation.
pub fn element_at_source<S: IntoIterator>(source: Option<S>, index: isize) -> Result<S::Item> {
    let source = argument_not_null(source, "source")?;
    element_at(source.into_iter(), index)
}

pub fn first_element_of_source<S: IntoIterator>(source: Option<S>) -> Result<S::Item> {
    element_at_source(source, 0)
}

#[cfg(test)]
#[path = "../tests/cursor_tests.rs"]
mod tests;
