// SPDX-License-Identifier: MPL-2.0
//! Display ordering of photos.
//!
//! Photos are ordered by the first rule that tells them apart:
//!
//! 1. explicit order numbers (fractions allowed), ascending; a photo with one
//!    sorts before a photo without
//! 2. capture dates, ascending; a dated photo sorts before an undated one
//! 3. natural ordering of the file name (`img2` before `img10`)
//! 4. position in the input sequence
//!
//! Every rule is a key comparison, so the combined comparison is a total order
//! and sorting is deterministic for any input. Comparing a dated photo with an
//! undated one by file name instead would break transitivity.

use crate::domain::photo::Photo;
use std::cmp::Ordering;

// =============================================================================
// Natural ordering
// =============================================================================

/// One run of a file name: either all digits or no digits at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Run<'a> {
    Digits(&'a str),
    Text(&'a str),
}

/// Splits a name into alternating digit and non-digit runs.
fn runs(name: &str) -> impl Iterator<Item = Run<'_>> {
    let mut rest = name;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = rest
            .char_indices()
            .find(|(_, c)| c.is_ascii_digit() != digits)
            .map_or(rest.len(), |(idx, _)| idx);
        let (run, tail) = rest.split_at(end);
        rest = tail;
        Some(if digits { Run::Digits(run) } else { Run::Text(run) })
    })
}

/// Compares two digit runs by numeric value without parsing (no overflow).
fn compare_digits(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Compares two names the way a person would.
///
/// Digit runs compare as integers, text runs compare case-insensitively and a
/// digit run sorts before a text run at the same position. A name whose runs
/// are exhausted first sorts first.
#[must_use]
pub fn natural_compare(a: &str, b: &str) -> Ordering {
    let mut left = runs(a);
    let mut right = runs(b);
    loop {
        let ord = match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(Run::Digits(x)), Some(Run::Digits(y))) => compare_digits(x, y),
            (Some(Run::Text(x)), Some(Run::Text(y))) => compare_text(x, y),
            (Some(Run::Digits(_)), Some(Run::Text(_))) => Ordering::Less,
            (Some(Run::Text(_)), Some(Run::Digits(_))) => Ordering::Greater,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
}

// =============================================================================
// Photo ordering
// =============================================================================

/// Present values first, then ascending.
fn present_first<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compares two photos by explicit order, capture date and file name.
///
/// Returns `Equal` only when none of the rules separates them; callers that
/// need a strict order break the tie on input position, as [`order_photos`] does.
#[must_use]
pub fn compare_photos(a: &Photo, b: &Photo) -> Ordering {
    present_first(a.explicit_order, b.explicit_order)
        .then_with(|| {
            present_first(
                a.capture_date.as_ref().and_then(|d| d.date()),
                b.capture_date.as_ref().and_then(|d| d.date()),
            )
        })
        .then_with(|| natural_compare(a.file_name(), b.file_name()))
}

/// Returns the photos in display order.
///
/// Pure: the same input sequence always yields the same output sequence.
#[must_use]
pub fn order_photos<'a, I>(photos: I) -> Vec<Photo>
where
    I: IntoIterator<Item = &'a Photo>,
{
    let mut indexed: Vec<(usize, &Photo)> = photos.into_iter().enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| compare_photos(a, b).then(ia.cmp(ib)));
    indexed.into_iter().map(|(_, photo)| photo.clone()).collect()
}
