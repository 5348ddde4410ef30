//! Search term normalization and row matching.
//!
//! Terms and candidate values go through the same normalization: commas,
//! hyphens, slashes and whitespace are removed and the rest is lowercased.
//! Terms of at most [`PREFIX_MATCH_MAX_LEN`] chars match as a prefix, longer
//! ones as a substring.

use std::borrow::Cow;

use crate::column::{Column, FilterColumn};
use crate::join::JoinedRoutine;

/// Normalized terms up to this many chars use prefix matching.
pub const PREFIX_MATCH_MAX_LEN: usize = 2;

pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ',' | '-' | '/') && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Test one raw candidate value against an already normalized term.
pub fn matches_term(value: &str, normalized_term: &str) -> bool {
    let value = normalize(value);
    if normalized_term.chars().count() <= PREFIX_MATCH_MAX_LEN {
        value.starts_with(normalized_term)
    } else {
        value.contains(normalized_term)
    }
}

/// Every value an `All` search looks at: the id, each column and the history dates.
pub fn searchable_values(routine: &JoinedRoutine) -> impl Iterator<Item = Cow<'_, str>> {
    std::iter::once(Cow::Borrowed(routine.id.as_str()))
        .chain(Column::ALL.into_iter().map(move |c| c.value(routine)))
        .chain(std::iter::once(Cow::Owned(routine.dates.join(","))))
}

pub fn routine_matches(
    routine: &JoinedRoutine,
    filter: FilterColumn,
    normalized_term: &str,
) -> bool {
    match filter {
        FilterColumn::All => searchable_values(routine).any(|v| matches_term(&v, normalized_term)),
        FilterColumn::Column(column) => matches_term(&column.value(routine), normalized_term),
    }
}

/// Keep the routines matching `search_term`, preserving input order.
pub fn filter_routines(
    routines: Vec<JoinedRoutine>,
    filter: FilterColumn,
    search_term: &str,
) -> Vec<JoinedRoutine> {
    let term = normalize(search_term);
    if term.is_empty() {
        return routines;
    }
    routines
        .into_iter()
        .filter(|r| routine_matches(r, filter, &term))
        .collect()
}
