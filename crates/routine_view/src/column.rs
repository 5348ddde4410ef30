//! Closed set of table columns used for filtering and sorting.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ViewError;
use crate::join::JoinedRoutine;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    Name,
    Category,
    Tags,
    Sets,
    Reps,
    Weights,
    Notes,
    DateTime,
}

impl Column {
    pub const ALL: [Column; 8] = [
        Column::Name,
        Column::Category,
        Column::Tags,
        Column::Sets,
        Column::Reps,
        Column::Weights,
        Column::Notes,
        Column::DateTime,
    ];

    /// Wire/display key of the column.
    pub fn as_str(self) -> &'static str {
        match self {
            Column::Name => "name",
            Column::Category => "category",
            Column::Tags => "tags",
            Column::Sets => "sets",
            Column::Reps => "reps",
            Column::Weights => "weights",
            Column::Notes => "notes",
            Column::DateTime => "dateTime",
        }
    }

    /// Stringified value of this column for `routine`.
    pub fn value(self, routine: &JoinedRoutine) -> Cow<'_, str> {
        match self {
            Column::Name => Cow::Borrowed(routine.name.as_str()),
            Column::Category => Cow::Borrowed(routine.category.as_str()),
            Column::Tags => Cow::Borrowed(routine.tags.as_str()),
            Column::Sets => Cow::Owned(routine.sets.to_string()),
            Column::Reps => Cow::Owned(routine.reps.to_string()),
            Column::Weights => Cow::Owned(routine.weights.to_string()),
            Column::Notes => Cow::Borrowed(routine.notes.as_str()),
            Column::DateTime => Cow::Borrowed(routine.date_time.as_str()),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Column::ALL
            .into_iter()
            .find(|c| c.as_str().to_ascii_lowercase() == lowered)
            .ok_or_else(|| ViewError::InvalidParameter(format!("unknown column `{s}`")))
    }
}

/// Which values a search is tested against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterColumn {
    #[default]
    All,
    Column(Column),
}

impl FromStr for FilterColumn {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(FilterColumn::All);
        }
        trimmed.parse().map(FilterColumn::Column)
    }
}

impl From<Column> for FilterColumn {
    fn from(column: Column) -> Self {
        FilterColumn::Column(column)
    }
}
