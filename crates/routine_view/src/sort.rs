use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::column::Column;
use crate::error::ViewError;
use crate::join::JoinedRoutine;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        })
    }
}

impl FromStr for SortOrder {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ViewError::InvalidParameter(format!(
                "sort order must be `asc` or `desc`, got `{s}`"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SortSpec {
    pub column: Column,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(column: Column, order: SortOrder) -> Self {
        Self { column, order }
    }
}

/// Order routines by the lowercased string value of `spec.column`.
///
/// Ascending is a stable sort; descending is its exact reverse.
pub fn sort_routines(routines: &mut [JoinedRoutine], spec: SortSpec) {
    routines.sort_by_cached_key(|r| spec.column.value(r).to_lowercase());
    if spec.order == SortOrder::Desc {
        routines.reverse();
    }
}
