//! The view pipeline: join, filter, sort, paginate.

use serde::Serialize;

use crate::column::FilterColumn;
use crate::error::{ViewError, ViewResult};
use crate::join::{JoinedRoutine, RoutineCollections};
use crate::paginate::{page_slice, total_pages};
use crate::search::filter_routines;
use crate::sort::{SortSpec, sort_routines};

pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewParams {
    pub search_term: String,
    pub filter_column: FilterColumn,
    /// `None` keeps the API order.
    pub sort: Option<SortSpec>,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            filter_column: FilterColumn::All,
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewParams {
    pub fn validate(&self) -> ViewResult<()> {
        if self.page_size == 0 {
            return Err(ViewError::InvalidParameter(
                "page size must be at least 1".into(),
            ));
        }
        if self.page == 0 {
            return Err(ViewError::InvalidParameter(
                "page must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// What the table renders for one set of parameters.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineView {
    pub page_items: Vec<JoinedRoutine>,
    /// `0` when nothing matches.
    pub total_pages: usize,
    pub filtered_count: usize,
    pub page: usize,
}

/// Joined routines that match the search, in display order.
pub fn filter_and_sort(
    collections: &RoutineCollections,
    filter_column: FilterColumn,
    search_term: &str,
    sort: Option<SortSpec>,
) -> Vec<JoinedRoutine> {
    let mut rows = filter_routines(collections.join(), filter_column, search_term);
    if let Some(spec) = sort {
        sort_routines(&mut rows, spec);
    }
    rows
}

/// Build the page of rows and the page count for `params`.
///
/// Parameters are validated before any work; a page past the end yields no
/// items rather than an error.
pub fn build_view(collections: &RoutineCollections, params: &ViewParams) -> ViewResult<RoutineView> {
    params.validate()?;
    let rows = filter_and_sort(
        collections,
        params.filter_column,
        &params.search_term,
        params.sort,
    );
    let total_pages = total_pages(rows.len(), params.page_size)?;
    let page_items = page_slice(&rows, params.page, params.page_size)?.to_vec();
    Ok(RoutineView {
        page_items,
        total_pages,
        filtered_count: rows.len(),
        page: params.page,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;
    use crate::sort::SortOrder;
    use crate::test_utils::{category, routine, tag};

    fn squat_collections() -> RoutineCollections {
        RoutineCollections::new(
            vec![routine("1", "Squat", Some("c1"), &["t1"])],
            vec![category("c1", "Legs")],
            vec![tag("t1", "Strength")],
        )
    }

    #[test]
    fn squat_search_returns_joined_row() {
        let params = ViewParams {
            search_term: "squ".into(),
            ..ViewParams::default()
        };
        let view = build_view(&squat_collections(), &params).expect("view");
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.page_items.len(), 1);
        assert_eq!(view.page_items[0].category, "Legs");
        assert_eq!(view.page_items[0].tags, "Strength");
    }

    #[test]
    fn no_match_reports_zero_pages() {
        let params = ViewParams {
            search_term: "xyz".into(),
            ..ViewParams::default()
        };
        let view = build_view(&squat_collections(), &params).expect("view");
        assert!(view.page_items.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.filtered_count, 0);
    }

    #[test]
    fn invalid_params_rejected_before_work() {
        let params = ViewParams {
            page_size: 0,
            ..ViewParams::default()
        };
        assert!(matches!(
            build_view(&RoutineCollections::default(), &params),
            Err(ViewError::InvalidParameter(_))
        ));
        let params = ViewParams {
            page: 0,
            ..ViewParams::default()
        };
        assert!(build_view(&RoutineCollections::default(), &params).is_err());
    }

    #[test]
    fn sorted_then_paged() {
        let names = ["Row", "bench", "Squat", "curl", "Deadlift", "press"];
        let routines = names
            .iter()
            .enumerate()
            .map(|(i, n)| routine(&i.to_string(), n, None, &[]))
            .collect();
        let collections = RoutineCollections::new(routines, vec![], vec![]);
        let params = ViewParams {
            sort: Some(SortSpec::new(Column::Name, SortOrder::Asc)),
            page: 2,
            page_size: 4,
            ..ViewParams::default()
        };
        let view = build_view(&collections, &params).expect("view");
        let got: Vec<&str> = view.page_items.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(got, ["Row", "Squat"]);
        assert_eq!(view.total_pages, 2);
    }
}
