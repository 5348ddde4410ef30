//! Searchable, sortable, paginated view over workout routines.
//!
//! [`build_view`] is a pure pipeline over a loaded [`RoutineCollections`];
//! [`RoutineService`] does the loading and deletion through a
//! [`routine_client::RoutineClient`].

pub mod charts;
pub mod cli;
pub mod column;
pub mod error;
pub mod join;
pub mod paginate;
pub mod search;
pub mod services;
pub mod sort;
pub mod state;
pub mod view;

mod test_utils;

pub use column::{Column, FilterColumn};
pub use error::{ViewError, ViewResult};
pub use join::{JoinedRoutine, RoutineCollections, join_routines};
pub use services::RoutineService;
pub use sort::{SortOrder, SortSpec};
pub use state::ViewState;
pub use view::{RoutineView, ViewParams, build_view, filter_and_sort};
