//! Command-line surface of the `routine_view` binary.
//!
//! Argument types, the mapping from flags to a [`ViewState`], the JSON shape
//! printed by `list` and the log filter lookup live here so `main` only wires
//! them to the network.

use clap::{Args, Parser, Subcommand};
use routine_client::utils::format_date_time;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::column::{Column, FilterColumn};
use crate::error::ViewResult;
use crate::sort::{SortOrder, SortSpec};
use crate::state::{ViewState, last_page, page_numbers};
use crate::view::{DEFAULT_PAGE_SIZE, RoutineView};

/// Env var consulted before `RUST_LOG`.
pub const LOG_LEVEL_ENV: &str = "ROUTINE_VIEW_LOG_LEVEL";

#[derive(Debug, Parser)]
#[command(name = "routine_view", version, about = "List, chart and delete workout routines")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one page of the routine table as JSON.
    List(ListArgs),
    /// Print weight, frequency and history series for the matching routines.
    Charts(ChartsArgs),
    /// Delete a routine by id.
    Delete { id: String },
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(long, default_value = "")]
    pub search: String,
    /// `all` or one of: name, category, tags, sets, reps, weights, notes, dateTime
    #[arg(long, default_value = "all")]
    pub filter: FilterColumn,
}

#[derive(Debug, Args)]
pub struct SortArgs {
    #[arg(long)]
    pub sort: Option<Column>,
    /// Ignored without `--sort`.
    #[arg(long, default_value = "asc")]
    pub order: SortOrder,
}

impl SortArgs {
    pub fn spec(&self) -> Option<SortSpec> {
        self.sort.map(|column| SortSpec::new(column, self.order))
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub search: SearchArgs,
    #[command(flatten)]
    pub sort: SortArgs,
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: usize,
}

impl ListArgs {
    /// Table state after typing the search, picking the filter, clicking the
    /// sort header (twice for descending) and jumping to the page.
    pub fn view_state(&self) -> ViewResult<ViewState> {
        let mut state = ViewState::with_page_size(self.page_size)?;
        state.set_search_term(self.search.search.clone());
        state.set_filter_column(self.search.filter);
        if let Some(column) = self.sort.sort {
            state.toggle_sort(column);
            if self.sort.order == SortOrder::Desc {
                state.toggle_sort(column);
            }
        }
        state.go_to_page(self.page)?;
        Ok(state)
    }
}

#[derive(Debug, Args)]
pub struct ChartsArgs {
    #[command(flatten)]
    pub search: SearchArgs,
    #[command(flatten)]
    pub sort: SortArgs,
}

/// JSON printed by `list`: the view plus `dateTimeDisplay` on every row and
/// the `pageNumbers` / `lastPage` page controls.
pub fn list_output(view: &RoutineView) -> serde_json::Result<Value> {
    let mut out = serde_json::to_value(view)?;
    if let Some(items) = out.get_mut("pageItems").and_then(Value::as_array_mut) {
        for item in items.iter_mut().filter_map(Value::as_object_mut) {
            let display = item
                .get("dateTime")
                .and_then(Value::as_str)
                .map(format_date_time);
            if let Some(display) = display {
                item.insert("dateTimeDisplay".into(), display.into());
            }
        }
    }
    if let Some(obj) = out.as_object_mut() {
        let pages: Vec<usize> = page_numbers(view.total_pages).collect();
        obj.insert("pageNumbers".into(), serde_json::to_value(pages)?);
        obj.insert("lastPage".into(), last_page(view.total_pages).into());
    }
    Ok(out)
}

/// `ROUTINE_VIEW_LOG_LEVEL`, then `RUST_LOG`, default `info`.
pub fn log_filter_with<F>(mut get: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    get(LOG_LEVEL_ENV)
        .or_else(|| get("RUST_LOG"))
        .unwrap_or_else(|| "info".to_string())
}

pub fn log_filter() -> String {
    log_filter_with(|key| std::env::var(key).ok())
}

/// Parsed `log_env`, or plain `info` when it is not a valid directive list.
pub fn env_filter(log_env: &str) -> EnvFilter {
    EnvFilter::try_new(log_env).unwrap_or_else(|_| EnvFilter::new("info"))
}
