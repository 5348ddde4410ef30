//! Series for the progress charts, computed from the filtered rows.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use routine_client::utils::parse_date_time;
use serde::Serialize;

use crate::join::JoinedRoutine;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesPoint<T> {
    pub date: DateTime<Utc>,
    pub value: T,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub weight: Vec<SeriesPoint<f64>>,
    pub frequency: Vec<DayCount>,
    pub history: Vec<SeriesPoint<i64>>,
}

impl ChartData {
    pub fn from_routines(rows: &[JoinedRoutine]) -> Self {
        Self {
            weight: weight_series(rows),
            frequency: frequency_by_day(rows),
            history: history_series(rows),
        }
    }
}

fn timestamp(routine: &JoinedRoutine) -> Option<DateTime<Utc>> {
    let parsed = parse_date_time(&routine.date_time);
    if parsed.is_none() {
        tracing::debug!(routine_id = %routine.id, "skipping routine with unparsable dateTime");
    }
    parsed
}

fn series<T>(rows: &[JoinedRoutine], value: impl Fn(&JoinedRoutine) -> T) -> Vec<SeriesPoint<T>> {
    rows.iter()
        .filter_map(|r| {
            timestamp(r).map(|date| SeriesPoint {
                date,
                value: value(r),
            })
        })
        .collect()
}

/// Lifted weight per routine.
pub fn weight_series(rows: &[JoinedRoutine]) -> Vec<SeriesPoint<f64>> {
    series(rows, |r| r.weights)
}

/// Sets per routine.
pub fn history_series(rows: &[JoinedRoutine]) -> Vec<SeriesPoint<i64>> {
    series(rows, |r| r.sets)
}

/// Routines per UTC calendar day, in order of first appearance.
pub fn frequency_by_day(rows: &[JoinedRoutine]) -> Vec<DayCount> {
    let mut out: Vec<DayCount> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    for date in rows.iter().filter_map(timestamp).map(|dt| dt.date_naive()) {
        match index.get(&date) {
            Some(&i) => out[i].count += 1,
            None => {
                index.insert(date, out.len());
                out.push(DayCount { date, count: 1 });
            }
        }
    }
    out
}
