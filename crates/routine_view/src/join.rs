//! Resolve category and tag references to display names.

use std::collections::HashMap;

use routine_client::{Category, Routine, Tag};
use serde::Serialize;

/// A routine with its category and tags resolved to names.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JoinedRoutine {
    pub id: String,
    pub name: String,
    /// Category name, or empty when the reference does not resolve.
    pub category: String,
    /// Tag names joined with `", "`; unresolved ids contribute an empty entry.
    pub tags: String,
    pub sets: i64,
    pub reps: i64,
    pub weights: f64,
    pub notes: String,
    pub date_time: String,
    pub dates: Vec<String>,
}

/// The three collections the view is built from.
///
/// Only constructible with all three present, so the pipeline never sees a
/// half-loaded state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoutineCollections {
    routines: Vec<Routine>,
    categories: Vec<Category>,
    tags: Vec<Tag>,
}

impl RoutineCollections {
    pub fn new(routines: Vec<Routine>, categories: Vec<Category>, tags: Vec<Tag>) -> Self {
        Self {
            routines,
            categories,
            tags,
        }
    }

    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Drop every routine with `routine_id`. Returns whether anything was removed.
    pub fn remove_routine(&mut self, routine_id: &str) -> bool {
        let before = self.routines.len();
        self.routines.retain(|r| r.id != routine_id);
        self.routines.len() != before
    }

    pub fn join(&self) -> Vec<JoinedRoutine> {
        join_routines(&self.routines, &self.categories, &self.tags)
    }
}

/// Join routines against categories and tags by identifier.
///
/// Lookups are keyed maps; on duplicate ids the first record wins, matching a
/// linear first-match search.
pub fn join_routines(
    routines: &[Routine],
    categories: &[Category],
    tags: &[Tag],
) -> Vec<JoinedRoutine> {
    let mut category_names: HashMap<&str, &str> = HashMap::with_capacity(categories.len());
    for c in categories {
        category_names.entry(c.id.as_str()).or_insert(c.name.as_str());
    }
    let mut tag_names: HashMap<&str, &str> = HashMap::with_capacity(tags.len());
    for t in tags {
        tag_names.entry(t.id.as_str()).or_insert(t.name.as_str());
    }

    routines
        .iter()
        .map(|r| {
            let category = r
                .category_id
                .as_deref()
                .and_then(|id| category_names.get(id).copied())
                .unwrap_or_default()
                .to_string();
            let tags = r
                .tag_ids
                .iter()
                .map(|id| tag_names.get(id.as_str()).copied().unwrap_or_default())
                .collect::<Vec<_>>()
                .join(", ");
            JoinedRoutine {
                id: r.id.clone(),
                name: r.name.clone(),
                category,
                tags,
                sets: r.sets,
                reps: r.reps,
                weights: r.weights,
                notes: r.notes.clone(),
                date_time: r.date_time.clone(),
                dates: r.dates.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{category, routine, tag};

    #[test]
    fn resolves_category_and_tags() {
        let routines = vec![routine("1", "Squat", Some("c1"), &["t1", "t2"])];
        let joined = join_routines(
            &routines,
            &[category("c1", "Legs")],
            &[tag("t1", "Strength"), tag("t2", "Compound")],
        );
        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].category, "Legs");
        assert_eq!(joined[0].tags, "Strength, Compound");
        assert_eq!(joined[0].name, "Squat");
    }

    #[test]
    fn unresolved_references_become_empty() {
        let routines = vec![
            routine("1", "Squat", Some("missing"), &[]),
            routine("2", "Row", None, &["t1", "nope"]),
        ];
        let joined = join_routines(&routines, &[], &[tag("t1", "Strength")]);
        assert_eq!(joined[0].category, "");
        assert_eq!(joined[0].tags, "");
        assert_eq!(joined[1].category, "");
        assert_eq!(joined[1].tags, "Strength, ");
    }

    #[test]
    fn first_duplicate_id_wins() {
        let routines = vec![routine("1", "Squat", Some("c1"), &[])];
        let joined = join_routines(
            &routines,
            &[category("c1", "Legs"), category("c1", "Other")],
            &[],
        );
        assert_eq!(joined[0].category, "Legs");
    }

    #[test]
    fn join_is_deterministic() {
        let routines = vec![
            routine("1", "Squat", Some("c1"), &["t1"]),
            routine("2", "Bench", Some("c2"), &["t1"]),
        ];
        let cats = [category("c1", "Legs"), category("c2", "Chest")];
        let tags = [tag("t1", "Strength")];
        assert_eq!(
            join_routines(&routines, &cats, &tags),
            join_routines(&routines, &cats, &tags)
        );
    }

    #[test]
    fn remove_routine_reports_change() {
        let mut c = RoutineCollections::new(
            vec![routine("1", "Squat", None, &[]), routine("2", "Row", None, &[])],
            vec![],
            vec![],
        );
        assert!(c.remove_routine("1"));
        assert!(!c.remove_routine("1"));
        assert_eq!(c.routines().len(), 1);
        assert_eq!(c.join()[0].id, "2");
    }
}
