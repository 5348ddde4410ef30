//! Fixtures and a scripted `RoutineClient` used by unit tests.
#![cfg(test)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use routine_client::{Category, Routine, RoutineApiError, RoutineClient, Tag};

use crate::join::JoinedRoutine;

pub fn routine(id: &str, name: &str, category_id: Option<&str>, tag_ids: &[&str]) -> Routine {
    Routine {
        id: id.into(),
        name: name.into(),
        category_id: category_id.map(Into::into),
        tag_ids: tag_ids.iter().map(|t| t.to_string()).collect(),
        sets: 3,
        reps: 10,
        weights: 50.0,
        notes: String::new(),
        date_time: "2024-01-01T10:00:00Z".into(),
        dates: Vec::new(),
    }
}

pub fn category(id: &str, name: &str) -> Category {
    Category {
        id: id.into(),
        name: name.into(),
    }
}

pub fn tag(id: &str, name: &str) -> Tag {
    Tag {
        id: id.into(),
        name: name.into(),
    }
}

pub fn joined(id: &str, name: &str) -> JoinedRoutine {
    JoinedRoutine {
        id: id.into(),
        name: name.into(),
        category: String::new(),
        tags: String::new(),
        sets: 3,
        reps: 10,
        weights: 50.0,
        notes: String::new(),
        date_time: "2024-01-01T10:00:00Z".into(),
        dates: Vec::new(),
    }
}

/// Serves fixed collections; individual endpoints can be made to fail.
#[derive(Default)]
pub struct MockClient {
    pub routines: Vec<Routine>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub fail_tags: bool,
    pub fail_delete: bool,
    pub deleted: Mutex<Vec<String>>,
    pub calls: AtomicUsize,
}

impl MockClient {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoutineClient for MockClient {
    async fn list_routines(&self) -> Result<Vec<Routine>, RoutineApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.routines.clone())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RoutineApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.categories.clone())
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, RoutineApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_tags {
            return Err(RoutineApiError::from_status(500, "tags down".into()));
        }
        Ok(self.tags.clone())
    }

    async fn delete_routine(&self, routine_id: &str) -> Result<(), RoutineApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete {
            return Err(RoutineApiError::from_status(404, "Routine not found".into()));
        }
        self.deleted.lock().unwrap().push(routine_id.to_string());
        Ok(())
    }
}
