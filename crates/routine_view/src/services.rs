//! Loading and deleting routines through a [`RoutineClient`].
//!
//! Every call bumps a `metrics` counter (`routine_view_fetch_total`,
//! `routine_view_delete_total` and their `_failures_total` twins) on whatever
//! recorder the binary installed.

use std::sync::Arc;

use routine_client::RoutineClient;

use crate::error::{ViewError, ViewResult};
use crate::join::RoutineCollections;

/// Loads the routine collections and applies deletions through a [`RoutineClient`].
#[derive(Clone)]
pub struct RoutineService {
    client: Arc<dyn RoutineClient>,
}

impl RoutineService {
    pub fn new(client: Arc<dyn RoutineClient>) -> Self {
        Self { client }
    }

    /// Fetch routines, categories and tags concurrently.
    ///
    /// Succeeds only when all three requests do; the first failure is
    /// returned as [`ViewError::FetchFailure`] and nothing is kept.
    pub async fn fetch_collections(&self) -> ViewResult<RoutineCollections> {
        metrics::counter!("routine_view_fetch_total").increment(1);
        let fetched = tokio::try_join!(
            self.client.list_routines(),
            self.client.list_categories(),
            self.client.list_tags(),
        );
        match fetched {
            Ok((routines, categories, tags)) => {
                tracing::info!(
                    routines = routines.len(),
                    categories = categories.len(),
                    tags = tags.len(),
                    "routine collections loaded"
                );
                Ok(RoutineCollections::new(routines, categories, tags))
            }
            Err(e) => {
                metrics::counter!("routine_view_fetch_failures_total").increment(1);
                tracing::warn!(error = %e, "failed to load routine collections");
                Err(ViewError::FetchFailure(e))
            }
        }
    }

    /// Delete a routine remotely, then drop it from `collections`.
    ///
    /// On failure `collections` is left exactly as it was.
    pub async fn delete_routine(
        &self,
        collections: &mut RoutineCollections,
        routine_id: &str,
    ) -> ViewResult<()> {
        metrics::counter!("routine_view_delete_total").increment(1);
        if let Err(e) = self.client.delete_routine(routine_id).await {
            metrics::counter!("routine_view_delete_failures_total").increment(1);
            tracing::warn!(routine_id, error = %e, "error deleting routine");
            return Err(ViewError::DeleteFailure {
                id: routine_id.to_string(),
                source: e,
            });
        }
        let removed = collections.remove_routine(routine_id);
        tracing::info!(routine_id, removed, "routine deleted");
        Ok(())
    }
}
