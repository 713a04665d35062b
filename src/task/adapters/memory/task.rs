//! Thread-safe in-memory task store.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{AssigneeId, ReferenceKey, TaskId, TaskRecord},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// In-memory [`TaskStore`] keyed by task identifier.
///
/// Reference-key and assignee lookups are served from secondary indexes
/// that preserve insertion order, so "first open match" selection during
/// reassignment is deterministic: the oldest surviving record wins.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: HashMap<TaskId, TaskRecord>,
    insertion_order: Vec<TaskId>,
    reference_index: HashMap<ReferenceKey, Vec<TaskId>>,
    assignee_index: HashMap<AssigneeId, Vec<TaskId>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Inserts or replaces a record, maintaining the secondary indexes.
///
/// An update keeps the record's position in every index; entries move only
/// when the indexed field itself changed, which the domain does not do for
/// either the reference key or the assignee.
fn upsert(state: &mut InMemoryTaskState, task: &TaskRecord) {
    if let Some(previous) = state.tasks.get(&task.id()) {
        if previous.reference() != task.reference() {
            remove_from_index(&mut state.reference_index, task.id(), &previous.reference());
            state
                .reference_index
                .entry(task.reference())
                .or_default()
                .push(task.id());
        }
        if previous.assignee_id() != task.assignee_id() {
            remove_from_index(&mut state.assignee_index, task.id(), &previous.assignee_id());
            state
                .assignee_index
                .entry(task.assignee_id())
                .or_default()
                .push(task.id());
        }
    } else {
        state.insertion_order.push(task.id());
        state
            .reference_index
            .entry(task.reference())
            .or_default()
            .push(task.id());
        state
            .assignee_index
            .entry(task.assignee_id())
            .or_default()
            .push(task.id());
    }
    state.tasks.insert(task.id(), task.clone());
}

/// Removes a task ID from an index, cleaning up the entry if empty.
fn remove_from_index<K: std::hash::Hash + Eq + Copy>(
    index: &mut HashMap<K, Vec<TaskId>>,
    task_id: TaskId,
    key: &K,
) {
    if let Some(ids) = index.get_mut(key) {
        ids.retain(|id| *id != task_id);
        if ids.is_empty() {
            index.remove(key);
        }
    }
}

/// Resolves an ordered ID list against the primary map.
fn collect_records(state: &InMemoryTaskState, ids: &[TaskId]) -> Vec<TaskRecord> {
    ids.iter()
        .filter_map(|id| state.tasks.get(id).cloned())
        .collect()
}

fn lock_poisoned<T>(err: &std::sync::PoisonError<T>) -> TaskStoreError {
    TaskStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn get_by_id(&self, id: TaskId) -> TaskStoreResult<Option<TaskRecord>> {
        let state = self.state.read().map_err(|err| lock_poisoned(&err))?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn save(&self, task: &TaskRecord) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(|err| lock_poisoned(&err))?;
        upsert(&mut state, task);
        Ok(())
    }

    async fn save_all(&self, tasks: &[TaskRecord]) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(|err| lock_poisoned(&err))?;
        for task in tasks {
            upsert(&mut state, task);
        }
        Ok(())
    }

    async fn find_by_reference(&self, key: &ReferenceKey) -> TaskStoreResult<Vec<TaskRecord>> {
        let state = self.state.read().map_err(|err| lock_poisoned(&err))?;
        let ids = state.reference_index.get(key).cloned().unwrap_or_default();
        Ok(collect_records(&state, &ids))
    }

    async fn find_by_assignees(
        &self,
        assignees: &[AssigneeId],
    ) -> TaskStoreResult<Vec<TaskRecord>> {
        let state = self.state.read().map_err(|err| lock_poisoned(&err))?;
        let mut seen = HashSet::new();
        let mut records = Vec::new();
        for assignee in assignees {
            let Some(ids) = state.assignee_index.get(assignee) else {
                continue;
            };
            for id in ids {
                if seen.insert(*id)
                    && let Some(task) = state.tasks.get(id)
                {
                    records.push(task.clone());
                }
            }
        }
        Ok(records)
    }

    async fn find_all(&self) -> TaskStoreResult<Vec<TaskRecord>> {
        let state = self.state.read().map_err(|err| lock_poisoned(&err))?;
        Ok(collect_records(&state, &state.insertion_order))
    }
}
