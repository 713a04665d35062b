//! Store port for task record persistence and indexed lookup.

use crate::task::domain::{AssigneeId, ReferenceKey, TaskId, TaskRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task persistence contract.
///
/// The store is keyed by [`TaskId`] with secondary lookup by reference key
/// and by assignee. Implementations must preserve timestamps exactly and
/// must return reference-key lookups in a stable iteration order: the
/// engine's "first open match" selection during reassignment depends on it.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Finds a task record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn get_by_id(&self, id: TaskId) -> TaskStoreResult<Option<TaskRecord>>;

    /// Persists a task record, inserting or replacing by identifier.
    async fn save(&self, task: &TaskRecord) -> TaskStoreResult<()>;

    /// Persists several task records as one atomic write.
    ///
    /// Reassignment cancels every open record under a reference key and
    /// creates a successor; routing all of those writes through a single
    /// call lets implementations apply them under one lock so no reader
    /// observes a half-reassigned reference.
    async fn save_all(&self, tasks: &[TaskRecord]) -> TaskStoreResult<()>;

    /// Returns all records sharing the given reference key, in insertion
    /// order, regardless of status or kind.
    async fn find_by_reference(&self, key: &ReferenceKey) -> TaskStoreResult<Vec<TaskRecord>>;

    /// Returns all records assigned to any of the given assignees.
    async fn find_by_assignees(&self, assignees: &[AssigneeId]) -> TaskStoreResult<Vec<TaskRecord>>;

    /// Returns every stored record, in insertion order.
    async fn find_all(&self) -> TaskStoreResult<Vec<TaskRecord>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
