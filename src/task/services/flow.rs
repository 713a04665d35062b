//! The task flow service: the lifecycle and reassignment engine.

use super::{
    AddCommentRequest, AssignByReferenceRequest, ChangePriorityRequest, CreateTaskItem,
    UpdateTaskItem,
};
use crate::task::{
    domain::{AssigneeId, Priority, ReferenceKey, TaskId, TaskRecord, TaskStatus},
    ports::{TaskStore, TaskStoreError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task flow operations.
#[derive(Debug, Error)]
pub enum TaskFlowError {
    /// The referenced task record does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Reassignment found no open record under the reference key; a task
    /// must be created before ownership can move.
    #[error("no open task for reference {0}")]
    NoOpenTask(ReferenceKey),

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task flow operations.
pub type TaskFlowResult<T> = Result<T, TaskFlowError>;

/// Result of a reassignment: the successor record plus the records the
/// operation cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignmentOutcome {
    successor: TaskRecord,
    cancelled: Vec<TaskId>,
}

impl ReassignmentOutcome {
    /// Returns the newly created successor record.
    #[must_use]
    pub const fn successor(&self) -> &TaskRecord {
        &self.successor
    }

    /// Returns the identifiers of the records cancelled by the
    /// reassignment, in store iteration order.
    #[must_use]
    pub fn cancelled(&self) -> &[TaskId] {
        &self.cancelled
    }

    /// Returns a human-readable confirmation of the reassignment.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Tasks assigned successfully to assignee {} for reference {}",
            self.successor.assignee_id(),
            self.successor.reference().reference_id
        )
    }
}

/// Task lifecycle orchestration service.
///
/// Hosts the engine's public contract: creation, batch update,
/// reassignment-by-reference, date-windowed fetch, priority query and
/// change, commentary, and the pass-through reads. All persistence goes
/// through the injected [`TaskStore`]; all timestamps come from the
/// injected [`Clock`].
#[derive(Clone)]
pub struct TaskFlowService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
}

impl<S, C> TaskFlowService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new task flow service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self { store, clock }
    }

    /// Creates one record per item, each assigned with a defaulted
    /// description and empty audit trails, and returns them in input order.
    ///
    /// Unknown reference ids are accepted: tasks may precede the entity
    /// they serve in the upstream system.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFlowError::Store`] when persistence fails.
    pub async fn create_tasks(
        &self,
        items: Vec<CreateTaskItem>,
    ) -> TaskFlowResult<Vec<TaskRecord>> {
        let mut created = Vec::with_capacity(items.len());
        for item in items {
            let task = TaskRecord::new(
                item.reference,
                item.kind,
                item.assignee_id,
                item.priority,
                item.deadline,
                &*self.clock,
            );
            self.store.save(&task).await?;
            created.push(task);
        }
        Ok(created)
    }

    /// Applies a batch of status/description updates, all-or-nothing.
    ///
    /// Every target record is loaded before any write, so one missing id
    /// fails the whole batch with nothing applied. The mutated records are
    /// then persisted through a single atomic store write and returned in
    /// input order. Items carrying neither field persist their record
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFlowError::NotFound`] for the first missing id, or
    /// [`TaskFlowError::Store`] when persistence fails.
    pub async fn update_tasks(
        &self,
        items: Vec<UpdateTaskItem>,
    ) -> TaskFlowResult<Vec<TaskRecord>> {
        let mut updated = Vec::with_capacity(items.len());
        for item in &items {
            updated.push(self.require_task(item.task_id).await?);
        }
        for (task, item) in updated.iter_mut().zip(&items) {
            if let Some(status) = item.status {
                task.set_status(status, &*self.clock);
            }
            if let Some(description) = &item.description {
                task.set_description(description.clone(), &*self.clock);
            }
        }
        self.store.save_all(&updated).await?;
        Ok(updated)
    }

    /// Moves ownership of a reference's open work to a new assignee.
    ///
    /// Loads every record under the reference key and takes the first open
    /// one, in store iteration order, as the source. Every open record is
    /// cancelled (a reference may have accumulated several open records;
    /// reassignment normalizes back to exactly one), and a successor is
    /// created from the source for the new assignee. Cancellations and the
    /// successor are persisted as one atomic store write, so no reader
    /// observes a half-reassigned reference.
    ///
    /// Reassignment never rewrites an existing record's assignee: the
    /// source stays in the store, cancelled, as a permanent artifact of
    /// the previous assignment.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFlowError::NoOpenTask`] when the reference has no
    /// open record (nothing was mutated; create a task first), or
    /// [`TaskFlowError::Store`] when persistence fails.
    pub async fn assign_by_reference(
        &self,
        request: AssignByReferenceRequest,
    ) -> TaskFlowResult<ReassignmentOutcome> {
        let existing = self.store.find_by_reference(&request.reference).await?;
        let Some(source) = existing.iter().find(|task| task.is_open()).cloned() else {
            return Err(TaskFlowError::NoOpenTask(request.reference));
        };

        let successor = TaskRecord::reassigned_from(
            &source,
            request.assignee_id,
            request.deadline,
            &*self.clock,
        );

        let mut cancelled = Vec::new();
        let mut writes = Vec::new();
        for mut task in existing {
            if task.is_open() {
                task.cancel_for_reassignment(&*self.clock);
                cancelled.push(task.id());
                writes.push(task);
            }
        }
        writes.push(successor.clone());
        self.store.save_all(&writes).await?;

        Ok(ReassignmentOutcome {
            successor,
            cancelled,
        })
    }

    /// Returns the given assignees' tasks for an inclusive deadline
    /// window, plus overdue spillover.
    ///
    /// A record is included when it is not cancelled and either its
    /// deadline falls within `[start, end]` or it is overdue relative to
    /// `start` and not yet completed. The spillover clause keeps overdue
    /// open work visible no matter how the window is positioned.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFlowError::Store`] when the lookup fails.
    pub async fn fetch_tasks_by_date(
        &self,
        assignees: &[AssigneeId],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> TaskFlowResult<Vec<TaskRecord>> {
        let tasks = self.store.find_by_assignees(assignees).await?;
        Ok(tasks
            .into_iter()
            .filter(|task| selected_for_window(task, start, end))
            .collect())
    }

    /// Returns every record with the given priority, regardless of status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFlowError::Store`] when the lookup fails.
    pub async fn tasks_by_priority(&self, priority: Priority) -> TaskFlowResult<Vec<TaskRecord>> {
        let tasks = self.store.find_all().await?;
        Ok(tasks
            .into_iter()
            .filter(|task| task.priority() == priority)
            .collect())
    }

    /// Changes a record's priority and records the change in its activity
    /// history.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFlowError::NotFound`] when the record does not exist,
    /// or [`TaskFlowError::Store`] when persistence fails.
    pub async fn change_task_priority(
        &self,
        request: ChangePriorityRequest,
    ) -> TaskFlowResult<TaskRecord> {
        let mut task = self.require_task(request.task_id).await?;
        task.change_priority(request.priority, &*self.clock);
        self.store.save(&task).await?;
        Ok(task)
    }

    /// Adds a comment to a record, with a summarizing activity entry.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFlowError::NotFound`] when the record does not exist,
    /// or [`TaskFlowError::Store`] when persistence fails.
    pub async fn add_comment(
        &self,
        task_id: TaskId,
        request: AddCommentRequest,
    ) -> TaskFlowResult<TaskRecord> {
        let mut task = self.require_task(task_id).await?;
        task.add_comment(request.author, request.message, &*self.clock);
        self.store.save(&task).await?;
        Ok(task)
    }

    /// Returns a record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFlowError::NotFound`] when the record does not exist,
    /// or [`TaskFlowError::Store`] when the lookup fails.
    pub async fn task_by_id(&self, id: TaskId) -> TaskFlowResult<TaskRecord> {
        self.require_task(id).await
    }

    /// Returns every stored record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskFlowError::Store`] when the lookup fails.
    pub async fn all_tasks(&self) -> TaskFlowResult<Vec<TaskRecord>> {
        Ok(self.store.find_all().await?)
    }

    /// Loads a record or fails with [`TaskFlowError::NotFound`].
    async fn require_task(&self, id: TaskId) -> TaskFlowResult<TaskRecord> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or(TaskFlowError::NotFound(id))
    }
}

/// Date-window filter with overdue spillover.
fn selected_for_window(task: &TaskRecord, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    if task.status() == TaskStatus::Cancelled {
        return false;
    }
    let within_window = task.deadline() >= start && task.deadline() <= end;
    let overdue_open = task.deadline() < start && task.status() != TaskStatus::Completed;
    within_window || overdue_open
}
