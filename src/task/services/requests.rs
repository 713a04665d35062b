//! Parameter objects for the task flow service operations.

use crate::task::domain::{AssigneeId, Priority, ReferenceKey, TaskId, TaskKind, TaskStatus};
use chrono::{DateTime, Utc};

/// One task to create in a [`create_tasks`] batch.
///
/// [`create_tasks`]: super::TaskFlowService::create_tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateTaskItem {
    /// External entity the task serves.
    pub reference: ReferenceKey,
    /// Kind of work.
    pub kind: TaskKind,
    /// Operator the work is assigned to.
    pub assignee_id: AssigneeId,
    /// Initial priority.
    pub priority: Priority,
    /// Deadline for the work.
    pub deadline: DateTime<Utc>,
}

impl CreateTaskItem {
    /// Creates a fully specified creation item.
    #[must_use]
    pub const fn new(
        reference: ReferenceKey,
        kind: TaskKind,
        assignee_id: AssigneeId,
        priority: Priority,
        deadline: DateTime<Utc>,
    ) -> Self {
        Self {
            reference,
            kind,
            assignee_id,
            priority,
            deadline,
        }
    }
}

/// One task mutation in an [`update_tasks`] batch.
///
/// Either field, both, or neither may be present; an item with neither is
/// a legal no-op that persists the record unchanged.
///
/// [`update_tasks`]: super::TaskFlowService::update_tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskItem {
    /// Record to update.
    pub task_id: TaskId,
    /// New lifecycle status, if any.
    pub status: Option<TaskStatus>,
    /// New description, if any.
    pub description: Option<String>,
}

impl UpdateTaskItem {
    /// Creates a no-op update item for the given record.
    #[must_use]
    pub const fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            status: None,
            description: None,
        }
    }

    /// Sets the status to apply.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the description to apply.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request to move ownership of a reference's work to a new assignee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignByReferenceRequest {
    /// Reference key whose open work moves.
    pub reference: ReferenceKey,
    /// Operator taking over the work.
    pub assignee_id: AssigneeId,
    /// Deadline for the successor task; inherited from the source task
    /// when absent.
    pub deadline: Option<DateTime<Utc>>,
}

impl AssignByReferenceRequest {
    /// Creates a reassignment request inheriting the source deadline.
    #[must_use]
    pub const fn new(reference: ReferenceKey, assignee_id: AssigneeId) -> Self {
        Self {
            reference,
            assignee_id,
            deadline: None,
        }
    }

    /// Sets an explicit deadline for the successor task.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Request to change a record's priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangePriorityRequest {
    /// Record to change.
    pub task_id: TaskId,
    /// Priority to apply.
    pub priority: Priority,
}

impl ChangePriorityRequest {
    /// Creates a priority change request.
    #[must_use]
    pub const fn new(task_id: TaskId, priority: Priority) -> Self {
        Self { task_id, priority }
    }
}

/// Request to add a comment to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommentRequest {
    /// Comment author.
    pub author: String,
    /// Comment text.
    pub message: String,
}

impl AddCommentRequest {
    /// Creates a comment request.
    #[must_use]
    pub fn new(author: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            message: message.into(),
        }
    }
}
