//! Task record aggregate and its mutation rules.

use super::audit::sort_chronological;
use super::{
    Activity, AssigneeId, Comment, Priority, ReferenceKey, TaskId, TaskKind, TaskStatus,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Description given to every freshly created task record.
pub const NEW_TASK_DESCRIPTION: &str = "New task created.";

/// Description stamped onto records cancelled by reassignment.
pub const REASSIGNMENT_CANCELLED_DESCRIPTION: &str = "Task auto-cancelled due to reassignment";

/// Prefix applied to a reassignment successor's description, followed by
/// the source record's description at the time of reassignment.
pub const REASSIGNED_DESCRIPTION_PREFIX: &str = "Reassigned: ";

/// One unit of assigned work tied to an external reference.
///
/// Records are never deleted: cancellation is a terminal status, not
/// removal, so the full history of a reference key stays inspectable.
/// Every mutation appends to the activity history and restores the audit
/// trail's chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    id: TaskId,
    reference: ReferenceKey,
    kind: TaskKind,
    assignee_id: AssigneeId,
    status: TaskStatus,
    priority: Priority,
    deadline: DateTime<Utc>,
    description: String,
    activity_history: Vec<Activity>,
    comments: Vec<Comment>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Creates a newly assigned task record with empty audit trails.
    #[must_use]
    pub fn new(
        reference: ReferenceKey,
        kind: TaskKind,
        assignee_id: AssigneeId,
        priority: Priority,
        deadline: DateTime<Utc>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            reference,
            kind,
            assignee_id,
            status: TaskStatus::Assigned,
            priority,
            deadline,
            description: NEW_TASK_DESCRIPTION.to_owned(),
            activity_history: Vec::new(),
            comments: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Creates the successor record for a reassignment.
    ///
    /// Copies the reference key, kind, and priority from the source record;
    /// the deadline comes from `deadline` when given, otherwise it is
    /// inherited from the source. The description preserves the source's
    /// description under [`REASSIGNED_DESCRIPTION_PREFIX`], and a single
    /// activity entry records the new assignment.
    #[must_use]
    pub fn reassigned_from(
        source: &Self,
        assignee_id: AssigneeId,
        deadline: Option<DateTime<Utc>>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        let mut successor = Self {
            id: TaskId::new(),
            reference: source.reference,
            kind: source.kind,
            assignee_id,
            status: TaskStatus::Assigned,
            priority: source.priority,
            deadline: deadline.unwrap_or(source.deadline),
            description: format!("{REASSIGNED_DESCRIPTION_PREFIX}{}", source.description),
            activity_history: Vec::new(),
            comments: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        };
        successor.record_activity(
            format!("Task reassigned to assignee {assignee_id}"),
            clock,
        );
        successor
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the reference key this task serves.
    #[must_use]
    pub const fn reference(&self) -> ReferenceKey {
        self.reference
    }

    /// Returns the kind of work.
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        self.kind
    }

    /// Returns the current assignee.
    ///
    /// The assignee is set at construction and never mutated in place;
    /// ownership moves only via reassignment, which cancels this record
    /// and creates a successor.
    #[must_use]
    pub const fn assignee_id(&self) -> AssigneeId {
        self.assignee_id
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Returns the current description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the activity history, in non-decreasing timestamp order.
    #[must_use]
    pub fn activity_history(&self) -> &[Activity] {
        &self.activity_history
    }

    /// Returns the comments, in non-decreasing timestamp order.
    #[must_use]
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` when the record still counts as open work.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Sets the lifecycle status and records the transition.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.record_activity(format!("Status changed to {status}"), clock);
    }

    /// Overwrites the description and records the change.
    pub fn set_description(&mut self, description: impl Into<String>, clock: &impl Clock) {
        self.description = description.into();
        self.record_activity(
            format!("Description changed to {}", self.description),
            clock,
        );
    }

    /// Changes the priority and records the change.
    pub fn change_priority(&mut self, priority: Priority, clock: &impl Clock) {
        self.priority = priority;
        self.record_activity(format!("Priority changed to {priority}"), clock);
    }

    /// Appends a comment and a summarizing activity entry.
    ///
    /// Both the comment log and the activity history are re-sorted, so a
    /// backdated clock slots the new entries into their chronological
    /// position rather than at the tail.
    pub fn add_comment(
        &mut self,
        author: impl Into<String>,
        message: impl Into<String>,
        clock: &impl Clock,
    ) {
        let comment = Comment::new(author, message, clock);
        let summary = format!(
            "Comment added by {}: {}",
            comment.author(),
            comment.message()
        );
        self.comments.push(comment);
        sort_chronological(&mut self.comments, Comment::timestamp);
        self.record_activity(summary, clock);
    }

    /// Cancels this record because ownership of its reference moved.
    ///
    /// Terminal: the record stays in the store as an inspectable artifact
    /// of the previous assignment.
    pub fn cancel_for_reassignment(&mut self, clock: &impl Clock) {
        self.status = TaskStatus::Cancelled;
        self.description = REASSIGNMENT_CANCELLED_DESCRIPTION.to_owned();
        self.record_activity(
            format!("Status changed to {} due to reassignment", self.status),
            clock,
        );
    }

    /// Appends an activity entry and restores chronological order.
    fn record_activity(&mut self, description: String, clock: &impl Clock) {
        self.activity_history.push(Activity::new(description, clock));
        sort_chronological(&mut self.activity_history, Activity::timestamp);
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
