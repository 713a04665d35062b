//! Domain model for the task lifecycle engine.
//!
//! The task domain models assigned work against external references:
//! record creation, status and priority mutation, audit trail upkeep, and
//! the reassignment successor rules, all without infrastructure concerns.

mod audit;
mod error;
mod ids;
mod kind;
mod reference;
mod status;
mod task;

pub use audit::{Activity, Comment};
pub use error::{
    ParsePriorityError, ParseReferenceTypeError, ParseTaskKindError, ParseTaskStatusError,
};
pub use ids::{AssigneeId, ReferenceId, TaskId};
pub use kind::TaskKind;
pub use reference::{ReferenceKey, ReferenceType};
pub use status::{Priority, TaskStatus};
pub use task::{
    NEW_TASK_DESCRIPTION, REASSIGNED_DESCRIPTION_PREFIX, REASSIGNMENT_CANCELLED_DESCRIPTION,
    TaskRecord,
};
