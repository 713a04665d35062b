//! Application services for the task lifecycle engine.

mod flow;
mod requests;

pub use flow::{ReassignmentOutcome, TaskFlowError, TaskFlowResult, TaskFlowService};
pub use requests::{
    AddCommentRequest, AssignByReferenceRequest, ChangePriorityRequest, CreateTaskItem,
    UpdateTaskItem,
};
