//! Shared fixtures for task engine tests.

use crate::task::{
    adapters::memory::InMemoryTaskStore,
    domain::{AssigneeId, Priority, ReferenceId, ReferenceKey, ReferenceType, TaskKind, TaskRecord},
    services::{CreateTaskItem, TaskFlowService},
};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::{Clock, DefaultClock};
use rstest::fixture;
use std::sync::{Arc, Mutex};

/// Clock that replays a scripted sequence of instants.
///
/// Each reading consumes the next scripted instant; once the script runs
/// out, the last instant repeats. Scripts may go backwards, which is how
/// the backdating tests drive the re-sort invariant.
#[derive(Debug)]
pub struct ScriptedClock {
    script: Mutex<ScriptState>,
}

#[derive(Debug)]
struct ScriptState {
    pending: Vec<DateTime<Utc>>,
    last: DateTime<Utc>,
}

impl ScriptedClock {
    /// Creates a clock replaying the given instants in order.
    pub fn new(instants: impl IntoIterator<Item = DateTime<Utc>>) -> Self {
        let mut pending: Vec<DateTime<Utc>> = instants.into_iter().collect();
        pending.reverse();
        let last = pending.first().copied().unwrap_or_else(|| millis(0));
        Self {
            script: Mutex::new(ScriptState { pending, last }),
        }
    }

    /// Creates a clock pinned to a single instant.
    pub fn fixed(instant: DateTime<Utc>) -> Self {
        Self::new([instant])
    }
}

impl Clock for ScriptedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut state = self.script.lock().expect("clock script lock poisoned");
        if let Some(instant) = state.pending.pop() {
            state.last = instant;
        }
        state.last
    }
}

/// Service wired to an in-memory store, with the store handle kept for
/// direct persistence assertions.
pub struct Harness {
    /// Service under test.
    pub service: TaskFlowService<InMemoryTaskStore, DefaultClock>,
    /// The store behind the service.
    pub store: InMemoryTaskStore,
}

/// Builds a service over a fresh in-memory store and the system clock.
#[fixture]
pub fn harness() -> Harness {
    let store = InMemoryTaskStore::new();
    let service = TaskFlowService::new(Arc::new(store.clone()), Arc::new(DefaultClock));
    Harness { service, store }
}

/// Builds an instant from raw epoch milliseconds.
pub fn millis(value: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(value)
        .single()
        .expect("valid epoch millis")
}

/// Reference key for an order under test.
pub fn order_reference(id: i64) -> ReferenceKey {
    ReferenceKey::new(ReferenceId::new(id), ReferenceType::Order)
}

/// Creation item for an order pickup task.
pub fn pickup_item(reference: ReferenceKey, assignee: i64, deadline: DateTime<Utc>) -> CreateTaskItem {
    CreateTaskItem::new(
        reference,
        TaskKind::ArrangePickup,
        AssigneeId::new(assignee),
        Priority::Medium,
        deadline,
    )
}

/// Creates an assigned order task against the given reference.
pub fn order_task(
    reference: ReferenceKey,
    assignee: i64,
    deadline: DateTime<Utc>,
    clock: &impl Clock,
) -> TaskRecord {
    TaskRecord::new(
        reference,
        TaskKind::ArrangePickup,
        AssigneeId::new(assignee),
        Priority::Medium,
        deadline,
        clock,
    )
}
