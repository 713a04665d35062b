//! Tests for the date-window fetch and its overdue spillover rule.

use super::support::{Harness, harness, millis, order_reference, pickup_item};
use crate::task::{
    domain::{AssigneeId, TaskRecord, TaskStatus},
    services::UpdateTaskItem,
};
use eyre::Result;
use rstest::rstest;

const ASSIGNEES: [AssigneeId; 1] = [AssigneeId::new(5)];

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deadlines_inside_the_window_are_included_inclusively(harness: Harness) -> Result<()> {
    let created = harness
        .service
        .create_tasks(vec![
            pickup_item(order_reference(1), 5, millis(1_000)), // at start
            pickup_item(order_reference(2), 5, millis(1_500)), // inside
            pickup_item(order_reference(3), 5, millis(2_000)), // at end
            pickup_item(order_reference(4), 5, millis(2_001)), // past end
        ])
        .await?;

    let fetched = harness
        .service
        .fetch_tasks_by_date(&ASSIGNEES, millis(1_000), millis(2_000))
        .await?;

    let ids: Vec<_> = fetched.iter().map(TaskRecord::id).collect();
    assert_eq!(ids, vec![created[0].id(), created[1].id(), created[2].id()]);
    Ok(())
}

#[rstest]
#[case::immediately_overdue(999)]
#[case::long_overdue(1)]
#[tokio::test(flavor = "multi_thread")]
async fn overdue_open_work_spills_into_any_window(
    harness: Harness,
    #[case] deadline_ms: i64,
) -> Result<()> {
    harness
        .service
        .create_tasks(vec![pickup_item(order_reference(1), 5, millis(deadline_ms))])
        .await?;

    for window_end in [millis(1_000), millis(50_000)] {
        let fetched = harness
            .service
            .fetch_tasks_by_date(&ASSIGNEES, millis(1_000), window_end)
            .await?;
        assert_eq!(fetched.len(), 1, "overdue open work must always surface");
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn started_overdue_work_also_spills_over(harness: Harness) -> Result<()> {
    let created = harness
        .service
        .create_tasks(vec![pickup_item(order_reference(1), 5, millis(500))])
        .await?;
    harness
        .service
        .update_tasks(vec![
            UpdateTaskItem::new(created[0].id()).with_status(TaskStatus::Started),
        ])
        .await?;

    let fetched = harness
        .service
        .fetch_tasks_by_date(&ASSIGNEES, millis(1_000), millis(2_000))
        .await?;
    assert_eq!(fetched.len(), 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cancelled_records_never_appear(harness: Harness) -> Result<()> {
    let created = harness
        .service
        .create_tasks(vec![pickup_item(order_reference(1), 5, millis(1_500))])
        .await?;
    harness
        .service
        .update_tasks(vec![
            UpdateTaskItem::new(created[0].id()).with_status(TaskStatus::Cancelled),
        ])
        .await?;

    let fetched = harness
        .service
        .fetch_tasks_by_date(&ASSIGNEES, millis(1_000), millis(2_000))
        .await?;
    assert!(fetched.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_work_counts_inside_the_window_but_not_before_it(harness: Harness) -> Result<()> {
    let created = harness
        .service
        .create_tasks(vec![
            pickup_item(order_reference(1), 5, millis(1_500)), // inside window
            pickup_item(order_reference(2), 5, millis(500)),   // before window
        ])
        .await?;
    harness
        .service
        .update_tasks(vec![
            UpdateTaskItem::new(created[0].id()).with_status(TaskStatus::Completed),
            UpdateTaskItem::new(created[1].id()).with_status(TaskStatus::Completed),
        ])
        .await?;

    let fetched = harness
        .service
        .fetch_tasks_by_date(&ASSIGNEES, millis(1_000), millis(2_000))
        .await?;

    // Completed-in-window is reported; completed-before-window is not
    // spillover, since the work is no longer open.
    let ids: Vec<_> = fetched.iter().map(TaskRecord::id).collect();
    assert_eq!(ids, vec![created[0].id()]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn only_the_requested_assignees_are_considered(harness: Harness) -> Result<()> {
    harness
        .service
        .create_tasks(vec![
            pickup_item(order_reference(1), 5, millis(1_500)),
            pickup_item(order_reference(2), 6, millis(1_500)),
        ])
        .await?;

    let fetched = harness
        .service
        .fetch_tasks_by_date(&ASSIGNEES, millis(1_000), millis(2_000))
        .await?;

    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].assignee_id(), AssigneeId::new(5));
    Ok(())
}
