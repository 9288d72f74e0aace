use super::*;
use std::future::ready;

use futures::executor::block_on;

use crate::net::types::{Priority, TaskStatus};

fn sample_task(id: &str) -> Task {
    Task {
        id: id.to_owned(),
        title: format!("task {id}"),
        description: None,
        status: TaskStatus::Todo,
        priority: Priority::Medium,
        due_date: None,
    }
}

// =============================================================
// ApiError display
// =============================================================

#[test]
fn api_error_messages_name_the_failure() {
    assert_eq!(
        ApiError::Http { status: 502 }.to_string(),
        "request failed with status 502"
    );
    assert_eq!(
        ApiError::Transport("connection refused".to_owned()).to_string(),
        "transport error: connection refused"
    );
    assert_eq!(
        ApiError::Decode("expected a sequence".to_owned()).to_string(),
        "malformed response body: expected a sequence"
    );
}

// =============================================================
// DashboardSnapshot defaults
// =============================================================

#[test]
fn snapshot_default_is_empty() {
    let snapshot = DashboardSnapshot::default();
    assert!(snapshot.tasks.is_empty());
    assert!(snapshot.contacts.is_empty());
    assert!(snapshot.deals.is_empty());
}

// =============================================================
// Fail-fast join
// =============================================================

#[test]
fn join_produces_a_snapshot_only_when_all_three_succeed() {
    let snapshot = block_on(join_dashboard(
        ready(Ok::<_, ApiError>(vec![sample_task("t-1")])),
        ready(Ok::<Vec<Contact>, ApiError>(Vec::new())),
        ready(Ok::<Vec<Deal>, ApiError>(Vec::new())),
    ))
    .expect("snapshot");
    assert_eq!(snapshot.tasks.len(), 1);
    assert_eq!(snapshot.tasks[0].id, "t-1");
    assert!(snapshot.contacts.is_empty());
    assert!(snapshot.deals.is_empty());
}

#[test]
fn one_failing_resource_fails_the_whole_join() {
    // Contacts fail while tasks and deals succeed: the load is
    // all-or-nothing, so the successful resources are discarded too.
    let result = block_on(join_dashboard(
        ready(Ok::<_, ApiError>(vec![sample_task("t-1")])),
        ready(Err::<Vec<Contact>, _>(ApiError::Http { status: 503 })),
        ready(Ok::<Vec<Deal>, ApiError>(Vec::new())),
    ));
    assert!(matches!(result, Err(ApiError::Http { status: 503 })));
}

#[test]
fn join_reports_decode_failures_from_any_resource() {
    let result = block_on(join_dashboard(
        ready(Ok::<Vec<Task>, ApiError>(Vec::new())),
        ready(Ok::<Vec<Contact>, ApiError>(Vec::new())),
        ready(Err::<Vec<Deal>, _>(ApiError::Decode(
            "expected a sequence".to_owned(),
        ))),
    ));
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

// =============================================================
// Native stubs (non-csr builds)
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn native_fetchers_report_transport_errors() {
    assert!(matches!(
        block_on(fetch_tasks("")),
        Err(ApiError::Transport(_))
    ));
    assert!(matches!(
        block_on(fetch_contacts("")),
        Err(ApiError::Transport(_))
    ));
    assert!(matches!(
        block_on(fetch_deals("")),
        Err(ApiError::Transport(_))
    ));
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_dashboard_fetch_fails_as_a_whole() {
    assert!(matches!(
        block_on(fetch_dashboard("")),
        Err(ApiError::Transport(_))
    ));
}
