//! Dashboard view state: task grouping, CRM lists, and display limits.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::api::DashboardSnapshot;
use crate::net::types::{Contact, Deal, Task, TaskStatus};

/// How many contacts/deals each CRM list shows. Truncation happens at
/// render time; the state keeps the full sequences.
pub const DISPLAY_LIMIT: usize = 6;

/// Tasks partitioned into the three kanban buckets.
///
/// Invariant: every task from a load lands in exactly one bucket, in fetch
/// order. Unknown statuses default into `todo` rather than being dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupedTasks {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl GroupedTasks {
    /// Partition a fetched task list into buckets.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut grouped = Self::default();
        for task in tasks {
            match task.status {
                TaskStatus::InProgress => grouped.in_progress.push(task),
                TaskStatus::Done => grouped.done.push(task),
                TaskStatus::Todo | TaskStatus::Other(_) => grouped.todo.push(task),
            }
        }
        grouped
    }

    /// Tasks not yet done: the to-do and in-progress buckets combined.
    pub fn open_count(&self) -> usize {
        self.todo.len() + self.in_progress.len()
    }

    /// Tasks in the done bucket.
    pub fn done_count(&self) -> usize {
        self.done.len()
    }
}

/// Everything the dashboard page renders from, replaced atomically on each
/// successful load. `Default` is the all-empty pre-load state, which is also
/// what remains visible when a load fails.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub tasks: GroupedTasks,
    pub contacts: Vec<Contact>,
    pub deals: Vec<Deal>,
}

impl DashboardState {
    /// Apply the outcome of a finished load.
    ///
    /// All-or-nothing: a successful snapshot replaces the state wholesale,
    /// a failure leaves it untouched (the initial empty state stays
    /// visible). When `cancelled` is set the result is dropped entirely,
    /// so an unmounted page never writes state.
    pub fn commit_load<E>(&mut self, result: Result<DashboardSnapshot, E>, cancelled: bool) {
        if cancelled {
            return;
        }
        if let Ok(snapshot) = result {
            *self = Self::from(snapshot);
        }
    }
}

impl From<DashboardSnapshot> for DashboardState {
    fn from(snapshot: DashboardSnapshot) -> Self {
        Self {
            tasks: GroupedTasks::from_tasks(snapshot.tasks),
            contacts: snapshot.contacts,
            deals: snapshot.deals,
        }
    }
}

/// The leading slice of `items` the CRM lists actually render.
///
/// Identity for sequences of at most [`DISPLAY_LIMIT`] items, otherwise the
/// first [`DISPLAY_LIMIT`] in received order.
pub fn display_window<T>(items: &[T]) -> &[T] {
    &items[..items.len().min(DISPLAY_LIMIT)]
}
