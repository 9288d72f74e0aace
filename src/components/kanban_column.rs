//! One kanban bucket: header with count, then a card per task.

use leptos::prelude::*;

use super::Accent;
use crate::net::types::{Priority, Task};
use crate::util::format::date_only;

/// A kanban column for one task bucket.
#[component]
pub fn KanbanColumn(
    title: &'static str,
    tasks: Vec<Task>,
    #[prop(default = Accent::Blue)] accent: Accent,
) -> impl IntoView {
    let column_class = format!("kanban-column kanban-column--{}", accent.modifier());
    let dot_class = format!("kanban-column__dot kanban-column__dot--{}", accent.modifier());
    let count = tasks.len();

    view! {
        <div class=column_class>
            <div class="kanban-column__header">
                <span class="kanban-column__label">
                    <span class=dot_class></span>
                    {title}
                </span>
                <span class="kanban-column__count">{count}</span>
            </div>
            <div class="kanban-column__cards">
                {tasks.into_iter().map(task_card).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

fn task_card(task: Task) -> impl IntoView {
    let badge_class = format!("task-card__badge task-card__badge--{}", badge_modifier(&task.priority));
    let badge_label = task.priority.label().to_owned();
    let due = task.due_date.map(|d| format!("Due {}", date_only(&d)));

    view! {
        <div class="task-card">
            <div class="task-card__title">{task.title}</div>
            {task.description.map(|text| view! { <div class="task-card__description">{text}</div> })}
            <div class="task-card__meta">
                <span class=badge_class>{badge_label}</span>
                {due.map(|label| view! { <span class="task-card__due">{label}</span> })}
            </div>
        </div>
    }
}

/// High and low get their own badge styling; everything else renders like
/// medium, as in the source UI.
fn badge_modifier(priority: &Priority) -> &'static str {
    match priority {
        Priority::High => "high",
        Priority::Low => "low",
        Priority::Medium | Priority::Other(_) => "medium",
    }
}
