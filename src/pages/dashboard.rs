//! Dashboard page: one fetch on mount, then stats, kanban board, and CRM
//! lists rendered from the shared state signal.

use leptos::prelude::*;

use crate::components::Accent;
use crate::components::crm_list::{CrmList, CrmRow};
use crate::components::kanban_column::KanbanColumn;
use crate::components::stat_card::StatCard;
use crate::components::topbar::Topbar;
use crate::state::dashboard::{DashboardState, display_window};

/// The single dashboard page.
///
/// Loads tasks, contacts, and deals once on mount. The load is
/// all-or-nothing: if any of the three requests fails, the error is logged
/// and the initial empty state stays on screen — no partial updates and no
/// user-facing error surface.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let dashboard = expect_context::<RwSignal<DashboardState>>();

    #[cfg(feature = "csr")]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        // The page may unmount while the requests are in flight; the
        // cleanup flag keeps a late response from writing into a dead view.
        let cancelled = Rc::new(Cell::new(false));
        on_cleanup({
            let cancelled = Rc::clone(&cancelled);
            move || cancelled.set(true)
        });

        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_dashboard(crate::config::api_base()).await;
            if let Err(err) = &result {
                log::error!("dashboard load failed: {err}");
            }
            dashboard.update(|state| state.commit_load(result, cancelled.get()));
        });
    }

    view! {
        <div class="dashboard">
            <Topbar/>

            <main class="dashboard__content">
                {move || {
                    let state = dashboard.get();
                    let contacts: Vec<CrmRow> =
                        display_window(&state.contacts).iter().map(CrmRow::from).collect();
                    let deals: Vec<CrmRow> =
                        display_window(&state.deals).iter().map(CrmRow::from).collect();

                    view! {
                        <div class="dashboard__stats">
                            <StatCard title="Open Tasks" value=state.tasks.open_count()/>
                            <StatCard
                                title="Completed"
                                value=state.tasks.done_count()
                                accent=Accent::Green
                            />
                            <StatCard title="Contacts" value=state.contacts.len()/>
                            <StatCard title="Deals" value=state.deals.len() accent=Accent::Green/>
                        </div>

                        <div class="dashboard__main">
                            <section class="dashboard__board">
                                <h2 class="dashboard__section-title">"Tasks"</h2>
                                <div class="dashboard__columns">
                                    <KanbanColumn title="To do" tasks=state.tasks.todo/>
                                    <KanbanColumn title="In progress" tasks=state.tasks.in_progress/>
                                    <KanbanColumn
                                        title="Done"
                                        tasks=state.tasks.done
                                        accent=Accent::Green
                                    />
                                </div>
                            </section>

                            <aside class="dashboard__side">
                                <CrmList title="Contacts" rows=contacts/>
                                <CrmList title="Deals" rows=deals/>
                            </aside>
                        </div>
                    }
                }}
            </main>
        </div>
    }
}
