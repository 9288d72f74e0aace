//! Root application component providing the shared state context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::dashboard::DashboardPage;
use crate::state::dashboard::DashboardState;

/// Root application component.
///
/// Provides the dashboard state signal and renders the single page. The
/// signal has exactly one writer: the page's load effect replaces it
/// wholesale on a successful fetch.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let dashboard = RwSignal::new(DashboardState::default());
    provide_context(dashboard);

    view! {
        <Title text="Task & CRM"/>
        <DashboardPage/>
    }
}
