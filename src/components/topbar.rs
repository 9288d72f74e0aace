//! Sticky top bar with the brand mark, search input, and "New" button.
//!
//! Search and creation are backend features this dashboard does not wire
//! up; the controls are static, matching the source UI.

use leptos::prelude::*;

/// Top navigation bar.
#[component]
pub fn Topbar() -> impl IntoView {
    view! {
        <header class="topbar">
            <div class="topbar__inner">
                <div class="topbar__brand">
                    <span class="topbar__logo"></span>
                    <span class="topbar__title">"Task & CRM"</span>
                </div>
                <div class="topbar__actions">
                    <input class="topbar__search" type="text" placeholder="Search"/>
                    <button class="btn btn--primary">"New"</button>
                </div>
            </div>
        </header>
    }
}
