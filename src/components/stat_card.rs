//! Summary tile showing one headline count.

use leptos::prelude::*;

use super::Accent;

/// A single stat tile in the dashboard's summary row.
#[component]
pub fn StatCard(title: &'static str, value: usize, #[prop(default = Accent::Blue)] accent: Accent) -> impl IntoView {
    let swatch_class = format!("stat-card__swatch stat-card__swatch--{}", accent.modifier());

    view! {
        <div class="stat-card">
            <div class="stat-card__title">{title}</div>
            <div class="stat-card__row">
                <div class="stat-card__value">{value}</div>
                <div class=swatch_class></div>
            </div>
        </div>
    }
}
