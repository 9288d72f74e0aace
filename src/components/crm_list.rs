//! Compact CRM list used for both contacts and deals.
//!
//! The two entity types render through one row view-model instead of the
//! source UI's duck typing: contacts fill `detail`, deals fill `value` and
//! `stage`.

#[cfg(test)]
#[path = "crm_list_test.rs"]
mod crm_list_test;

use leptos::prelude::*;

use crate::net::types::{Contact, Deal};
use crate::util::format::usd;

/// One row of a [`CrmList`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrmRow {
    pub name: String,
    pub detail: Option<String>,
    pub value: Option<String>,
    pub stage: Option<String>,
}

impl From<&Contact> for CrmRow {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            detail: contact.email.clone(),
            value: None,
            stage: None,
        }
    }
}

impl From<&Deal> for CrmRow {
    fn from(deal: &Deal) -> Self {
        Self {
            name: deal.name.clone(),
            detail: None,
            value: deal.value.map(usd),
            stage: deal.stage.clone(),
        }
    }
}

/// Titled list of up to a handful of CRM rows. Callers truncate with
/// `state::dashboard::display_window` before converting.
#[component]
pub fn CrmList(title: &'static str, rows: Vec<CrmRow>) -> impl IntoView {
    view! {
        <div class="crm-list">
            <div class="crm-list__header">
                <h2 class="crm-list__title">{title}</h2>
                <button class="crm-list__add">"Add"</button>
            </div>
            <div class="crm-list__rows">
                {rows.into_iter().map(crm_row).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

fn crm_row(row: CrmRow) -> impl IntoView {
    let aside = (row.value.is_some() || row.stage.is_some()).then(|| {
        view! {
            <div class="crm-list__aside">
                {row.value.map(|v| view! { <div class="crm-list__value">{v}</div> })}
                {row.stage.map(|s| view! { <div class="crm-list__stage">{s}</div> })}
            </div>
        }
    });

    view! {
        <div class="crm-list__row">
            <div>
                <div class="crm-list__name">{row.name}</div>
                {row.detail.map(|d| view! { <div class="crm-list__detail">{d}</div> })}
            </div>
            {aside}
        </div>
    }
}
