//! Filter Bar Component

use leptos::prelude::*;

use crate::context::use_controller;
use crate::models::Filter;

/// One button per filter; the active one is highlighted
#[component]
pub fn FilterBar() -> impl IntoView {
    let ctrl = use_controller();

    view! {
        <div class="filters">
            {Filter::ALL.into_iter().map(|filter| {
                let is_active = move || ctrl.filter() == filter;
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        data-filter=filter.as_str()
                        aria-pressed=move || if is_active() { "true" } else { "false" }
                        on:click=move |_| ctrl.set_filter(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
