//! Filter tab strip shared by the projects and gallery pages.

use leptos::prelude::*;

use crate::content::filter::CategoryFilter;

#[component]
pub fn CategoryTabs(
    labels: &'static [&'static str],
    #[prop(into)] active: Signal<CategoryFilter>,
    on_select: Callback<CategoryFilter>,
) -> impl IntoView {
    view! {
        <div class="category-tabs" role="tablist">
            {labels
                .iter()
                .map(|&label| {
                    let filter = CategoryFilter::from_label(label);
                    view! {
                        <button
                            class="category-tabs__tab"
                            class:category-tabs__tab--active=move || active.get() == filter
                            role="tab"
                            aria-selected=move || (active.get() == filter).to_string()
                            on:click=move |_| on_select.run(filter)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
