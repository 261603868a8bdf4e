use super::navigation::AboutNavigation;
use contracts::content::Catalog;
use leptos::prelude::*;

#[component]
pub fn TabBar(catalog: Catalog, nav: AboutNavigation) -> impl IntoView {
    view! {
        <nav class="about-tabs" role="tablist">
            {catalog
                .tabs()
                .iter()
                .map(|tab| {
                    let key = tab.key;
                    let is_selected = move || nav.displayed_tab() == key;
                    view! {
                        <button
                            class="about-tabs__item"
                            class:about-tabs__item--active=is_selected
                            role="tab"
                            aria-selected=move || is_selected().to_string()
                            data-tab-key=key.as_str()
                            on:click=move |_| nav.select_tab(key)
                        >
                            {tab.label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
