use super::navigation::AboutNavigation;
use contracts::content::Catalog;
use leptos::prelude::*;

/// Подразделы отображаемого таба. Активным считается выбранный подраздел,
/// даже если его контент ещё не показан.
#[component]
pub fn SubsectionBar(catalog: Catalog, nav: AboutNavigation) -> impl IntoView {
    view! {
        <nav class="about-subsections">
            {move || {
                let tab = nav.displayed_tab();
                catalog
                    .descriptor(tab)
                    .subsections
                    .iter()
                    .map(|subsection| {
                        let key = subsection.key;
                        let is_selected = move || {
                            nav.state.with(|s| s.active_subsection[tab] == key)
                        };
                        view! {
                            <button
                                class="about-subsections__item"
                                class:about-subsections__item--active=is_selected
                                on:click=move |_| nav.select_subsection(tab, key)
                            >
                                {subsection.title}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
