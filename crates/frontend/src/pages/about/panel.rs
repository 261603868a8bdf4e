use super::navigation::AboutNavigation;
use crate::shared::components::card_animated::{CardAnimated, STAGGER_STEP_MS};
use contracts::content::Catalog;
use leptos::prelude::*;

/// Панель контента. Во время перехода получает класс `about-panel--fading`,
/// контент переключается по `displayed_*` полям состояния.
#[component]
pub fn ContentPanel(catalog: Catalog, nav: AboutNavigation) -> impl IntoView {
    let visible = move || {
        nav.state
            .with(|s| (s.displayed_tab, s.visible_subsection()))
    };

    view! {
        <article
            class="about-panel"
            class:about-panel--fading=move || nav.is_fading()
            role="tabpanel"
        >
            {move || {
                let (tab, key) = visible();
                match catalog.subsection(tab, key) {
                    Some(subsection) => view! {
                        <h2 class="about-panel__title">{subsection.title}</h2>
                        {subsection
                            .paragraphs
                            .iter()
                            .zip((0u32..).map(|i| i * STAGGER_STEP_MS))
                            .map(|(text, delay_ms)| view! {
                                <CardAnimated delay_ms=delay_ms>
                                    <p class="about-panel__text">{*text}</p>
                                </CardAnimated>
                            })
                            .collect_view()}
                    }
                    .into_any(),
                    None => {
                        log::warn!("No content for {}/{}", tab, key);
                        view! { <></> }.into_any()
                    }
                }
            }}
        </article>
    }
}
