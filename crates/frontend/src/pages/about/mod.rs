//! Страница About: табы, подразделы и панель контента.

pub mod navigation;
pub mod panel;
pub mod subsection_bar;
pub mod tab_bar;

use crate::config::use_site_config;
use crate::shared::deep_link;
use contracts::content::Catalog;
use contracts::navigation::NavigationState;
use leptos::prelude::*;
use navigation::use_about_navigation;
use panel::ContentPanel;
use subsection_bar::SubsectionBar;
use tab_bar::TabBar;

/// Начальное состояние из каталога; таб из ссылки применяется без перехода.
fn initial_state(catalog: &Catalog) -> NavigationState {
    let mut state = NavigationState::from_catalog(catalog);
    match deep_link::read_from_location().resolve(catalog) {
        Ok(Some((tab, section))) => state.jump_to(tab, section),
        Ok(None) => {}
        Err(err) => log::warn!("Ignoring deep link: {}", err),
    }
    state
}

#[component]
pub fn AboutPage() -> impl IntoView {
    let config = use_site_config();
    let catalog = Catalog::builtin();
    let nav = use_about_navigation(initial_state(&catalog), config.transition_ms);

    view! {
        <section class="about">
            <TabBar catalog=catalog nav=nav />
            <SubsectionBar catalog=catalog nav=nav />
            <ContentPanel catalog=catalog nav=nav />
        </section>
    }
}
