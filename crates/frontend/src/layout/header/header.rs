use crate::config::use_site_config;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let company_name = use_site_config().company_name;

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a class="header__title" href="?">{company_name}</a>
            </div>
            <div class="header__actions">
                <ThemeToggle />
            </div>
        </header>
    }
}
