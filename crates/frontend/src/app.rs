use crate::config::load_site_config;
use crate::layout::Shell;
use crate::pages::about::AboutPage;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the site configuration to the whole app via context.
    provide_context(load_site_config());

    view! {
        <ThemeProvider>
            <Shell>
                <AboutPage />
            </Shell>
        </ThemeProvider>
    }
}
