use crate::config::use_site_config;
use crate::shared::cookie_consent::CookieConsentBanner;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let company_name = use_site_config().company_name;
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer data-zone="footer" class="footer">
            <span class="footer__copyright">
                {format!("© {} {}", year, company_name)}
            </span>
            <CookieConsentBanner />
        </footer>
    }
}
