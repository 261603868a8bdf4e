//! Cookie-баннер.
//!
//! Показывается, пока посетитель не принял или не отклонил cookies. Решение
//! сохраняется в localStorage под ключом `consent_storage_key`.

use crate::config::use_site_config;
use crate::shared::icons::icon;
use crate::shared::storage;
use contracts::enums::ConsentDecision;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use thaw::*;

/// Баннер согласия на cookies; скрывается после ответа посетителя.
#[component]
pub fn CookieConsentBanner() -> impl IntoView {
    let config = use_site_config();
    let fade_ms = config.transition_ms;

    let stored = storage::read(&config.consent_storage_key)
        .and_then(|code| ConsentDecision::from_code(&code));
    let decision = RwSignal::new(stored);
    let (closing, set_closing) = signal(false);

    let storage_key = StoredValue::new(config.consent_storage_key);
    // Таймер скрытия баннера после анимации; сбрасывается при размонтировании
    let hide_timer = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || {
        hide_timer.try_update_value(|timer| timer.take());
    });

    let decide = move |choice: ConsentDecision| {
        storage_key.with_value(|key| storage::write(key, choice.code()));
        log::info!("cookie consent: {}", choice.code());
        set_closing.set(true);
        hide_timer.set_value(Some(Timeout::new(fade_ms, move || {
            decision.set(Some(choice));
        })));
    };

    view! {
        <Show when=move || decision.get().is_none()>
            <div
                class="cookie-banner"
                class:cookie-banner--closing=move || closing.get()
                role="dialog"
                aria-live="polite"
            >
                <span class="cookie-banner__icon">{icon("cookie")}</span>
                <p class="cookie-banner__text">
                    "We use cookies to understand how the site is used. You can accept or decline analytics cookies."
                </p>
                <div class="cookie-banner__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| decide(ConsentDecision::Declined)
                    >
                        "Decline"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| decide(ConsentDecision::Accepted)
                    >
                        "Accept"
                    </Button>
                </div>
            </div>
        </Show>
    }
}
