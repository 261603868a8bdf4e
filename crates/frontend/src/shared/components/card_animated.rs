//! CardAnimated — обёртка над Thaw Card с анимацией появления.
//!
//! Анимация `card-appear` определена в стилях сайта. Абзацы панели
//! About выводятся каскадом:
//!
//! ```text
//! <CardAnimated delay_ms=0>   // абзац 1
//! <CardAnimated delay_ms=80>  // абзац 2
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Шаг каскадной задержки между соседними карточками.
pub const STAGGER_STEP_MS: u32 = 80;

/// Обёртка над Thaw [`Card`] с анимацией `card-appear`.
#[component]
pub fn CardAnimated(
    /// Задержка анимации в миллисекундах (для stagger-эффекта).
    #[prop(optional)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card attr:style=style>
            {children()}
        </Card>
    }
}
