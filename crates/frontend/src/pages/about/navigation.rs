//! `use_about_navigation`: привязка `NavigationController` к реактивным сигналам.
//!
//! Контроллер хранит состояние и таймеры перехода; после каждого изменения
//! снимок состояния копируется в сигнал, который читают компоненты страницы.
//! При размонтировании владельца таймеры отменяются.

use crate::shared::deep_link::{self, DeepLink};
use crate::shared::scheduler::GlooScheduler;
use contracts::navigation::{NavigationController, NavigationState, SubsectionKey, TabKey};
use leptos::logging::log;
use leptos::prelude::*;

/// Хэндл, возвращаемый [`use_about_navigation`].
#[derive(Clone, Copy)]
pub struct AboutNavigation {
    pub state: ReadSignal<NavigationState>,
    controller: StoredValue<NavigationController<GlooScheduler>, LocalStorage>,
}

impl AboutNavigation {
    pub fn select_tab(&self, tab: TabKey) {
        self.controller.with_value(|nav| nav.select_tab(tab));
    }

    pub fn select_subsection(&self, tab: TabKey, key: SubsectionKey) {
        self.controller
            .with_value(|nav| nav.select_subsection(tab, key));
    }

    pub fn displayed_tab(&self) -> TabKey {
        self.state.with(|s| s.displayed_tab)
    }

    /// `true`, пока идёт переход таба или подраздела.
    pub fn is_fading(&self) -> bool {
        self.state.with(|s| !s.is_settled())
    }
}

pub fn use_about_navigation(initial: NavigationState, transition_ms: u32) -> AboutNavigation {
    let (state, set_state) = signal(initial.clone());

    let controller = NavigationController::new(initial, GlooScheduler, transition_ms);
    controller.subscribe(move |snapshot| set_state.set(snapshot.clone()));
    let controller = StoredValue::new_local(controller);

    on_cleanup(move || {
        controller.try_with_value(|nav| nav.dispose());
        log!("💥 About navigation disposed");
    });

    // Адресная строка следует за тем, что показано на экране
    Effect::new(move |_| {
        let link = state.with(DeepLink::from_state);
        deep_link::write_to_history(&link);
    });

    AboutNavigation { state, controller }
}
