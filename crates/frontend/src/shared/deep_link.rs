//! Синхронизация выбранного таба и подраздела с URL (`?tab=...&section=...`).

use contracts::content::Catalog;
use contracts::navigation::{NavigationError, NavigationState, SubsectionKey, TabKey};
use serde::{Deserialize, Serialize};
use web_sys::window;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

impl DeepLink {
    /// То, что видит посетитель: отображаемый таб и выбранный в нём подраздел.
    pub fn from_state(state: &NavigationState) -> Self {
        let tab = state.displayed_tab;
        Self {
            tab: Some(tab.as_str().to_string()),
            section: Some(state.active_subsection[tab].to_string()),
        }
    }

    /// Разбор `location.search` (с ведущим `?` или без него).
    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    pub fn to_query(&self) -> String {
        format!("?{}", serde_qs::to_string(self).unwrap_or_default())
    }

    /// `Ok(None)`, если в ссылке нет таба.
    pub fn resolve(
        &self,
        catalog: &Catalog,
    ) -> Result<Option<(TabKey, Option<SubsectionKey>)>, NavigationError> {
        match self.tab.as_deref() {
            Some(tab) => catalog.resolve(tab, self.section.as_deref()).map(Some),
            None => Ok(None),
        }
    }
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn read_from_location() -> DeepLink {
    DeepLink::parse(&current_search())
}

/// Заменяет текущую запись истории; ничего не делает, если URL уже совпадает.
pub fn write_to_history(link: &DeepLink) {
    let new_url = link.to_query();
    if current_search() == new_url {
        return;
    }
    let Some(w) = window() else {
        return;
    };
    let result = w.history().and_then(|history| {
        history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
    });
    if let Err(err) = result {
        log::warn!("history.replaceState to `{}` failed: {:?}", new_url, err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let link = DeepLink::parse("?tab=company&section=history");
        assert_eq!(link.tab.as_deref(), Some("company"));
        assert_eq!(link.section.as_deref(), Some("history"));

        assert_eq!(DeepLink::parse(""), DeepLink::default());
        assert_eq!(DeepLink::parse("?utm_source=mail").tab, None);
    }

    #[test]
    fn test_query_from_state() {
        let catalog = Catalog::builtin();
        let mut state = NavigationState::from_catalog(&catalog);
        state.jump_to(TabKey::Ethics, Some("responsible-ai"));
        assert_eq!(
            DeepLink::from_state(&state).to_query(),
            "?tab=ethics&section=responsible-ai"
        );
    }

    #[test]
    fn test_resolve_against_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(DeepLink::default().resolve(&catalog), Ok(None));
        assert_eq!(
            DeepLink::parse("tab=governance").resolve(&catalog),
            Ok(Some((TabKey::Governance, None)))
        );
        assert!(DeepLink::parse("tab=careers").resolve(&catalog).is_err());
        assert!(DeepLink::parse("tab=company&section=roadmap")
            .resolve(&catalog)
            .is_err());
    }
}
