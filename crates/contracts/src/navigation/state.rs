use super::{TabKey, TabMap};
use crate::content::Catalog;

/// Subsection identifiers come from the static catalog.
pub type SubsectionKey = &'static str;

/// Snapshot of the About page navigation.
///
/// `displayed_*` and `active_*` differ only while the matching transition
/// flag is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub active_tab: TabKey,
    pub displayed_tab: TabKey,
    pub is_transitioning: bool,
    pub active_subsection: TabMap<SubsectionKey>,
    pub displayed_subsection: TabMap<SubsectionKey>,
    pub is_subsection_transitioning: bool,
}

impl NavigationState {
    /// Initial state: first catalog tab, every tab on its default subsection.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let tab = catalog.first_tab();
        let defaults = TabMap::from_fn(|key| catalog.descriptor(key).default_subsection);
        Self {
            active_tab: tab,
            displayed_tab: tab,
            is_transitioning: false,
            active_subsection: defaults,
            displayed_subsection: defaults,
            is_subsection_transitioning: false,
        }
    }

    /// Reposition without a transition. Used before the controller exists,
    /// e.g. when the page is opened from a deep link.
    pub fn jump_to(&mut self, tab: TabKey, subsection: Option<SubsectionKey>) {
        self.active_tab = tab;
        self.displayed_tab = tab;
        if let Some(key) = subsection {
            self.active_subsection[tab] = key;
            self.displayed_subsection[tab] = key;
        }
    }

    /// Subsection currently rendered for the displayed tab.
    pub fn visible_subsection(&self) -> SubsectionKey {
        self.displayed_subsection[self.displayed_tab]
    }

    pub fn is_settled(&self) -> bool {
        !self.is_transitioning && !self.is_subsection_transitioning
    }
}
