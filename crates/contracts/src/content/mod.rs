//! Static content catalog of the About page.
//!
//! The catalog is the single source of truth for tab labels, default
//! subsections and the text rendered in each panel.

mod builtin;

use crate::navigation::{NavigationError, SubsectionKey, TabKey, TabMap};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsectionDescriptor {
    pub key: SubsectionKey,
    pub title: &'static str,
    pub paragraphs: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDescriptor {
    pub key: TabKey,
    pub label: &'static str,
    pub default_subsection: SubsectionKey,
    pub subsections: &'static [SubsectionDescriptor],
}

impl TabDescriptor {
    pub fn subsection(&self, key: &str) -> Option<&'static SubsectionDescriptor> {
        self.subsections.iter().find(|s| s.key == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("catalog has no entry for tab `{0}`")]
    MissingTab(TabKey),
    #[error("tab `{0}` is listed more than once")]
    DuplicateTab(TabKey),
    #[error("tab `{tab}` lists subsection `{key}` twice")]
    DuplicateSubsection { tab: TabKey, key: SubsectionKey },
    #[error("default subsection `{key}` of tab `{tab}` is not one of its subsections")]
    ForeignDefault { tab: TabKey, key: SubsectionKey },
}

/// Validated, ordered list of tab descriptors.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    tabs: &'static [TabDescriptor],
    positions: TabMap<usize>,
}

impl Catalog {
    pub fn new(tabs: &'static [TabDescriptor]) -> Result<Self, ContentError> {
        let mut positions = TabMap::from_fn(|_| None::<usize>);
        for (i, tab) in tabs.iter().enumerate() {
            if positions[tab.key].replace(i).is_some() {
                return Err(ContentError::DuplicateTab(tab.key));
            }
            for (j, subsection) in tab.subsections.iter().enumerate() {
                if tab.subsections[..j].iter().any(|s| s.key == subsection.key) {
                    return Err(ContentError::DuplicateSubsection {
                        tab: tab.key,
                        key: subsection.key,
                    });
                }
            }
            if tab.subsection(tab.default_subsection).is_none() {
                return Err(ContentError::ForeignDefault {
                    tab: tab.key,
                    key: tab.default_subsection,
                });
            }
        }
        if let Some((missing, _)) = positions.iter().find(|(_, pos)| pos.is_none()) {
            return Err(ContentError::MissingTab(missing));
        }
        Ok(Self {
            tabs,
            positions: TabMap::from_fn(|key| positions[key].unwrap_or_default()),
        })
    }

    /// The catalog shipped with the site.
    pub fn builtin() -> Self {
        Self {
            tabs: builtin::TABS,
            positions: TabMap::from_fn(|key| key.index()),
        }
    }

    pub fn tabs(&self) -> &'static [TabDescriptor] {
        self.tabs
    }

    pub fn first_tab(&self) -> TabKey {
        self.tabs[0].key
    }

    pub fn descriptor(&self, key: TabKey) -> &'static TabDescriptor {
        &self.tabs[self.positions[key]]
    }

    pub fn subsection(&self, tab: TabKey, key: &str) -> Option<&'static SubsectionDescriptor> {
        self.descriptor(tab).subsection(key)
    }

    /// Map untrusted strings (a URL query) onto catalog keys.
    pub fn resolve(
        &self,
        tab: &str,
        section: Option<&str>,
    ) -> Result<(TabKey, Option<SubsectionKey>), NavigationError> {
        let tab: TabKey = tab.parse()?;
        let section = match section.map(str::trim).filter(|s| !s.is_empty()) {
            Some(key) => {
                let found = self.subsection(tab, key).ok_or_else(|| {
                    NavigationError::UnknownSubsection {
                        tab,
                        key: key.to_string(),
                    }
                })?;
                Some(found.key)
            }
            None => None,
        };
        Ok((tab, section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    static ONLY_COMPANY: [TabDescriptor; 1] = [TabDescriptor {
        key: TabKey::Company,
        label: "Company",
        default_subsection: "about-us",
        subsections: &[SubsectionDescriptor {
            key: "about-us",
            title: "About us",
            paragraphs: NONE,
        }],
    }];

    static FOREIGN_DEFAULT: [TabDescriptor; 1] = [TabDescriptor {
        key: TabKey::Ethics,
        label: "Ethics",
        default_subsection: "history",
        subsections: &[SubsectionDescriptor {
            key: "code-of-conduct",
            title: "Code of conduct",
            paragraphs: NONE,
        }],
    }];

    static DOUBLE_SUBSECTION: [TabDescriptor; 1] = [TabDescriptor {
        key: TabKey::Company,
        label: "Company",
        default_subsection: "about-us",
        subsections: &[
            SubsectionDescriptor {
                key: "about-us",
                title: "About us",
                paragraphs: NONE,
            },
            SubsectionDescriptor {
                key: "about-us",
                title: "About us again",
                paragraphs: NONE,
            },
        ],
    }];

    #[test]
    fn test_builtin_catalog_is_valid() {
        let validated = Catalog::new(builtin::TABS).unwrap();
        let builtin = Catalog::builtin();
        for key in TabKey::ALL {
            assert_eq!(validated.descriptor(key), builtin.descriptor(key));
            assert_eq!(builtin.descriptor(key).key, key);
        }
        assert_eq!(builtin.first_tab(), TabKey::Company);
        assert_eq!(builtin.descriptor(TabKey::Company).default_subsection, "about-us");
    }

    #[test]
    fn test_rejects_missing_tab() {
        assert_eq!(
            Catalog::new(&ONLY_COMPANY).unwrap_err(),
            ContentError::MissingTab(TabKey::Philosophy)
        );
    }

    #[test]
    fn test_rejects_foreign_default() {
        assert_eq!(
            Catalog::new(&FOREIGN_DEFAULT).unwrap_err(),
            ContentError::ForeignDefault {
                tab: TabKey::Ethics,
                key: "history"
            }
        );
    }

    #[test]
    fn test_rejects_duplicate_subsection() {
        assert!(matches!(
            Catalog::new(&DOUBLE_SUBSECTION),
            Err(ContentError::DuplicateSubsection { tab: TabKey::Company, key: "about-us" })
        ));
    }

    #[test]
    fn test_resolve() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.resolve("company", Some("history")),
            Ok((TabKey::Company, Some("history")))
        );
        assert_eq!(catalog.resolve("ethics", None), Ok((TabKey::Ethics, None)));
        assert_eq!(catalog.resolve("ethics", Some("")), Ok((TabKey::Ethics, None)));
        assert_eq!(
            catalog.resolve("careers", None),
            Err(NavigationError::UnknownTab("careers".to_string()))
        );
        assert_eq!(
            catalog.resolve("ethics", Some("history")),
            Err(NavigationError::UnknownSubsection {
                tab: TabKey::Ethics,
                key: "history".to_string()
            })
        );
    }
}
