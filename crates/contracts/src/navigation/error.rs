use super::TabKey;
use thiserror::Error;

/// Rejected navigation input coming from outside the UI (URL query, storage).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("unknown tab `{0}`")]
    UnknownTab(String),
    #[error("tab `{tab}` has no subsection `{key}`")]
    UnknownSubsection { tab: TabKey, key: String },
}
