pub mod consent_decision;
pub mod theme;

pub use consent_decision::ConsentDecision;
pub use theme::Theme;
