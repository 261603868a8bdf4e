pub mod components;
pub mod cookie_consent;
pub mod deep_link;
pub mod icons;
pub mod scheduler;
pub mod storage;
pub mod theme;
