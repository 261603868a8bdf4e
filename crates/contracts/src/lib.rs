pub mod config;
pub mod content;
pub mod enums;
pub mod navigation;
