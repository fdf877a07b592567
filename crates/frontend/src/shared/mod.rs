pub mod components;
pub mod config;
pub mod fetch_guard;
pub mod icons;
pub mod modal;
pub mod notifications;
pub mod pagination;
