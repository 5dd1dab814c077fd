pub mod api;
pub mod components;
pub mod config;
pub mod confirm;
pub mod editor;
pub mod format;
pub mod icons;
pub mod notifications;
pub mod resource_list;
pub mod upload;
