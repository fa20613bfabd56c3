pub mod auth;
pub mod content;
pub mod editor;
pub mod health;
pub mod settings;
pub mod telegram;
pub mod tour_types;
pub mod tours;
pub mod upload;
