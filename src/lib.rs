//! Admin dashboard backend for the Qoratosh Travel site.
//!
//! The dashboard edits tours, the tour-type registry and localized page
//! content that live on the public site, forwards leads to Telegram, and
//! guards everything behind one shared admin login.

pub mod config;
pub mod db;
pub mod editor;
pub mod error;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod routes;
pub mod state;
pub mod stores;
pub mod utils;
