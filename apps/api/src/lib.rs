//! Portfolio API: static portfolio content, experience timeline durations,
//! contact-form relay, and the theme preference.

pub mod config;
pub mod contact;
pub mod content;
pub mod email_client;
pub mod errors;
pub mod experience;
pub mod models;
pub mod routes;
pub mod state;
pub mod theme;
