//! fortune-news: a trilingual terminal reader for the FortuneNews backend.
//!
//! The crate splits into a pure core and a thin TUI shell. The core is the
//! paginated list state machine ([`news_list`]), the locale projection layer
//! ([`locale`]), and the REST client ([`api`]); the shell ([`app`], [`ui`])
//! wires them to a ratatui event loop.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod locale;
pub mod markdown;
pub mod models;
pub mod news_list;
pub mod routes;
pub mod ui;
