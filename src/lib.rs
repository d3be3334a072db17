//! Bookstore Catalog Server
//!
//! A Rust REST JSON API for managing a bookstore catalog: authors and the
//! books they own. The interesting part lives in [`services`], which owns the
//! resource lifecycles (create vs. replace, partial merge, referential
//! integrity, cascade delete); persistence is an abstract keyed store in
//! [`repository`].

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
