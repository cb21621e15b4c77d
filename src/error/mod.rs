//! Error types for the application.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps infrastructure errors and the
//! progression domain's own error taxonomy. Most variants use `#[from]` for
//! automatic conversion with `?`.

pub mod config;
pub mod progression;

use thiserror::Error;

use crate::error::{config::ConfigError, progression::ProgressionError};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application. Errors on the
/// passive chat-XP path are logged and swallowed by the event handlers; errors
/// on explicit admin commands are rendered back to the invoking admin.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// XP progression domain error (invalid amounts, missing entries,
    /// storage contention).
    #[error(transparent)]
    ProgressionErr(#[from] ProgressionError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
