//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between
//! the bot surface (event handlers and slash commands) and the data (repository)
//! layer. Services are responsible for:
//!
//! - **Business Logic**: Amount validation, cooldown admission, the XP roll
//! - **Orchestration**: Coordinating repository calls and notification delivery
//! - **Domain Models**: Working with domain models rather than entity models

pub mod leaderboard;
pub mod notify;
pub mod progression;
pub mod settings;
