//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let progress = factory::member_progress::create_progress(&db, "42").await?;
//!     let settings = factory::guild_settings::create_settings(&db, "42").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let progress = factory::member_progress::MemberProgressFactory::new(&db)
//!     .guild_id("42")
//!     .xp(350)
//!     .level(2)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `member_progress` - Create XP ledger entities
//! - `guild_settings` - Create guild settings entities
//! - `helpers` - Shared utilities (unique ID generation)

pub mod guild_settings;
pub mod helpers;
pub mod member_progress;

// Re-export commonly used factory functions for concise usage
pub use guild_settings::create_settings;
pub use member_progress::create_progress;
