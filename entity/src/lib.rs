//! Database entity models for the rankboard application.
//!
//! Contains SeaORM entity definitions for every persisted table. Entities are
//! consumed by the repository layer in the main crate and by the migration and
//! test-utils crates for schema generation.

pub mod guild_settings;
pub mod member_progress;
pub mod prelude;
