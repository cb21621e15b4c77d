//! Per-guild configuration entity.
//!
//! One row per guild, created lazily on first access or when the bot joins
//! the guild. Defaults are applied at insert time by the repository.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_settings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord guild ID as a string snowflake.
    #[sea_orm(unique)]
    pub guild_id: String,
    /// When false, no XP is granted anywhere in the guild.
    pub xp_enabled: bool,
    /// Lower bound of the per-message XP roll. Always positive.
    pub base_xp_rate: i32,
    /// Channel for level-up announcements. None means the originating channel.
    pub level_up_channel_id: Option<String>,
    /// Level-up message template with `{user}` and `{level}` placeholders.
    /// None means the built-in default.
    pub level_up_message: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
