pub use super::guild_settings::Entity as GuildSettings;
pub use super::member_progress::Entity as MemberProgress;
