use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MemberProgress::Table)
                    .if_not_exists()
                    .col(pk_auto(MemberProgress::Id))
                    .col(string(MemberProgress::UserId))
                    .col(string(MemberProgress::GuildId))
                    .col(string(MemberProgress::DisplayName))
                    .col(big_integer(MemberProgress::Xp))
                    .col(integer(MemberProgress::Level))
                    .col(big_integer(MemberProgress::MessageCount))
                    .col(timestamp_with_time_zone_null(MemberProgress::LastGainAt))
                    .to_owned(),
            )
            .await?;

        // One ledger row per (user, guild). The upsert and conditional-update
        // paths in the repository rely on this index.
        manager
            .create_index(
                Index::create()
                    .name("idx_member_progress_user_guild")
                    .table(MemberProgress::Table)
                    .col(MemberProgress::UserId)
                    .col(MemberProgress::GuildId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MemberProgress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MemberProgress {
    Table,
    Id,
    UserId,
    GuildId,
    DisplayName,
    Xp,
    Level,
    MessageCount,
    LastGainAt,
}
