use super::*;

/// Tests setting and clearing the announcement channel.
///
/// Expected: Ok with the channel stored, then cleared back to the
/// originating-channel default
#[tokio::test]
async fn sets_and_clears_channel() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    repo.set_level_up_channel(42, Some(777)).await?;

    let settings = repo.get_or_create(42).await?;
    assert_eq!(settings.level_up_channel_id, Some(777));

    repo.set_level_up_channel(42, None).await?;

    let settings = repo.get_or_create(42).await?;
    assert!(settings.level_up_channel_id.is_none());

    Ok(())
}
