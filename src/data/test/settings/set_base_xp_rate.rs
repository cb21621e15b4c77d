use super::*;

/// Tests updating the base XP rate.
///
/// Expected: Ok with the new rate persisted
#[tokio::test]
async fn updates_rate() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    repo.set_base_xp_rate(42, 30).await?;

    let settings = repo.get_or_create(42).await?;
    assert_eq!(settings.base_xp_rate, 30);

    Ok(())
}
