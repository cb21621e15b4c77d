use super::*;

/// Tests disabling XP gain for a guild.
///
/// Expected: Ok with the flag persisted
#[tokio::test]
async fn disables_and_persists() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    repo.set_xp_enabled(42, false).await?;

    let settings = repo.get_or_create(42).await?;
    assert!(!settings.xp_enabled);

    repo.set_xp_enabled(42, true).await?;
    let settings = repo.get_or_create(42).await?;
    assert!(settings.xp_enabled);

    Ok(())
}

/// Tests that the setter creates the row when the guild has none.
///
/// Expected: Ok with a row carrying defaults plus the new flag
#[tokio::test]
async fn creates_row_when_absent() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    repo.set_xp_enabled(42, false).await?;

    let settings = repo.get_or_create(42).await?;
    assert!(!settings.xp_enabled);
    assert_eq!(settings.base_xp_rate, 15);

    Ok(())
}
