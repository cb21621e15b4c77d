use super::*;
use test_utils::factory::guild_settings::GuildSettingsFactory;

/// Tests lazy creation of a settings row on first access.
///
/// Expected: Ok with the documented defaults (XP enabled, base rate 15,
/// originating-channel announcements, built-in template)
#[tokio::test]
async fn creates_with_defaults_on_first_access() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.get_or_create(42).await?;

    assert_eq!(settings.guild_id, 42);
    assert!(settings.xp_enabled);
    assert_eq!(settings.base_xp_rate, 15);
    assert!(settings.level_up_channel_id.is_none());
    assert!(settings.level_up_message.is_none());

    Ok(())
}

/// Tests that an existing row is returned untouched.
///
/// Expected: Ok with the stored values, not the defaults
#[tokio::test]
async fn returns_existing_row() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildSettingsFactory::new(db)
        .guild_id("42")
        .xp_enabled(false)
        .base_xp_rate(25)
        .level_up_channel_id("777")
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.get_or_create(42).await?;

    assert!(!settings.xp_enabled);
    assert_eq!(settings.base_xp_rate, 25);
    assert_eq!(settings.level_up_channel_id, Some(777));

    Ok(())
}

/// Tests that repeated access does not create duplicate rows.
///
/// Expected: Ok with both reads observing the same row
#[tokio::test]
async fn is_idempotent() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let first = repo.get_or_create(42).await?;
    let second = repo.get_or_create(42).await?;

    assert_eq!(first, second);

    Ok(())
}
