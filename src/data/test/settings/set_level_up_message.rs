use super::*;
use crate::model::settings::DEFAULT_LEVEL_UP_MESSAGE;

/// Tests setting and clearing the level-up template.
///
/// Expected: Ok with the custom template stored, then the built-in default
/// after clearing
#[tokio::test]
async fn sets_and_clears_template() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    repo.set_level_up_message(42, Some("{user} is now {level}".to_string()))
        .await?;

    let settings = repo.get_or_create(42).await?;
    assert_eq!(settings.level_up_template(), "{user} is now {level}");

    repo.set_level_up_message(42, None).await?;

    let settings = repo.get_or_create(42).await?;
    assert_eq!(settings.level_up_template(), DEFAULT_LEVEL_UP_MESSAGE);

    Ok(())
}
