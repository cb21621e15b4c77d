use super::*;

/// Tests resetting every entry in one guild.
///
/// Entries in other guilds must be untouched.
///
/// Expected: Ok(2) with both target-guild entries zeroed and the other
/// guild's entry intact
#[tokio::test]
async fn resets_only_the_target_guild() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    repo.grant_xp(grant(100, 1, 300)).await?;
    repo.grant_xp(grant(101, 1, 500)).await?;
    repo.grant_xp(grant(100, 2, 400)).await?;

    let count = repo.reset_guild_xp(1).await?;
    assert_eq!(count, 2);

    let first = repo.find_by_member(100, 1).await?.unwrap();
    let second = repo.find_by_member(101, 1).await?.unwrap();
    let other_guild = repo.find_by_member(100, 2).await?.unwrap();

    assert_eq!(first.xp, 0);
    assert_eq!(first.level, 1);
    assert_eq!(second.xp, 0);
    assert_eq!(second.level, 1);
    assert_eq!(other_guild.xp, 400);

    Ok(())
}

/// Tests resetting a guild with no entries.
///
/// Expected: Ok(0), not an error
#[tokio::test]
async fn returns_zero_for_empty_guild() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    let count = repo.reset_guild_xp(1).await?;

    assert_eq!(count, 0);

    Ok(())
}
