use super::*;

/// Tests resetting an existing entry.
///
/// XP and level return to the baseline while the message count is preserved
/// as activity history.
///
/// Expected: Ok with xp 0, level 1, message count untouched
#[tokio::test]
async fn resets_existing_entry() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    repo.grant_xp(grant(100, 1, 300)).await?;
    repo.grant_xp(grant(100, 1, 300)).await?;

    repo.reset_xp(100, 1).await?;

    let entry = repo.find_by_member(100, 1).await?.unwrap();
    assert_eq!(entry.xp, 0);
    assert_eq!(entry.level, 1);
    assert_eq!(entry.message_count, 2);

    Ok(())
}

/// Tests resetting a member with no entry.
///
/// Expected: Err(NotFound) without creating a row
#[tokio::test]
async fn not_found_for_absent_entry() {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    let result = repo.reset_xp(100, 1).await;

    assert!(matches!(result, Err(ProgressionError::NotFound)));
}
