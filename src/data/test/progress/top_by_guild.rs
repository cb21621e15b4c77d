use super::*;
use test_utils::factory::member_progress::create_progress_with_xp;

/// Tests the leaderboard ordering contract.
///
/// Entries with XP 50, 200, and 10 queried with a limit of 2 must come back
/// as the two highest in descending order.
///
/// Expected: Ok([200, 50])
#[tokio::test]
async fn orders_by_xp_descending() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_progress_with_xp(db, "1", 50, 1).await?;
    create_progress_with_xp(db, "1", 200, 1).await?;
    create_progress_with_xp(db, "1", 10, 1).await?;

    let repo = ProgressRepository::new(db);
    let top = repo.top_by_guild(1, 2).await?;

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].xp, 200);
    assert_eq!(top[1].xp, 50);

    Ok(())
}

/// Tests that ties break deterministically by insertion order.
///
/// Expected: Ok with the earlier-created entry ranked first
#[tokio::test]
async fn ties_break_by_insertion_order() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = create_progress_with_xp(db, "1", 100, 1).await?;
    let second = create_progress_with_xp(db, "1", 100, 1).await?;

    let repo = ProgressRepository::new(db);
    let top = repo.top_by_guild(1, 10).await?;

    assert_eq!(top.len(), 2);
    assert_eq!(top[0].display_name, first.display_name);
    assert_eq!(top[1].display_name, second.display_name);

    Ok(())
}

/// Tests the leaderboard over a guild with no entries.
///
/// Expected: Ok with an empty list, not an error
#[tokio::test]
async fn returns_empty_for_empty_guild() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    let top = repo.top_by_guild(1, 10).await?;

    assert!(top.is_empty());

    Ok(())
}

/// Tests that the leaderboard is scoped to one guild.
///
/// Expected: Ok with other guilds' entries excluded
#[tokio::test]
async fn scopes_to_the_requested_guild() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    create_progress_with_xp(db, "1", 100, 1).await?;
    create_progress_with_xp(db, "2", 900, 3).await?;

    let repo = ProgressRepository::new(db);
    let top = repo.top_by_guild(1, 10).await?;

    assert_eq!(top.len(), 1);
    assert_eq!(top[0].xp, 100);

    Ok(())
}
