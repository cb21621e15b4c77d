use super::*;

/// Tests granting XP to a member with no ledger entry.
///
/// Verifies that the entry is created lazily with the grant applied on top:
/// the new XP equals the granted amount, the message count starts at one,
/// and the gain timestamp is recorded.
///
/// Expected: Ok with new_xp equal to the amount and no level-up below the
/// first crossing
#[tokio::test]
async fn creates_entry_and_applies_first_grant() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    // Whole-second timestamp so the round-trip through the store compares
    // exactly regardless of sub-second precision.
    let now = chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let result = repo
        .grant_xp(GrantXpParam {
            user_id: 100,
            guild_id: 1,
            display_name: "Newcomer".to_string(),
            amount: 150,
            now,
        })
        .await?;

    assert_eq!(result.previous_level, 1);
    assert_eq!(result.new_level, 1);
    assert_eq!(result.new_xp, 150);
    assert!(!result.leveled_up);

    let entry = repo.find_by_member(100, 1).await?.unwrap();
    assert_eq!(entry.xp, 150);
    assert_eq!(entry.level, 1);
    assert_eq!(entry.message_count, 1);
    assert_eq!(entry.last_gain_at, Some(now));

    Ok(())
}

/// Tests the level-up crossing on an accumulating grant.
///
/// From 150 XP a further 150 XP reaches 300, which crosses the 282 XP
/// required for level 2. The grant result itself must report the crossing.
///
/// Expected: Ok with leveled_up true and new_level exactly previous + 1
#[tokio::test]
async fn reports_level_up_when_threshold_is_crossed() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    repo.grant_xp(grant(100, 1, 150)).await?;
    let result = repo.grant_xp(grant(100, 1, 150)).await?;

    assert_eq!(result.previous_level, 1);
    assert_eq!(result.new_level, 2);
    assert_eq!(result.new_xp, 300);
    assert!(result.leveled_up);

    Ok(())
}

/// Tests that a grant below the next threshold does not report a level-up.
///
/// Expected: Ok with leveled_up false and the level unchanged
#[tokio::test]
async fn does_not_report_level_up_without_crossing() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    repo.grant_xp(grant(100, 1, 100)).await?;
    let result = repo.grant_xp(grant(100, 1, 100)).await?;

    assert_eq!(result.previous_level, 1);
    assert_eq!(result.new_level, 1);
    assert!(!result.leveled_up);

    Ok(())
}

/// Tests that sequential grants accumulate without losing updates.
///
/// Expected: Ok with final XP and message count both equal to the number
/// of grants
#[tokio::test]
async fn sequential_grants_accumulate_without_loss() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    for _ in 0..100 {
        repo.grant_xp(grant(100, 1, 1)).await?;
    }

    let entry = repo.find_by_member(100, 1).await?.unwrap();
    assert_eq!(entry.xp, 100);
    assert_eq!(entry.message_count, 100);
    assert_eq!(entry.level, 1);

    Ok(())
}

/// Tests that concurrent grants for the same member do not lose updates.
///
/// Spawns ten tasks that each grant 1 XP to the same member and interleave
/// at the await points of the shared connection. The conditional update
/// must detect every race and retry, so no grant may be lost.
///
/// Expected: Ok with final XP and message count both exactly ten
#[tokio::test]
async fn concurrent_grants_do_not_lose_updates() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap().clone();

    let mut tasks = tokio::task::JoinSet::new();
    for _ in 0..10 {
        let db = db.clone();
        tasks.spawn(async move {
            ProgressRepository::new(&db).grant_xp(grant(100, 1, 1)).await
        });
    }

    while let Some(joined) = tasks.join_next().await {
        joined.unwrap()?;
    }

    let repo = ProgressRepository::new(&db);
    let entry = repo.find_by_member(100, 1).await?.unwrap();
    assert_eq!(entry.xp, 10);
    assert_eq!(entry.message_count, 10);

    Ok(())
}

/// Tests that grants refresh the advisory display name.
///
/// Expected: Ok with the most recently observed name stored
#[tokio::test]
async fn refreshes_display_name_on_grant() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    repo.grant_xp(GrantXpParam {
        user_id: 100,
        guild_id: 1,
        display_name: "OldName".to_string(),
        amount: 10,
        now: Utc::now(),
    })
    .await?;
    repo.grant_xp(GrantXpParam {
        user_id: 100,
        guild_id: 1,
        display_name: "NewName".to_string(),
        amount: 10,
        now: Utc::now(),
    })
    .await?;

    let entry = repo.find_by_member(100, 1).await?.unwrap();
    assert_eq!(entry.display_name, "NewName");
    assert_eq!(entry.xp, 20);

    Ok(())
}

/// Tests that ledger entries are scoped per guild.
///
/// The same user chatting in two guilds accumulates two independent entries.
///
/// Expected: Ok with separate XP totals per guild
#[tokio::test]
async fn tracks_guilds_independently() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    repo.grant_xp(grant(100, 1, 50)).await?;
    repo.grant_xp(grant(100, 2, 70)).await?;

    let first = repo.find_by_member(100, 1).await?.unwrap();
    let second = repo.find_by_member(100, 2).await?.unwrap();
    assert_eq!(first.xp, 50);
    assert_eq!(second.xp, 70);

    Ok(())
}
