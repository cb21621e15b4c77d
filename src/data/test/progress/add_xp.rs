use super::*;

/// Tests adding XP to a member with no ledger entry.
///
/// Verifies the entry is created lazily and the level is recomputed from the
/// resulting XP.
///
/// Expected: Ok with xp 500 and level 2 (500 is past the 282 XP of level 2
/// but short of the 519 XP of level 3)
#[tokio::test]
async fn creates_entry_when_absent() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    let updated = repo
        .add_xp(AdjustXpParam {
            user_id: 100,
            guild_id: 1,
            display_name: "Admin Target".to_string(),
            amount: 500,
        })
        .await?;

    assert_eq!(updated.xp, 500);
    assert_eq!(updated.level, 2);

    Ok(())
}

/// Tests adding XP on top of an existing entry.
///
/// Expected: Ok with the amounts summed and the level recomputed
#[tokio::test]
async fn adds_to_existing_entry() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    repo.grant_xp(grant(100, 1, 100)).await?;

    let updated = repo
        .add_xp(AdjustXpParam {
            user_id: 100,
            guild_id: 1,
            display_name: "Member 100".to_string(),
            amount: 200,
        })
        .await?;

    assert_eq!(updated.xp, 300);
    assert_eq!(updated.level, 2);

    Ok(())
}

/// Tests that administrative additions do not count as message activity.
///
/// Expected: Ok with the message count unchanged by the adjustment
#[tokio::test]
async fn does_not_touch_message_count() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    repo.grant_xp(grant(100, 1, 10)).await?;
    repo.grant_xp(grant(100, 1, 10)).await?;

    repo.add_xp(AdjustXpParam {
        user_id: 100,
        guild_id: 1,
        display_name: "Member 100".to_string(),
        amount: 50,
    })
    .await?;

    let entry = repo.find_by_member(100, 1).await?.unwrap();
    assert_eq!(entry.xp, 70);
    assert_eq!(entry.message_count, 2);

    Ok(())
}
