use super::*;

/// Tests removing XP and recomputing the level downward.
///
/// Expected: Ok with the level dropping back to 1 once XP falls below the
/// level 2 threshold
#[tokio::test]
async fn removes_and_recomputes_level() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    repo.grant_xp(grant(100, 1, 300)).await?;

    let updated = repo
        .remove_xp(AdjustXpParam {
            user_id: 100,
            guild_id: 1,
            display_name: "Member 100".to_string(),
            amount: 100,
        })
        .await?;

    assert_eq!(updated.xp, 200);
    assert_eq!(updated.level, 1);

    Ok(())
}

/// Tests that removal floors the XP at zero.
///
/// Removing more XP than the member has must not drive the value negative.
///
/// Expected: Ok with xp 0 and level 1
#[tokio::test]
async fn floors_at_zero() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    repo.grant_xp(grant(100, 1, 50)).await?;

    let updated = repo
        .remove_xp(AdjustXpParam {
            user_id: 100,
            guild_id: 1,
            display_name: "Member 100".to_string(),
            amount: 100,
        })
        .await?;

    assert_eq!(updated.xp, 0);
    assert_eq!(updated.level, 1);

    Ok(())
}
