use super::*;

/// Tests overriding a member's XP to an exact threshold.
///
/// Expected: Ok with the level recomputed from the new value; 282 XP is
/// exactly the minimum for level 2
#[tokio::test]
async fn overrides_and_recomputes_level() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    repo.grant_xp(grant(100, 1, 10)).await?;

    let updated = repo
        .set_xp(SetXpParam {
            user_id: 100,
            guild_id: 1,
            display_name: "Member 100".to_string(),
            xp: 282,
        })
        .await?;

    assert_eq!(updated.xp, 282);
    assert_eq!(updated.level, 2);

    Ok(())
}

/// Tests overriding a member's XP down to zero.
///
/// Expected: Ok with xp 0 and the level back at the baseline
#[tokio::test]
async fn override_to_zero_returns_to_baseline() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    repo.grant_xp(grant(100, 1, 400)).await?;

    let updated = repo
        .set_xp(SetXpParam {
            user_id: 100,
            guild_id: 1,
            display_name: "Member 100".to_string(),
            xp: 0,
        })
        .await?;

    assert_eq!(updated.xp, 0);
    assert_eq!(updated.level, 1);

    Ok(())
}

/// Tests overriding XP for a member with no entry.
///
/// Expected: Ok with the entry created carrying the override
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
        .set_xp(SetXpParam {
            user_id: 100,
            guild_id: 1,
            display_name: "Admin Target".to_string(),
            xp: 1000,
        })
        .await?;

    assert_eq!(updated.xp, 1000);
    assert_eq!(updated.level, 4); // 1000 XP is past floor(100 * 4^1.5) = 800

    Ok(())
}
