use super::*;
use test_utils::factory::member_progress::MemberProgressFactory;

/// Tests looking up a member with no entry.
///
/// Expected: Ok(None), distinguished from a zero-XP entry
#[tokio::test]
async fn returns_none_when_absent() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProgressRepository::new(db);
    let entry = repo.find_by_member(100, 1).await?;

    assert!(entry.is_none());

    Ok(())
}

/// Tests looking up an existing entry.
///
/// The stored string snowflakes come back as parsed integers on the domain
/// model.
///
/// Expected: Ok(Some) with all fields converted
#[tokio::test]
async fn returns_entry_with_parsed_ids() -> Result<(), ProgressionError> {
    let test = TestBuilder::new()
        .with_progression_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    MemberProgressFactory::new(db)
        .user_id("123456789")
        .guild_id("42")
        .display_name("Stored Member")
        .xp(300)
        .level(2)
        .message_count(7)
        .build()
        .await?;

    let repo = ProgressRepository::new(db);
    let entry = repo.find_by_member(123456789, 42).await?.unwrap();

    assert_eq!(entry.user_id, 123456789);
    assert_eq!(entry.guild_id, 42);
    assert_eq!(entry.display_name, "Stored Member");
    assert_eq!(entry.xp, 300);
    assert_eq!(entry.level, 2);
    assert_eq!(entry.message_count, 7);

    Ok(())
}
