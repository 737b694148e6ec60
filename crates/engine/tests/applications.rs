use sea_orm::{Database, DatabaseConnection};

use engine::{ApplicationNew, Engine, EngineError, ProfileUpsert};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db.clone()).build().await.unwrap();
    (engine, db)
}

async fn user_id(engine: &Engine, name: &str) -> i32 {
    let (user, _) = engine
        .upsert_user(ProfileUpsert {
            name: Some(name.to_string()),
            age: Some(19),
            major: Some("Engineering".to_string()),
            gender: Some("Male".to_string()),
            leadership: None,
            community: Some(true),
        })
        .await
        .unwrap();
    user.id
}

fn stem_application(user_id: i32) -> ApplicationNew {
    ApplicationNew {
        user_id: Some(user_id),
        scholarship_id: Some(1),
        scholarship_name: Some("STEM Stars Scholarship".to_string()),
        xp_earned: Some(100),
    }
}

#[tokio::test]
async fn successful_apply_credits_xp_and_records_one_row() {
    let (engine, _db) = engine_with_db().await;
    let user = user_id(&engine, "Carol").await;

    let (application_id, xp_earned) = engine.apply(stem_application(user)).await.unwrap();
    assert!(application_id > 0);
    assert_eq!(xp_earned, 100);

    let profile = engine.user_by_name("Carol").await.unwrap();
    assert_eq!(profile.total_xp, 100);

    let rows = engine.applications_for_user(user).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].scholarship_id, 1);
    assert_eq!(rows[0].xp_earned, 100);
}

#[tokio::test]
async fn duplicate_apply_is_rejected_and_leaves_xp_unchanged() {
    let (engine, _db) = engine_with_db().await;
    let user = user_id(&engine, "Carol").await;

    engine.apply(stem_application(user)).await.unwrap();
    assert_eq!(
        engine.apply(stem_application(user)).await.unwrap_err(),
        EngineError::AlreadyApplied
    );

    let profile = engine.user_by_name("Carol").await.unwrap();
    assert_eq!(profile.total_xp, 100);
    assert_eq!(engine.applications_for_user(user).await.unwrap().len(), 1);
}

#[tokio::test]
async fn same_scholarship_different_users_is_allowed() {
    let (engine, _db) = engine_with_db().await;
    let carol = user_id(&engine, "Carol").await;
    let dave = user_id(&engine, "Dave").await;

    engine.apply(stem_application(carol)).await.unwrap();
    engine.apply(stem_application(dave)).await.unwrap();

    assert_eq!(engine.applications_for_user(carol).await.unwrap().len(), 1);
    assert_eq!(engine.applications_for_user(dave).await.unwrap().len(), 1);
}

#[tokio::test]
async fn falsy_fields_are_rejected_as_missing() {
    let (engine, _db) = engine_with_db().await;
    let user = user_id(&engine, "Carol").await;

    // Source-compatible quirk: zero XP is falsy and counts as missing.
    let mut zero_xp = stem_application(user);
    zero_xp.xp_earned = Some(0);
    assert_eq!(
        engine.apply(zero_xp).await.unwrap_err(),
        EngineError::MissingField("xpEarned".to_string())
    );

    let mut no_scholarship = stem_application(user);
    no_scholarship.scholarship_id = None;
    assert_eq!(
        engine.apply(no_scholarship).await.unwrap_err(),
        EngineError::MissingField("scholarshipId".to_string())
    );

    let mut empty_name = stem_application(user);
    empty_name.scholarship_name = Some(String::new());
    assert_eq!(
        engine.apply(empty_name).await.unwrap_err(),
        EngineError::MissingField("scholarshipName".to_string())
    );

    // Nothing was written.
    let profile = engine.user_by_name("Carol").await.unwrap();
    assert_eq!(profile.total_xp, 0);
    assert!(engine.applications_for_user(user).await.unwrap().is_empty());
}

#[tokio::test]
async fn listing_for_user_without_applications_is_empty_not_an_error() {
    let (engine, _db) = engine_with_db().await;
    let user = user_id(&engine, "Carol").await;

    assert!(engine.applications_for_user(user).await.unwrap().is_empty());
}

#[tokio::test]
async fn listing_is_newest_first() {
    let (engine, _db) = engine_with_db().await;
    let user = user_id(&engine, "Carol").await;

    engine.apply(stem_application(user)).await.unwrap();
    let mut second = stem_application(user);
    second.scholarship_id = Some(2);
    second.scholarship_name = Some("Future Leaders Award".to_string());
    second.xp_earned = Some(80);
    engine.apply(second).await.unwrap();

    let rows = engine.applications_for_user(user).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].scholarship_id, 2);
    assert_eq!(rows[1].scholarship_id, 1);
    assert!(rows[0].applied_at >= rows[1].applied_at);
}
