use sea_orm::{Database, DatabaseConnection};
use serde_json::json;

use engine::Engine;
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db.clone()).build().await.unwrap();
    (engine, db)
}

#[tokio::test]
async fn five_scholarships_are_seeded() {
    let (engine, _db) = engine_with_db().await;

    let scholarships = engine.list_scholarships().await.unwrap();
    assert_eq!(scholarships.len(), 5);
    assert_eq!(scholarships[0].name, "STEM Stars Scholarship");
    assert_eq!(scholarships[0].reward, 100);
    assert_eq!(scholarships[4].name, "Women in Tech Scholarship");
    assert_eq!(scholarships[4].reward, 120);
}

#[tokio::test]
async fn rebuilding_the_engine_does_not_reseed() {
    let (engine, db) = engine_with_db().await;
    assert_eq!(engine.list_scholarships().await.unwrap().len(), 5);

    // Second startup against the same store.
    let engine = Engine::builder().database(db).build().await.unwrap();
    assert_eq!(engine.list_scholarships().await.unwrap().len(), 5);
}

#[tokio::test]
async fn criteria_round_trip_structurally() {
    let (engine, _db) = engine_with_db().await;

    let scholarships = engine.list_scholarships().await.unwrap();

    assert_eq!(
        scholarships[0].criteria,
        json!({ "major": ["Engineering", "Computer Science", "Mathematics", "Physics"] })
    );
    assert_eq!(
        scholarships[1].criteria,
        json!({ "age": [18, 19, 20, 21, 22], "major": ["Business", "Political Science"] })
    );
    // The empty predicate stays an empty object, not null.
    assert_eq!(scholarships[3].criteria, json!({}));
    assert_eq!(
        scholarships[4].criteria,
        json!({ "major": ["Computer Science", "Engineering"], "gender": ["Female"] })
    );
}
