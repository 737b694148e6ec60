//! One-time seed of the five reference scholarships.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use serde_json::json;

use crate::scholarships;

struct SampleScholarship {
    name: &'static str,
    description: &'static str,
    criteria: serde_json::Value,
    reward: i64,
}

fn sample_scholarships() -> [SampleScholarship; 5] {
    [
        SampleScholarship {
            name: "STEM Stars Scholarship",
            description: "For students majoring in STEM fields.",
            criteria: json!({ "major": ["Engineering", "Computer Science", "Mathematics", "Physics"] }),
            reward: 100,
        },
        SampleScholarship {
            name: "Future Leaders Award",
            description: "For students with leadership experience.",
            criteria: json!({ "age": [18, 19, 20, 21, 22], "major": ["Business", "Political Science"] }),
            reward: 80,
        },
        SampleScholarship {
            name: "Creative Minds Grant",
            description: "For students in creative majors.",
            criteria: json!({ "major": ["Art", "Design", "Music", "Literature"] }),
            reward: 90,
        },
        SampleScholarship {
            name: "Community Hero Scholarship",
            description: "For students with community service experience.",
            criteria: json!({}),
            reward: 70,
        },
        SampleScholarship {
            name: "Women in Tech Scholarship",
            description: "For women in technology-related majors.",
            criteria: json!({ "major": ["Computer Science", "Engineering"], "gender": ["Female"] }),
            reward: 120,
        },
    ]
}

/// Insert the reference scholarships iff the table is empty. Re-running at
/// startup leaves existing rows untouched.
pub(crate) async fn seed_scholarships(db: &DatabaseConnection) -> Result<(), DbErr> {
    if scholarships::Entity::find().count(db).await? > 0 {
        return Ok(());
    }

    let now = chrono::Utc::now();
    for sample in sample_scholarships() {
        scholarships::ActiveModel {
            name: ActiveValue::Set(sample.name.to_string()),
            description: ActiveValue::Set(sample.description.to_string()),
            criteria: ActiveValue::Set(sample.criteria.to_string()),
            reward: ActiveValue::Set(sample.reward),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(())
}
