use sea_orm::{QueryOrder, prelude::*};

use crate::{ResultEngine, scholarships};

use super::Engine;

/// A scholarship row with its criteria document decoded back to JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct Scholarship {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub criteria: serde_json::Value,
    pub reward: i64,
}

impl Engine {
    /// Every scholarship, id ascending, with criteria deserialized.
    pub async fn list_scholarships(&self) -> ResultEngine<Vec<Scholarship>> {
        let rows = scholarships::Entity::find()
            .order_by_asc(scholarships::Column::Id)
            .all(&self.database)
            .await?;

        rows.into_iter()
            .map(|row| {
                Ok(Scholarship {
                    id: row.id,
                    name: row.name,
                    description: row.description,
                    criteria: serde_json::from_str(&row.criteria)?,
                    reward: row.reward,
                })
            })
            .collect()
    }
}
