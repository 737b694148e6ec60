use sea_orm::DatabaseConnection;

use crate::{EngineError, ResultEngine, seed};

mod applications;
mod scholarships;
mod users;

pub use applications::ApplicationNew;
pub use scholarships::Scholarship;
pub use users::{LeaderboardRow, ProfileUpsert};

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

// Presence checks follow the source semantics: a falsy value counts as
// missing, so empty strings and zeroes are rejected alongside absent fields.
// Values are deliberately not trimmed.

fn required_text(value: Option<String>, field: &str) -> ResultEngine<String> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(EngineError::MissingField(field.to_string())),
    }
}

fn required_i32(value: Option<i32>, field: &str) -> ResultEngine<i32> {
    match value {
        Some(number) if number != 0 => Ok(number),
        _ => Err(EngineError::MissingField(field.to_string())),
    }
}

fn required_i64(value: Option<i64>, field: &str) -> ResultEngine<i64> {
    match value {
        Some(number) if number != 0 => Ok(number),
        _ => Err(EngineError::MissingField(field.to_string())),
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`, seeding the reference scholarships on first run.
    pub async fn build(self) -> ResultEngine<Engine> {
        seed::seed_scholarships(&self.database).await?;

        Ok(Engine {
            database: self.database,
        })
    }
}
