//! Domain core for the ScholarQuest backend.
//!
//! The [`Engine`] wraps the database connection and exposes every operation
//! the HTTP layer needs: profile upserts, scholarship listing, application
//! submission with XP crediting, and the leaderboard query. Level labels are
//! derived from XP on every read via [`level_for_xp`]; the stored `level`
//! column is cosmetic seed data only.

pub use error::EngineError;
pub use level::level_for_xp;
pub use ops::{ApplicationNew, Engine, EngineBuilder, LeaderboardRow, ProfileUpsert, Scholarship};

pub mod applications;
pub mod scholarships;
pub mod users;

mod error;
mod level;
mod ops;
mod seed;

type ResultEngine<T> = Result<T, EngineError>;
