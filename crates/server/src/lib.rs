use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{run, run_with_listener, spawn_with_listener};

mod applications;
mod health;
mod scholarships;
mod server;
mod users;

pub mod types {
    pub mod scholarship {
        pub use api_types::scholarship::ScholarshipView;
    }

    pub mod user {
        pub use api_types::user::{LeaderboardEntry, ProfileSaved, ProfileUpsert, UserView};
    }

    pub mod application {
        pub use api_types::application::{ApplicationCreated, ApplicationNew, ApplicationView};
    }

    pub mod health {
        pub use api_types::health::Health;
    }
}

pub enum ServerError {
    Engine(EngineError),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        // The duplicate-application conflict ships as 400, not 409; clients
        // depend on the original wire contract.
        EngineError::MissingField(_) | EngineError::AlreadyApplied => StatusCode::BAD_REQUEST,
        EngineError::NotFound(_) => StatusCode::NOT_FOUND,
        EngineError::Criteria(_) | EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        EngineError::Criteria(json_err) => {
            tracing::error!("corrupt criteria document: {json_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let ServerError::Engine(err) = self;
        let status = status_for_engine_error(&err);
        let error = message_for_engine_error(err);

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
