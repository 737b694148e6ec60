use std::any::Any;
use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::{Error, applications, health, scholarships, users};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| err.downcast_ref::<String>().cloned())
        .unwrap_or_default();
    tracing::error!("handler panicked: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Error {
            error: "Something went wrong!".to_string(),
        }),
    )
        .into_response()
}

fn router(state: ServerState, static_dir: &str) -> Router {
    let api = Router::new()
        .route("/scholarships", get(scholarships::list))
        .route("/users", post(users::upsert).get(users::leaderboard))
        .route("/users/{name}", get(users::get_by_name))
        .route("/users/{name}/applications", get(applications::list_for_user))
        .route("/applications", post(applications::apply))
        .route("/health", get(health::health))
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .fallback_service(ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(engine: Engine, static_dir: &str) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3001").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, listener, static_dir).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
    static_dir: &str,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state, static_dir)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
    static_dir: &str,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;
    let static_dir = static_dir.to_string();

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener, &static_dir).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
