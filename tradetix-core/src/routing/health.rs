use crate::{application::ApplicationState, dto::output};
use axum::{extract::State, routing::get, Json, Router};
use std::time::Instant;
use time::OffsetDateTime;

pub fn routing() -> Router<ApplicationState> {
    Router::new()
        .route("/api/ping", get(ping))
        .route("/api/health", get(health))
}

async fn ping() -> Json<output::Pong> {
    Json(output::Pong { response: "pong" })
}

async fn health(State(started_at): State<Instant>) -> Json<output::Health> {
    Json(output::Health {
        status: "UP",
        uptime: started_at.elapsed().as_secs_f64(),
        timestamp: OffsetDateTime::now_utc(),
    })
}
