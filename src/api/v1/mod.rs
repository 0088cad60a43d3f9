pub mod messages;
pub mod sessions;
pub mod users;

use crate::common::state::AppState;
use axum::Router;
use axum::routing::{get, post};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(sessions::register))
        .route("/auth/login", post(sessions::login))
        .route("/users", get(users::list))
        .route("/users/{username}", get(users::get))
        .route("/users/{username}/to", get(users::messages_to))
        .route("/users/{username}/from", get(users::messages_from))
        .route("/messages", post(messages::create))
        .route("/messages/{id}", get(messages::get))
        .route("/messages/{id}/read", post(messages::mark_read))
}
