pub mod auth;
pub mod comments;
pub mod likes;
pub mod projects;

use axum::routing::{get, post};
use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/v1/auth/session", get(auth::session))
        // Projects
        .route("/api/v1/projects", get(projects::list).post(projects::create))
        .route(
            "/api/v1/projects/{id}",
            get(projects::get)
                .put(projects::update)
                .delete(projects::delete),
        )
        // Comments
        .route(
            "/api/v1/projects/{id}/comments",
            get(comments::list).post(comments::create),
        )
        // Likes
        .route(
            "/api/v1/projects/{id}/like",
            get(likes::status).post(likes::toggle),
        )
}
