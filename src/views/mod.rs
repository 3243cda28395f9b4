pub mod admin;
pub mod auth;
pub mod home;
pub mod portfolio;

use axum::routing::get;
use axum::Router;

use crate::state::SharedState;

pub fn view_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(home::index))
        .route("/portfolio", get(portfolio::index))
        .route("/login", get(auth::login_page))
        .route("/admin", get(admin::dashboard))
}
