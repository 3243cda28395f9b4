use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "home.html")]
#[allow(dead_code)]
struct HomeTemplate {
    project_count: usize,
}

pub async fn index(State(state): State<SharedState>) -> Result<impl IntoResponse, AppError> {
    let projects = db::projects::list(&state.pool).await?;

    let template = HomeTemplate {
        project_count: projects.len(),
    };
    Ok(Html(template.render().unwrap_or_default()))
}
