use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::auth::extractor::AuthAdmin;
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;

#[derive(Template)]
#[template(path = "admin.html")]
#[allow(dead_code)]
struct AdminTemplate {
    username: String,
    projects: Vec<ProjectRow>,
}

#[allow(dead_code)]
struct ProjectRow {
    id: String,
    project_title: String,
    student_name: String,
    category: String,
    technologies: String,
    likes_count: i64,
    comments_count: i64,
    created_at: String,
}

pub async fn dashboard(
    auth: AuthAdmin,
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let projects = db::projects::list(&state.pool).await?;

    let rows = projects
        .iter()
        .map(|p| ProjectRow {
            id: p.id.to_string(),
            project_title: p.project_title.clone(),
            student_name: p.student_name.clone(),
            category: p.category.clone().unwrap_or_default(),
            technologies: p.tools_technologies.join(", "),
            likes_count: p.likes_count,
            comments_count: p.comments_count,
            created_at: p.created_at.format("%Y-%m-%d").to_string(),
        })
        .collect();

    let template = AdminTemplate {
        username: auth.username,
        projects: rows,
    };
    Ok(Html(template.render().unwrap_or_default()))
}
