use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::models::Comment;
use crate::state::SharedState;
use crate::visitor;

/// Comments per IP per project within the sliding window.
const COMMENT_LIMIT: u32 = 5;
const COMMENT_WINDOW_SECS: u64 = 60;

#[derive(Deserialize)]
pub struct CreateComment {
    pub user_name: String,
    pub comment_text: String,
}

pub async fn list(
    State(state): State<SharedState>,
    Path(project_id): Path<Uuid>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let comments = db::comments::list_by_project(&state.pool, project_id).await?;
    Ok(Json(comments))
}

pub async fn create(
    State(state): State<SharedState>,
    Path(project_id): Path<Uuid>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(req): Json<CreateComment>,
) -> Result<(StatusCode, Json<Comment>), AppError> {
    let user_name = req.user_name.trim();
    let comment_text = req.comment_text.trim();

    if user_name.is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }
    if comment_text.is_empty() {
        return Err(AppError::BadRequest("Comment text is required".to_string()));
    }
    if user_name.len() > 100 {
        return Err(AppError::BadRequest(
            "Name must be at most 100 characters".to_string(),
        ));
    }
    if comment_text.len() > 2000 {
        return Err(AppError::BadRequest(
            "Comment must be at most 2000 characters".to_string(),
        ));
    }

    let ip = visitor::client_ip(&headers, Some(addr.ip()), &state.config.trusted_proxies);
    if let Err(retry_after) =
        state
            .engagement_limiter
            .check(project_id, ip, COMMENT_LIMIT, COMMENT_WINDOW_SECS)
    {
        return Err(AppError::RateLimited(format!(
            "Too many comments. Try again in {retry_after} seconds."
        )));
    }

    db::projects::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    let comment = db::comments::create(&state.pool, project_id, user_name, comment_text).await?;

    Ok((StatusCode::CREATED, Json(comment)))
}
