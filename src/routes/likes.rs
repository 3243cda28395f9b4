use axum::extract::{Path, State};
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::Serialize;
use uuid::Uuid;

use crate::db;
use crate::error::AppError;
use crate::state::SharedState;
use crate::visitor;

#[derive(Serialize)]
pub struct LikeResponse {
    pub liked: bool,
    pub likes_count: i64,
}

#[derive(Serialize)]
pub struct LikeStatus {
    pub liked: bool,
}

/// Toggle this visitor's like. A visitor without a token gets one issued as
/// a cookie on the way out; only its hash ever reaches the store.
pub async fn toggle(
    State(state): State<SharedState>,
    Path(project_id): Path<Uuid>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<LikeResponse>), AppError> {
    db::projects::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

    let existing = jar.get(visitor::VISITOR_COOKIE).map(|c| c.value().to_string());
    let (jar, token) = match existing {
        Some(token) => (jar, token),
        None => {
            let token = visitor::generate_token();
            let jar = jar.add(visitor::build_cookie(&token));
            (jar, token)
        }
    };

    let visitor_hash = visitor::hash_token(&token);
    let (liked, likes_count) = db::likes::toggle(&state.pool, project_id, &visitor_hash).await?;

    Ok((jar, Json(LikeResponse { liked, likes_count })))
}

pub async fn status(
    State(state): State<SharedState>,
    Path(project_id): Path<Uuid>,
    jar: CookieJar,
) -> Result<Json<LikeStatus>, AppError> {
    let liked = match visitor::hash_from_jar(&jar) {
        Some(hash) => db::likes::find(&state.pool, project_id, &hash).await?.is_some(),
        None => false,
    };

    Ok(Json(LikeStatus { liked }))
}
