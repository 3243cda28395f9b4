use axum::extract::{Path, Query, State};
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::extractor::AuthAdmin;
use crate::db;
use crate::db::projects::ProjectInput;
use crate::error::AppError;
use crate::gallery::{self, ProjectFilter};
use crate::models::Project;
use crate::state::SharedState;
use crate::visitor;

#[derive(Deserialize)]
pub struct ProjectPayload {
    pub student_name: String,
    pub project_title: String,
    pub tools_technologies: Vec<String>,
    pub category: Option<String>,
    pub linkedin_link: Option<String>,
    pub github_link: Option<String>,
    pub live_project_link: Option<String>,
    pub linkedin_profile_picture: Option<String>,
    pub main_project_image: String,
    pub project_video: Option<String>,
}

/// Project as the gallery sees it: the row plus this visitor's like state.
#[derive(Serialize)]
pub struct ProjectListItem {
    #[serde(flatten)]
    pub project: Project,
    pub liked: bool,
}

pub async fn list(
    State(state): State<SharedState>,
    Query(filter): Query<ProjectFilter>,
    jar: CookieJar,
) -> Result<Json<Vec<ProjectListItem>>, AppError> {
    let projects = db::projects::list(&state.pool).await?;
    let projects = gallery::apply(projects, &filter);

    let liked_ids = match visitor::hash_from_jar(&jar) {
        Some(hash) => db::likes::project_ids_for_visitor(&state.pool, &hash).await?,
        None => Vec::new(),
    };

    let items = projects
        .into_iter()
        .map(|project| {
            let liked = liked_ids.contains(&project.id);
            ProjectListItem { project, liked }
        })
        .collect();

    Ok(Json(items))
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Project>, AppError> {
    let project = db::projects::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;
    Ok(Json(project))
}

pub async fn create(
    _auth: AuthAdmin,
    State(state): State<SharedState>,
    Json(req): Json<ProjectPayload>,
) -> Result<Json<Project>, AppError> {
    let input = validate(req)?;
    let project = db::projects::create(&state.pool, &input).await?;

    tracing::info!("Project '{}' created", project.project_title);
    Ok(Json(project))
}

pub async fn update(
    _auth: AuthAdmin,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ProjectPayload>,
) -> Result<Json<Project>, AppError> {
    let input = validate(req)?;
    let project = db::projects::update(&state.pool, id, &input)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => AppError::NotFound("Project not found".to_string()),
            _ => AppError::Database(e),
        })?;

    Ok(Json(project))
}

pub async fn delete(
    _auth: AuthAdmin,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = db::projects::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound("Project not found".to_string()));
    }

    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}

fn validate(req: ProjectPayload) -> Result<ProjectInput, AppError> {
    if req.student_name.trim().is_empty() {
        return Err(AppError::BadRequest("Student name is required".to_string()));
    }
    if req.project_title.trim().is_empty() {
        return Err(AppError::BadRequest("Project title is required".to_string()));
    }
    if req.main_project_image.trim().is_empty() {
        return Err(AppError::BadRequest("Project image is required".to_string()));
    }

    let tools_technologies: Vec<String> = req
        .tools_technologies
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();
    if tools_technologies.is_empty() {
        return Err(AppError::BadRequest(
            "At least one technology is required".to_string(),
        ));
    }

    Ok(ProjectInput {
        student_name: req.student_name.trim().to_string(),
        project_title: req.project_title.trim().to_string(),
        tools_technologies,
        category: req.category.filter(|c| !c.trim().is_empty()),
        linkedin_link: req.linkedin_link.filter(|s| !s.is_empty()),
        github_link: req.github_link.filter(|s| !s.is_empty()),
        live_project_link: req.live_project_link.filter(|s| !s.is_empty()),
        linkedin_profile_picture: req.linkedin_profile_picture.filter(|s| !s.is_empty()),
        main_project_image: req.main_project_image.trim().to_string(),
        project_video: req.project_video.filter(|s| !s.is_empty()),
    })
}
