use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Project;

/// Editable fields of a project, as accepted by the admin form.
pub struct ProjectInput {
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

pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
    sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create(pool: &PgPool, input: &ProjectInput) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "INSERT INTO projects (student_name, project_title, tools_technologies, category,
             linkedin_link, github_link, live_project_link, linkedin_profile_picture,
             main_project_image, project_video)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
    )
    .bind(&input.student_name)
    .bind(&input.project_title)
    .bind(&input.tools_technologies)
    .bind(&input.category)
    .bind(&input.linkedin_link)
    .bind(&input.github_link)
    .bind(&input.live_project_link)
    .bind(&input.linkedin_profile_picture)
    .bind(&input.main_project_image)
    .bind(&input.project_video)
    .fetch_one(pool)
    .await
}

pub async fn update(pool: &PgPool, id: Uuid, input: &ProjectInput) -> Result<Project, sqlx::Error> {
    sqlx::query_as::<_, Project>(
        "UPDATE projects SET student_name = $2, project_title = $3, tools_technologies = $4,
             category = $5, linkedin_link = $6, github_link = $7, live_project_link = $8,
             linkedin_profile_picture = $9, main_project_image = $10, project_video = $11,
             updated_at = now()
         WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(&input.student_name)
    .bind(&input.project_title)
    .bind(&input.tools_technologies)
    .bind(&input.category)
    .bind(&input.linkedin_link)
    .bind(&input.github_link)
    .bind(&input.live_project_link)
    .bind(&input.linkedin_profile_picture)
    .bind(&input.main_project_image)
    .bind(&input.project_video)
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
