use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
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
    pub likes_count: i64,
    pub comments_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
