use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Like {
    pub id: Uuid,
    pub project_id: Uuid,
    pub visitor_hash: String,
    pub created_at: DateTime<Utc>,
}
