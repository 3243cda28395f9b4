use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Comment;

pub async fn list_by_project(pool: &PgPool, project_id: Uuid) -> Result<Vec<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        "SELECT * FROM comments WHERE project_id = $1 ORDER BY created_at DESC",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await
}

/// Insert a comment and bring `comments_count` back in line with the rows,
/// inside one transaction.
pub async fn create(
    pool: &PgPool,
    project_id: Uuid,
    user_name: &str,
    comment_text: &str,
) -> Result<Comment, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let comment = sqlx::query_as::<_, Comment>(
        "INSERT INTO comments (project_id, user_name, comment_text)
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(project_id)
    .bind(user_name)
    .bind(comment_text)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        "UPDATE projects
         SET comments_count = (SELECT COUNT(*) FROM comments WHERE project_id = $1)
         WHERE id = $1",
    )
    .bind(project_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(comment)
}
