use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Like;

pub async fn find(
    pool: &PgPool,
    project_id: Uuid,
    visitor_hash: &str,
) -> Result<Option<Like>, sqlx::Error> {
    sqlx::query_as::<_, Like>("SELECT * FROM likes WHERE project_id = $1 AND visitor_hash = $2")
        .bind(project_id)
        .bind(visitor_hash)
        .fetch_optional(pool)
        .await
}

/// Project ids this visitor has liked. Used to mark cards in the gallery.
pub async fn project_ids_for_visitor(
    pool: &PgPool,
    visitor_hash: &str,
) -> Result<Vec<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>("SELECT project_id FROM likes WHERE visitor_hash = $1")
        .bind(visitor_hash)
        .fetch_all(pool)
        .await
}

/// Toggle the visitor's like on a project. Returns the resulting state and
/// the recomputed `likes_count`. The delete-or-insert and the counter update
/// share one transaction, so the count always equals the rows.
pub async fn toggle(
    pool: &PgPool,
    project_id: Uuid,
    visitor_hash: &str,
) -> Result<(bool, i64), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query("DELETE FROM likes WHERE project_id = $1 AND visitor_hash = $2")
        .bind(project_id)
        .bind(visitor_hash)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let liked = deleted == 0;
    if liked {
        sqlx::query("INSERT INTO likes (project_id, visitor_hash) VALUES ($1, $2)")
            .bind(project_id)
            .bind(visitor_hash)
            .execute(&mut *tx)
            .await?;
    }

    let likes_count: i64 = sqlx::query_scalar(
        "UPDATE projects
         SET likes_count = (SELECT COUNT(*) FROM likes WHERE project_id = $1)
         WHERE id = $1 RETURNING likes_count",
    )
    .bind(project_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok((liked, likes_count))
}
