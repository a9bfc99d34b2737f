//! Completion Tracker — flips the `completed` flag of one week entry.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::roadmap::store::ensure_user_exists;

/// Sets the completion flag for (user, roadmap, week).
///
/// One filtered UPDATE — match-and-set in a single statement, never
/// read-modify-write — so concurrent toggles of different weeks in the
/// same roadmap cannot clobber each other. Same-week concurrent toggles
/// are last-write-wins. Idempotent: re-applying the same value changes
/// nothing. Duplicate week numbers all match, mirroring the array-filter
/// update this replaces.
pub async fn set_week_completion(
    pool: &PgPool,
    user_id: Uuid,
    roadmap_id: Uuid,
    week: i32,
    completed: bool,
) -> Result<(), AppError> {
    let result = sqlx::query(
        r#"
        UPDATE roadmap_weeks w
        SET completed = $4
        FROM roadmaps r
        WHERE w.roadmap_id = r.id
          AND r.user_id = $1
          AND r.id = $2
          AND w.week = $3
        "#,
    )
    .bind(user_id)
    .bind(roadmap_id)
    .bind(week)
    .bind(completed)
    .execute(pool)
    .await?;

    if result.rows_affected() > 0 {
        return Ok(());
    }

    // Nothing matched. Read-only probes to report which piece is missing —
    // the update itself stays a single atomic statement.
    ensure_user_exists(pool, user_id).await?;

    let owned: Option<Uuid> =
        sqlx::query_scalar("SELECT id FROM roadmaps WHERE id = $1 AND user_id = $2")
            .bind(roadmap_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    if owned.is_none() {
        return Err(AppError::RoadmapNotFound(roadmap_id));
    }

    Err(AppError::WeekNotFound { roadmap_id, week })
}
