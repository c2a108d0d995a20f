use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{ExercisePr, NormalizedExerciseName};
use crate::services::metrics::SessionStats;

pub struct ExercisePrRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ExercisePrRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All PR rows for a user, alphabetical by exercise name.
    pub async fn list(&self, user_id: Uuid) -> Result<Vec<ExercisePr>> {
        let prs = sqlx::query_as::<_, ExercisePr>(
            "SELECT id, user_id, exercise_name, heaviest_weight, best_1rm,
                    best_set_volume, best_session_volume, updated_at
             FROM exercise_prs WHERE user_id = $1 ORDER BY exercise_name ASC",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(prs)
    }

    pub async fn find(&self, user_id: Uuid, name: &NormalizedExerciseName) -> Result<ExercisePr> {
        let pr = sqlx::query_as::<_, ExercisePr>(
            "SELECT id, user_id, exercise_name, heaviest_weight, best_1rm,
                    best_set_volume, best_session_volume, updated_at
             FROM exercise_prs
             WHERE user_id = $1 AND lower(btrim(exercise_name)) = $2",
        )
        .bind(user_id)
        .bind(name.key())
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(pr)
    }

    /// Monotone merge-upsert: one conditional statement per key, so two
    /// concurrent submissions for the same exercise cannot race each other
    /// into a lost update. Each column keeps the greater of the stored and
    /// submitted value; a fresh key starts from the submitted values.
    pub async fn upsert_max(
        &self,
        user_id: Uuid,
        name: &NormalizedExerciseName,
        stats: &SessionStats,
    ) -> Result<ExercisePr> {
        let pr = sqlx::query_as::<_, ExercisePr>(
            "INSERT INTO exercise_prs
                 (user_id, exercise_name, heaviest_weight, best_1rm,
                  best_set_volume, best_session_volume)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (user_id, lower(btrim(exercise_name)))
             DO UPDATE SET
                 heaviest_weight = GREATEST(exercise_prs.heaviest_weight, EXCLUDED.heaviest_weight),
                 best_1rm = GREATEST(exercise_prs.best_1rm, EXCLUDED.best_1rm),
                 best_set_volume = GREATEST(exercise_prs.best_set_volume, EXCLUDED.best_set_volume),
                 best_session_volume = GREATEST(exercise_prs.best_session_volume, EXCLUDED.best_session_volume),
                 updated_at = now()
             RETURNING id, user_id, exercise_name, heaviest_weight, best_1rm,
                       best_set_volume, best_session_volume, updated_at",
        )
        .bind(user_id)
        .bind(name.display())
        .bind(stats.heaviest_weight)
        .bind(stats.best_1rm)
        .bind(stats.best_set_volume)
        .bind(stats.session_volume)
        .fetch_one(self.pool)
        .await?;

        Ok(pr)
    }
}
