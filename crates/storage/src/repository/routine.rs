use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::routine::CreateRoutineRequest;
use crate::error::{Result, StorageError};
use crate::models::{Routine, RoutineExercise};

pub struct RoutineRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RoutineRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Built-in routines plus the user's own custom ones, each with its
    /// ordered exercise names.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<(Routine, Vec<RoutineExercise>)>> {
        let routines = sqlx::query_as::<_, Routine>(
            "SELECT id, user_id, name, description, level, duration, is_custom, created_at
             FROM routines
             WHERE is_custom = false OR user_id = $1
             ORDER BY is_custom ASC, name ASC",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        if routines.is_empty() {
            return Ok(Vec::new());
        }

        let routine_ids: Vec<Uuid> = routines.iter().map(|r| r.id).collect();
        let exercises = sqlx::query_as::<_, RoutineExercise>(
            "SELECT id, routine_id, exercise_name, order_index
             FROM routine_exercises WHERE routine_id = ANY($1) ORDER BY order_index ASC",
        )
        .bind(&routine_ids)
        .fetch_all(self.pool)
        .await?;

        let mut by_routine: HashMap<Uuid, Vec<RoutineExercise>> = HashMap::new();
        for exercise in exercises {
            by_routine.entry(exercise.routine_id).or_default().push(exercise);
        }

        Ok(routines
            .into_iter()
            .map(|routine| {
                let exercises = by_routine.remove(&routine.id).unwrap_or_default();
                (routine, exercises)
            })
            .collect())
    }

    /// Creates a custom routine and its exercise list in one transaction.
    pub async fn create(
        &self,
        user_id: Uuid,
        req: &CreateRoutineRequest,
    ) -> Result<(Routine, Vec<RoutineExercise>)> {
        let mut tx = self.pool.begin().await?;

        let routine = sqlx::query_as::<_, Routine>(
            "INSERT INTO routines (user_id, name, description, level, duration, is_custom)
             VALUES ($1, $2, $3, $4, $5, true)
             RETURNING id, user_id, name, description, level, duration, is_custom, created_at",
        )
        .bind(user_id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.level)
        .bind(req.duration)
        .fetch_one(&mut *tx)
        .await?;

        let mut exercises = Vec::with_capacity(req.exercise_names.len());
        for (index, name) in req.exercise_names.iter().enumerate() {
            let exercise = sqlx::query_as::<_, RoutineExercise>(
                "INSERT INTO routine_exercises (routine_id, exercise_name, order_index)
                 VALUES ($1, $2, $3)
                 RETURNING id, routine_id, exercise_name, order_index",
            )
            .bind(routine.id)
            .bind(name)
            .bind(index as i32)
            .fetch_one(&mut *tx)
            .await?;

            exercises.push(exercise);
        }

        tx.commit().await?;

        Ok((routine, exercises))
    }

    /// Deletes a routine the user owns. Built-in routines have no owner and
    /// cannot be deleted through this path.
    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM routines WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
