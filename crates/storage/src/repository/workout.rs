use std::collections::HashMap;

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::dto::workout::{CreateWorkoutRequest, WorkoutExerciseInput};
use crate::error::{Result, StorageError};
use crate::models::{ExerciseDetail, Workout, WorkoutDetail, WorkoutExercise, WorkoutSet};

pub struct WorkoutRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All workouts for a user with their full exercise/set trees, most
    /// recent first.
    pub async fn list_detailed(&self, user_id: Uuid) -> Result<Vec<WorkoutDetail>> {
        self.fetch_detailed(user_id, false).await
    }

    /// Same as [`Self::list_detailed`] but oldest first, the order the
    /// progression history wants.
    pub async fn list_detailed_ascending(&self, user_id: Uuid) -> Result<Vec<WorkoutDetail>> {
        self.fetch_detailed(user_id, true).await
    }

    async fn fetch_detailed(&self, user_id: Uuid, ascending: bool) -> Result<Vec<WorkoutDetail>> {
        let query = if ascending {
            "SELECT id, user_id, name, date, duration, total_volume, created_at
             FROM workouts WHERE user_id = $1 ORDER BY date ASC"
        } else {
            "SELECT id, user_id, name, date, duration, total_volume, created_at
             FROM workouts WHERE user_id = $1 ORDER BY date DESC"
        };

        let workouts = sqlx::query_as::<_, Workout>(query)
            .bind(user_id)
            .fetch_all(self.pool)
            .await?;

        self.attach_children(workouts).await
    }

    /// Workout metadata only (no exercises/sets), most recent first. Enough
    /// for the overview statistics.
    pub async fn list_meta(&self, user_id: Uuid) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(
            "SELECT id, user_id, name, date, duration, total_volume, created_at
             FROM workouts WHERE user_id = $1 ORDER BY date DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(workouts)
    }

    async fn attach_children(&self, workouts: Vec<Workout>) -> Result<Vec<WorkoutDetail>> {
        if workouts.is_empty() {
            return Ok(Vec::new());
        }

        let workout_ids: Vec<Uuid> = workouts.iter().map(|w| w.id).collect();

        let exercises = sqlx::query_as::<_, WorkoutExercise>(
            "SELECT id, workout_id, exercise_name, order_index
             FROM workout_exercises WHERE workout_id = ANY($1) ORDER BY order_index ASC",
        )
        .bind(&workout_ids)
        .fetch_all(self.pool)
        .await?;

        let exercise_ids: Vec<Uuid> = exercises.iter().map(|e| e.id).collect();

        let mut sets_by_exercise: HashMap<Uuid, Vec<WorkoutSet>> = HashMap::new();
        if !exercise_ids.is_empty() {
            let sets = sqlx::query_as::<_, WorkoutSet>(
                "SELECT id, workout_exercise_id, weight, reps, completed, order_index
                 FROM workout_sets WHERE workout_exercise_id = ANY($1) ORDER BY order_index ASC",
            )
            .bind(&exercise_ids)
            .fetch_all(self.pool)
            .await?;

            for set in sets {
                sets_by_exercise.entry(set.workout_exercise_id).or_default().push(set);
            }
        }

        let mut exercises_by_workout: HashMap<Uuid, Vec<ExerciseDetail>> = HashMap::new();
        for exercise in exercises {
            let sets = sets_by_exercise.remove(&exercise.id).unwrap_or_default();
            exercises_by_workout
                .entry(exercise.workout_id)
                .or_default()
                .push(ExerciseDetail { exercise, sets });
        }

        Ok(workouts
            .into_iter()
            .map(|workout| {
                let exercises = exercises_by_workout.remove(&workout.id).unwrap_or_default();
                WorkoutDetail { workout, exercises }
            })
            .collect())
    }

    /// Inserts the workout and its exercise/set tree in one transaction.
    pub async fn create(&self, user_id: Uuid, req: &CreateWorkoutRequest) -> Result<WorkoutDetail> {
        let mut tx = self.pool.begin().await?;

        let workout = sqlx::query_as::<_, Workout>(
            "INSERT INTO workouts (user_id, name, date, duration, total_volume)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, user_id, name, date, duration, total_volume, created_at",
        )
        .bind(user_id)
        .bind(&req.name)
        .bind(req.date)
        .bind(req.duration)
        .bind(req.total_volume)
        .fetch_one(&mut *tx)
        .await?;

        let exercises = insert_children(&mut tx, workout.id, &req.exercises).await?;

        tx.commit().await?;

        Ok(WorkoutDetail { workout, exercises })
    }

    /// Full replace: updates the workout row, drops all existing exercises
    /// (sets cascade) and reinserts the submitted tree, atomically.
    pub async fn update(
        &self,
        user_id: Uuid,
        id: Uuid,
        req: &CreateWorkoutRequest,
    ) -> Result<WorkoutDetail> {
        let mut tx = self.pool.begin().await?;

        let workout = sqlx::query_as::<_, Workout>(
            "UPDATE workouts SET name = $3, date = $4, duration = $5, total_volume = $6
             WHERE id = $1 AND user_id = $2
             RETURNING id, user_id, name, date, duration, total_volume, created_at",
        )
        .bind(id)
        .bind(user_id)
        .bind(&req.name)
        .bind(req.date)
        .bind(req.duration)
        .bind(req.total_volume)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(StorageError::NotFound)?;

        sqlx::query("DELETE FROM workout_exercises WHERE workout_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let exercises = insert_children(&mut tx, workout.id, &req.exercises).await?;

        tx.commit().await?;

        Ok(WorkoutDetail { workout, exercises })
    }

    pub async fn delete(&self, user_id: Uuid, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// The most recent occurrence of an exercise across the user's
    /// workouts, with its sets in display order. The key must already be
    /// normalized.
    pub async fn last_session(
        &self,
        user_id: Uuid,
        exercise_key: &str,
    ) -> Result<(String, Vec<WorkoutSet>)> {
        let exercise = sqlx::query_as::<_, WorkoutExercise>(
            "SELECT we.id, we.workout_id, we.exercise_name, we.order_index
             FROM workout_exercises we
             JOIN workouts w ON w.id = we.workout_id
             WHERE w.user_id = $1 AND lower(btrim(we.exercise_name)) = $2
             ORDER BY w.date DESC, we.order_index ASC
             LIMIT 1",
        )
        .bind(user_id)
        .bind(exercise_key)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        let sets = sqlx::query_as::<_, WorkoutSet>(
            "SELECT id, workout_exercise_id, weight, reps, completed, order_index
             FROM workout_sets WHERE workout_exercise_id = $1 ORDER BY order_index ASC",
        )
        .bind(exercise.id)
        .fetch_all(self.pool)
        .await?;

        Ok((exercise.exercise_name, sets))
    }
}

async fn insert_children(
    tx: &mut Transaction<'_, Postgres>,
    workout_id: Uuid,
    exercises: &[WorkoutExerciseInput],
) -> Result<Vec<ExerciseDetail>> {
    let mut details = Vec::with_capacity(exercises.len());

    for (exercise_index, exercise) in exercises.iter().enumerate() {
        let inserted = sqlx::query_as::<_, WorkoutExercise>(
            "INSERT INTO workout_exercises (workout_id, exercise_name, order_index)
             VALUES ($1, $2, $3)
             RETURNING id, workout_id, exercise_name, order_index",
        )
        .bind(workout_id)
        .bind(&exercise.name)
        .bind(exercise_index as i32)
        .fetch_one(&mut **tx)
        .await?;

        let mut sets = Vec::with_capacity(exercise.sets.len());
        for (set_index, set) in exercise.sets.iter().enumerate() {
            let inserted_set = sqlx::query_as::<_, WorkoutSet>(
                "INSERT INTO workout_sets (workout_exercise_id, weight, reps, completed, order_index)
                 VALUES ($1, $2, $3, $4, $5)
                 RETURNING id, workout_exercise_id, weight, reps, completed, order_index",
            )
            .bind(inserted.id)
            .bind(set.weight)
            .bind(set.reps)
            .bind(set.completed)
            .bind(set_index as i32)
            .fetch_one(&mut **tx)
            .await?;

            sets.push(inserted_set);
        }

        details.push(ExerciseDetail { exercise: inserted, sets });
    }

    Ok(details)
}
