mod exercise_name;
mod exercise_pr;
mod routine;
mod workout;

pub use exercise_name::NormalizedExerciseName;
pub use exercise_pr::ExercisePr;
pub use routine::{Routine, RoutineExercise};
pub use workout::{ExerciseDetail, Workout, WorkoutDetail, WorkoutExercise, WorkoutSet};
