pub mod exercise_pr;
pub mod routine;
pub mod workout;
