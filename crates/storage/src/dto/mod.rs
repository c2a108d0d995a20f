pub mod exercise;
pub mod exercise_pr;
pub mod routine;
pub mod stats;
pub mod workout;
