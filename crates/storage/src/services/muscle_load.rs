use std::collections::HashMap;
use std::sync::LazyLock;

type LoadShares = &'static [(&'static str, f64)];

/// Estimated muscle-group load shares per exercise, in percent.
///
/// Shares need not sum to 100 for every entry; some exercises only have
/// partial coverage. Lookups go through the normalized exercise name, so
/// callers must not depend on the casing of these keys.
#[rustfmt::skip]
const MUSCLE_LOADS: &[(&str, LoadShares)] = &[
    // Chest
    ("Bench Press", &[("Chest", 60.0), ("Arms", 30.0), ("Shoulders", 10.0)]),
    ("Incline Bench Press", &[("Chest", 50.0), ("Arms", 25.0), ("Shoulders", 25.0)]),
    ("Decline Bench Press", &[("Chest", 55.0), ("Arms", 25.0), ("Shoulders", 20.0)]),
    ("Dumbbell Bench Press", &[("Chest", 60.0), ("Arms", 30.0), ("Shoulders", 10.0)]),
    ("Incline Dumbbell Press", &[("Chest", 50.0), ("Arms", 25.0), ("Shoulders", 25.0)]),
    ("Decline Dumbbell Press", &[("Chest", 55.0), ("Arms", 25.0), ("Shoulders", 20.0)]),
    ("Chest Fly (Dumbbell)", &[("Chest", 80.0), ("Shoulders", 20.0)]),
    ("Cable Fly", &[("Chest", 80.0), ("Shoulders", 20.0)]),
    ("Machine Chest Press", &[("Chest", 60.0), ("Arms", 30.0), ("Shoulders", 10.0)]),
    ("Push-ups", &[("Chest", 60.0), ("Arms", 30.0), ("Shoulders", 10.0)]),
    ("Weighted Push-ups", &[("Chest", 60.0), ("Arms", 30.0), ("Shoulders", 10.0)]),
    ("Pec Deck", &[("Chest", 80.0), ("Shoulders", 20.0)]),
    ("Single-arm Cable Press", &[("Chest", 60.0), ("Arms", 30.0), ("Shoulders", 10.0)]),
    // Back
    ("Pull-ups", &[("Back", 60.0), ("Arms", 30.0), ("Shoulders", 10.0)]),
    ("Chin-ups", &[("Back", 55.0), ("Arms", 35.0), ("Shoulders", 10.0)]),
    ("Lat Pulldown", &[("Back", 60.0), ("Arms", 30.0), ("Shoulders", 10.0)]),
    ("Wide-Grip Lat Pulldown", &[("Back", 65.0), ("Arms", 25.0), ("Shoulders", 10.0)]),
    ("Close-Grip Lat Pulldown", &[("Back", 55.0), ("Arms", 35.0), ("Shoulders", 10.0)]),
    ("Barbell Row", &[("Back", 60.0), ("Arms", 25.0), ("Shoulders", 15.0)]),
    ("Dumbbell Row", &[("Back", 60.0), ("Arms", 25.0), ("Shoulders", 15.0)]),
    ("T-Bar Row", &[("Back", 60.0), ("Arms", 25.0), ("Shoulders", 15.0)]),
    ("Seated Cable Row", &[("Back", 60.0), ("Arms", 25.0), ("Shoulders", 15.0)]),
    ("Inverted Row", &[("Back", 60.0), ("Arms", 25.0), ("Shoulders", 15.0)]),
    ("Deadlift", &[("Back", 50.0), ("Legs", 30.0), ("Glutes", 20.0)]),
    ("Rack Pull", &[("Back", 60.0), ("Legs", 20.0), ("Glutes", 20.0)]),
    ("Straight-arm Pulldown", &[("Back", 70.0), ("Arms", 30.0)]),
    ("Face Pull", &[("Back", 40.0), ("Shoulders", 40.0), ("Arms", 20.0)]),
    ("Back Extension", &[("Back", 70.0), ("Glutes", 20.0), ("Legs", 10.0)]),
    // Shoulders
    ("Overhead Press", &[("Shoulders", 60.0), ("Arms", 25.0), ("Chest", 15.0)]),
    ("Seated Dumbbell Press", &[("Shoulders", 60.0), ("Arms", 25.0), ("Chest", 15.0)]),
    ("Arnold Press", &[("Shoulders", 60.0), ("Arms", 30.0), ("Chest", 10.0)]),
    ("Lateral Raise", &[("Shoulders", 90.0), ("Arms", 10.0)]),
    ("Cable Lateral Raise", &[("Shoulders", 90.0), ("Arms", 10.0)]),
    ("Front Raise", &[("Shoulders", 90.0), ("Arms", 10.0)]),
    ("Rear Delt Fly", &[("Shoulders", 80.0), ("Back", 20.0)]),
    ("Reverse Pec Deck", &[("Shoulders", 80.0), ("Back", 20.0)]),
    ("Upright Row", &[("Shoulders", 60.0), ("Arms", 30.0), ("Back", 10.0)]),
    ("Landmine Press", &[("Shoulders", 60.0), ("Chest", 25.0), ("Arms", 15.0)]),
    ("Y-Raise", &[("Shoulders", 80.0), ("Back", 20.0)]),
    // Biceps
    ("Barbell Curl", &[("Arms", 100.0)]),
    ("EZ-Bar Curl", &[("Arms", 100.0)]),
    ("Dumbbell Curl", &[("Arms", 100.0)]),
    ("Hammer Curl", &[("Arms", 100.0)]),
    ("Preacher Curl", &[("Arms", 100.0)]),
    ("Cable Curl", &[("Arms", 100.0)]),
    ("Concentration Curl", &[("Arms", 100.0)]),
    ("Incline Dumbbell Curl", &[("Arms", 100.0)]),
    ("Reverse Curl", &[("Arms", 100.0)]),
    ("Spider Curl", &[("Arms", 100.0)]),
    // Triceps
    ("Tricep Pushdown", &[("Arms", 100.0)]),
    ("Rope Pushdown", &[("Arms", 100.0)]),
    ("Skull Crushers", &[("Arms", 100.0)]),
    ("Overhead Tricep Extension", &[("Arms", 100.0)]),
    ("Dips", &[("Chest", 40.0), ("Arms", 60.0)]),
    ("Bench Dips", &[("Chest", 40.0), ("Arms", 60.0)]),
    ("Close-Grip Bench Press", &[("Chest", 50.0), ("Arms", 50.0)]),
    ("Cable Overhead Extension", &[("Arms", 100.0)]),
    ("Single-arm Pushdown", &[("Arms", 100.0)]),
    // Legs
    ("Back Squat", &[("Legs", 70.0), ("Glutes", 20.0), ("Back", 10.0)]),
    ("Front Squat", &[("Legs", 70.0), ("Glutes", 20.0), ("Back", 10.0)]),
    ("Goblet Squat", &[("Legs", 70.0), ("Glutes", 20.0), ("Back", 10.0)]),
    ("Leg Press", &[("Legs", 80.0), ("Glutes", 15.0), ("Back", 5.0)]),
    ("Hack Squat", &[("Legs", 80.0), ("Glutes", 15.0), ("Back", 5.0)]),
    ("Bulgarian Split Squat", &[("Legs", 75.0), ("Glutes", 20.0), ("Balance", 5.0)]),
    ("Walking Lunges", &[("Legs", 70.0), ("Glutes", 25.0), ("Balance", 5.0)]),
    ("Reverse Lunges", &[("Legs", 70.0), ("Glutes", 25.0), ("Balance", 5.0)]),
    ("Step-ups", &[("Legs", 70.0), ("Glutes", 25.0), ("Balance", 5.0)]),
    ("Leg Extension", &[("Legs", 100.0)]),
    ("Leg Curl", &[("Legs", 100.0)]),
    ("Romanian Deadlift", &[("Legs", 60.0), ("Glutes", 30.0), ("Back", 10.0)]),
    ("Stiff-Leg Deadlift", &[("Legs", 60.0), ("Glutes", 30.0), ("Back", 10.0)]),
    ("Glute Bridge", &[("Glutes", 80.0), ("Legs", 20.0)]),
    ("Hip Thrust", &[("Glutes", 80.0), ("Legs", 20.0)]),
    ("Cable Kickback", &[("Glutes", 80.0), ("Legs", 20.0)]),
    ("Sumo Deadlift", &[("Legs", 50.0), ("Glutes", 40.0), ("Back", 10.0)]),
    // Calves
    ("Standing Calf Raise", &[("Legs", 100.0)]),
    ("Seated Calf Raise", &[("Legs", 100.0)]),
    ("Single-leg Calf Raise", &[("Legs", 100.0)]),
    ("Leg Press Calf Raise", &[("Legs", 100.0)]),
    // Core
    ("Plank", &[("Core", 100.0)]),
    ("Side Plank", &[("Core", 100.0)]),
    ("Crunch", &[("Core", 100.0)]),
    ("Sit-ups", &[("Core", 100.0)]),
    ("Hanging Leg Raise", &[("Core", 100.0)]),
    ("Lying Leg Raise", &[("Core", 100.0)]),
    ("Cable Crunch", &[("Core", 100.0)]),
    ("Russian Twist", &[("Core", 100.0)]),
    ("Mountain Climbers", &[("Core", 100.0)]),
    ("Bicycle Crunch", &[("Core", 100.0)]),
    ("Ab Wheel Rollout", &[("Core", 100.0)]),
    ("Toe Touches", &[("Core", 100.0)]),
    // Cardio
    ("Running", &[("Cardio", 100.0)]),
    ("Treadmill Walk", &[("Cardio", 100.0)]),
    ("Cycling", &[("Cardio", 100.0)]),
    ("Stationary Bike", &[("Cardio", 100.0)]),
    ("Jump Rope", &[("Cardio", 100.0)]),
    ("Rowing Machine", &[("Cardio", 100.0)]),
    ("Elliptical", &[("Cardio", 100.0)]),
    ("Stair Climber", &[("Cardio", 100.0)]),
    ("HIIT", &[("Cardio", 100.0)]),
    ("Swimming", &[("Cardio", 100.0)]),
    // Full body
    ("Burpees", &[("Full Body", 100.0)]),
    ("Kettlebell Swing", &[("Full Body", 100.0)]),
    ("Farmer\u{2019}s Carry", &[("Full Body", 100.0)]),
    ("Battle Ropes", &[("Full Body", 100.0)]),
    ("Sled Push", &[("Full Body", 100.0)]),
    ("Medicine Ball Slam", &[("Full Body", 100.0)]),
    ("Clean and Press", &[("Full Body", 100.0)]),
    ("Snatch", &[("Full Body", 100.0)]),
];

static BY_NORMALIZED_NAME: LazyLock<HashMap<String, LoadShares>> = LazyLock::new(|| {
    MUSCLE_LOADS
        .iter()
        .map(|(name, shares)| (name.trim().to_lowercase(), *shares))
        .collect()
});

/// Looks up the load shares for a normalized exercise name key.
/// Exercises without an entry are simply not tracked.
pub fn shares_for(normalized_key: &str) -> Option<LoadShares> {
    BY_NORMALIZED_NAME.get(normalized_key).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NormalizedExerciseName;

    #[test]
    fn test_lookup_is_case_and_whitespace_insensitive() {
        let name = NormalizedExerciseName::new("  bench PRESS ");
        let shares = shares_for(name.key()).expect("bench press should be mapped");
        assert_eq!(shares, &[("Chest", 60.0), ("Arms", 30.0), ("Shoulders", 10.0)]);
    }

    #[test]
    fn test_unknown_exercise_has_no_entry() {
        assert!(shares_for("underwater basket weaving").is_none());
    }

    #[test]
    fn test_all_shares_are_positive_percentages() {
        for (name, shares) in MUSCLE_LOADS {
            for (group, pct) in *shares {
                assert!(
                    *pct > 0.0 && *pct <= 100.0,
                    "{name}/{group} has share {pct}"
                );
            }
        }
    }

    #[test]
    fn test_no_duplicate_entries_after_normalization() {
        assert_eq!(BY_NORMALIZED_NAME.len(), MUSCLE_LOADS.len());
    }
}
