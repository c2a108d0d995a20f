//! Pure computation over already-fetched workout records: per-session
//! exercise statistics, PR candidates, progression history, dashboard
//! overview numbers, muscle-group load distribution and chart bucketing.
//!
//! Nothing in this module touches the database or reads the clock; callers
//! pass `now`/`today` in, which keeps every function deterministic under
//! test.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, Utc};

use crate::dto::stats::{ChartPoint, OverviewResponse, PrHistoryPoint};
use crate::models::{NormalizedExerciseName, WorkoutDetail, WorkoutSet};
use crate::services::muscle_load;

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Best-effort statistics for one exercise within one workout, computed over
/// qualifying sets only (completed, weight > 0, reps > 0).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionStats {
    pub heaviest_weight: f64,
    pub best_1rm: f64,
    pub best_set_volume: f64,
    pub session_volume: f64,
}

impl SessionStats {
    fn absorb_set(&mut self, weight: f64, reps: i32) {
        let volume = weight * f64::from(reps);
        let one_rm = weight * (1.0 + f64::from(reps) / 30.0);

        if weight > self.heaviest_weight {
            self.heaviest_weight = weight;
        }
        if one_rm > self.best_1rm {
            self.best_1rm = one_rm;
        }
        if volume > self.best_set_volume {
            self.best_set_volume = volume;
        }
        self.session_volume += volume;
    }

    /// Folds in stats from another occurrence of the same exercise within
    /// the same workout: maxima combine as maxima, session volume sums.
    fn accumulate(&mut self, other: &SessionStats) {
        self.heaviest_weight = self.heaviest_weight.max(other.heaviest_weight);
        self.best_1rm = self.best_1rm.max(other.best_1rm);
        self.best_set_volume = self.best_set_volume.max(other.best_set_volume);
        self.session_volume += other.session_volume;
    }

    /// The PR merge: elementwise maximum against stored high-water marks.
    /// This is the in-memory statement of the conditional upsert the
    /// repository issues (`GREATEST(stored, candidate)` per column), with
    /// the session volume compared against the stored best session volume.
    pub fn merge_into(&self, stored: &SessionStats) -> SessionStats {
        SessionStats {
            heaviest_weight: stored.heaviest_weight.max(self.heaviest_weight),
            best_1rm: stored.best_1rm.max(self.best_1rm),
            best_set_volume: stored.best_set_volume.max(self.best_set_volume),
            session_volume: stored.session_volume.max(self.session_volume),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heaviest_weight <= 0.0
            && self.best_1rm <= 0.0
            && self.best_set_volume <= 0.0
            && self.session_volume <= 0.0
    }
}

/// A PR candidate produced from one workout: the exercise identity plus the
/// session statistics to merge into the stored row.
#[derive(Debug, Clone)]
pub struct PrCandidate {
    pub name: NormalizedExerciseName,
    pub stats: SessionStats,
}

fn qualifies(set: &WorkoutSet) -> bool {
    set.completed && set.weight > 0.0 && set.reps > 0
}

/// Computes session statistics over the qualifying sets of one exercise
/// occurrence.
pub fn session_stats<'a>(sets: impl IntoIterator<Item = &'a WorkoutSet>) -> SessionStats {
    let mut stats = SessionStats::default();
    for set in sets.into_iter().filter(|s| qualifies(s)) {
        stats.absorb_set(set.weight, set.reps);
    }
    stats
}

/// Derives the PR candidates implied by a single workout, one per exercise
/// name (case/whitespace-insensitive). Multiple occurrences of the same
/// exercise in one workout accumulate into one candidate. Exercises whose
/// statistics come out all zero are skipped entirely, so no row is ever
/// created for them.
pub fn pr_candidates(workout: &WorkoutDetail) -> Vec<PrCandidate> {
    let mut by_key: Vec<PrCandidate> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for detail in &workout.exercises {
        let name = NormalizedExerciseName::new(detail.exercise.exercise_name.clone());
        let stats = session_stats(&detail.sets);

        match index.get(name.key()) {
            Some(&i) => by_key[i].stats.accumulate(&stats),
            None => {
                index.insert(name.key().to_string(), by_key.len());
                by_key.push(PrCandidate { name, stats });
            }
        }
    }

    by_key.retain(|c| !c.stats.is_empty());
    by_key
}

/// Builds the PR progression series for one exercise across a user's
/// workouts. One point per workout with at least one qualifying set of the
/// exercise; each point reports that session's own statistics, not running
/// maxima. Output is ascending by workout date.
pub fn pr_history(workouts: &[WorkoutDetail], target: &NormalizedExerciseName) -> Vec<PrHistoryPoint> {
    let mut ordered: Vec<&WorkoutDetail> = workouts.iter().collect();
    ordered.sort_by_key(|w| w.workout.date);

    let mut history = Vec::new();
    for detail in ordered {
        let stats = session_stats(
            detail
                .exercises
                .iter()
                .filter(|e| target.matches(&e.exercise.exercise_name))
                .flat_map(|e| e.sets.iter()),
        );

        if stats.is_empty() {
            continue;
        }

        history.push(PrHistoryPoint {
            date: detail.workout.date,
            heaviest_weight: stats.heaviest_weight,
            best_1rm: stats.best_1rm,
            best_set_volume: stats.best_set_volume,
            session_volume: stats.session_volume,
        });
    }
    history
}

/// Dashboard overview: workouts this calendar week (weeks start Monday),
/// lifetime total volume, and the consecutive-day streak ending today.
pub fn overview<'a, I>(workouts: I, today: DateTime<Utc>) -> OverviewResponse
where
    I: IntoIterator<Item = (&'a DateTime<Utc>, f64)>,
{
    let today_date = today.date_naive();
    let week_start = today_date - Days::new(u64::from(today_date.weekday().num_days_from_monday()));

    let mut workouts_this_week = 0i64;
    let mut total_volume = 0.0;
    let mut days: HashSet<NaiveDate> = HashSet::new();

    for (date, volume) in workouts {
        let day = date.date_naive();
        if day >= week_start {
            workouts_this_week += 1;
        }
        total_volume += volume;
        days.insert(day);
    }

    OverviewResponse {
        workouts_this_week,
        total_volume,
        streak: streak(&days, today_date),
    }
}

/// Counts backward from today while each calendar day has at least one
/// workout. A missing today means the streak is already broken.
fn streak(days: &HashSet<NaiveDate>, today: NaiveDate) -> i64 {
    let mut count = 0i64;
    let mut current = today;
    while days.contains(&current) {
        count += 1;
        match current.pred_opt() {
            Some(prev) => current = prev,
            None => break,
        }
    }
    count
}

/// Time-range filter shared by the statistics endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeFilter {
    Week,
    Month,
}

impl RangeFilter {
    /// Parses a query parameter; anything other than "month" (including a
    /// missing or garbage value) falls back to the weekly range.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("month") => Self::Month,
            _ => Self::Week,
        }
    }

    fn cutoff(self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Week => now - Duration::days(7),
            Self::Month => now - Duration::days(30),
        }
    }

    /// Workouts dated strictly after the cutoff.
    fn filter<'a>(
        self,
        workouts: &'a [WorkoutDetail],
        now: DateTime<Utc>,
    ) -> impl Iterator<Item = &'a WorkoutDetail> {
        let cutoff = self.cutoff(now);
        workouts.iter().filter(move |w| w.workout.date > cutoff)
    }
}

/// Estimated muscle-group load over the range: for every exercise present in
/// the static load table, each muscle group accumulates
/// `set_count * share / 100`. All sets count here, completed or not.
/// Exercises without a table entry contribute nothing.
pub fn muscle_distribution(
    workouts: &[WorkoutDetail],
    range: RangeFilter,
    now: DateTime<Utc>,
) -> BTreeMap<String, f64> {
    let mut distribution = BTreeMap::new();

    for workout in range.filter(workouts, now) {
        for detail in &workout.exercises {
            let name = NormalizedExerciseName::new(detail.exercise.exercise_name.as_str());
            let Some(shares) = muscle_load::shares_for(name.key()) else {
                continue;
            };
            let set_count = detail.sets.len() as f64;
            for (group, pct) in shares {
                *distribution.entry((*group).to_string()).or_insert(0.0) +=
                    set_count * pct / 100.0;
            }
        }
    }

    distribution
}

/// Chart metric selection. An unrecognized metric parameter is represented
/// as `None` and contributes zero to every bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartMetric {
    Volume,
    Reps,
    Sets,
    Duration,
}

impl ChartMetric {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "Volume" => Some(Self::Volume),
            "Reps" => Some(Self::Reps),
            "Sets" => Some(Self::Sets),
            "Duration" => Some(Self::Duration),
            _ => None,
        }
    }

    fn value_of(self, workout: &WorkoutDetail) -> f64 {
        match self {
            Self::Volume => workout.workout.total_volume / 1000.0,
            Self::Reps => workout
                .exercises
                .iter()
                .flat_map(|e| e.sets.iter())
                .map(|s| f64::from(s.reps))
                .sum(),
            Self::Sets => workout.exercises.iter().map(|e| e.sets.len() as f64).sum(),
            Self::Duration => f64::from(workout.workout.duration),
        }
    }
}

/// Fixed-shape chart series: 7 weekday buckets for the weekly range, 4
/// week-of-month buckets for the monthly range. Each workout lands in
/// exactly one bucket and buckets sum their contributions.
pub fn aggregated_chart(
    workouts: &[WorkoutDetail],
    metric: Option<ChartMetric>,
    range: RangeFilter,
    now: DateTime<Utc>,
) -> Vec<ChartPoint> {
    let mut points: Vec<ChartPoint> = match range {
        RangeFilter::Week => WEEKDAY_LABELS
            .iter()
            .map(|label| ChartPoint {
                label: (*label).to_string(),
                value: 0.0,
            })
            .collect(),
        RangeFilter::Month => (1..=4)
            .map(|week| ChartPoint {
                label: format!("Week {week}"),
                value: 0.0,
            })
            .collect(),
    };

    for workout in range.filter(workouts, now) {
        let index = match range {
            RangeFilter::Week => workout.workout.date.weekday().num_days_from_monday() as usize,
            RangeFilter::Month => {
                let days_ago = (now - workout.workout.date).num_days();
                (3 - days_ago / 7).clamp(0, 3) as usize
            }
        };

        let value = metric.map_or(0.0, |m| m.value_of(workout));
        points[index].value += value;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExerciseDetail, Workout, WorkoutExercise};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn set(weight: f64, reps: i32, completed: bool) -> WorkoutSet {
        WorkoutSet {
            id: Uuid::new_v4(),
            workout_exercise_id: Uuid::new_v4(),
            weight,
            reps,
            completed,
            order_index: 0,
        }
    }

    fn workout_at(date: DateTime<Utc>, exercises: Vec<(&str, Vec<WorkoutSet>)>) -> WorkoutDetail {
        workout_with_meta(date, 0, 0.0, exercises)
    }

    fn workout_with_meta(
        date: DateTime<Utc>,
        duration: i32,
        total_volume: f64,
        exercises: Vec<(&str, Vec<WorkoutSet>)>,
    ) -> WorkoutDetail {
        let workout_id = Uuid::new_v4();
        WorkoutDetail {
            workout: Workout {
                id: workout_id,
                user_id: Uuid::new_v4(),
                name: None,
                date,
                duration,
                total_volume,
                created_at: date,
            },
            exercises: exercises
                .into_iter()
                .enumerate()
                .map(|(i, (name, sets))| ExerciseDetail {
                    exercise: WorkoutExercise {
                        id: Uuid::new_v4(),
                        workout_id,
                        exercise_name: name.to_string(),
                        order_index: i as i32,
                    },
                    sets,
                })
                .collect(),
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_session_stats_bench_press_example() {
        let sets = vec![set(100.0, 5, true), set(90.0, 10, false)];
        let stats = session_stats(&sets);

        assert_eq!(stats.session_volume, 500.0);
        assert_eq!(stats.heaviest_weight, 100.0);
        assert_eq!(stats.best_set_volume, 500.0);
        assert!((stats.best_1rm - 116.666_666).abs() < 1e-3);
    }

    #[test]
    fn test_incomplete_and_zero_sets_contribute_nothing() {
        let sets = vec![
            set(120.0, 3, false),
            set(0.0, 10, true),
            set(80.0, 0, true),
        ];
        let stats = session_stats(&sets);
        assert!(stats.is_empty());
    }

    #[test]
    fn test_high_rep_sets_use_uncapped_epley() {
        let stats = session_stats(&[set(20.0, 60, true)]);
        assert_eq!(stats.best_1rm, 20.0 * 3.0);
    }

    #[test]
    fn test_merge_is_monotone_and_idempotent() {
        let stored = SessionStats {
            heaviest_weight: 100.0,
            best_1rm: 120.0,
            best_set_volume: 500.0,
            session_volume: 900.0,
        };
        let incoming = session_stats(&[set(90.0, 12, true)]);

        let merged = incoming.merge_into(&stored);
        assert!(merged.heaviest_weight >= stored.heaviest_weight);
        assert!(merged.best_1rm >= stored.best_1rm);
        assert!(merged.best_set_volume >= stored.best_set_volume);
        assert!(merged.session_volume >= stored.session_volume);

        // 90 * 12 = 1080 beats the stored session volume; 1RM 126 beats 120.
        assert_eq!(merged.heaviest_weight, 100.0);
        assert_eq!(merged.session_volume, 1080.0);
        assert_eq!(merged.best_set_volume, 1080.0);

        // Re-merging the same input changes nothing.
        assert_eq!(incoming.merge_into(&merged), merged);
    }

    #[test]
    fn test_pr_candidates_skip_all_zero_exercises() {
        let workout = workout_at(
            at(2026, 8, 3),
            vec![
                ("Bench Press", vec![set(100.0, 5, true)]),
                ("Plank", vec![set(0.0, 1, true)]),
            ],
        );
        let candidates = pr_candidates(&workout);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name.key(), "bench press");
    }

    #[test]
    fn test_pr_candidates_accumulate_duplicate_exercise_names() {
        let workout = workout_at(
            at(2026, 8, 3),
            vec![
                ("Bench Press", vec![set(100.0, 5, true)]),
                ("  bench press ", vec![set(110.0, 2, true)]),
            ],
        );
        let candidates = pr_candidates(&workout);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].stats.heaviest_weight, 110.0);
        // Session volume sums across both occurrences: 500 + 220.
        assert_eq!(candidates[0].stats.session_volume, 720.0);
    }

    #[test]
    fn test_pr_history_reports_per_session_values_not_running_max() {
        let target = NormalizedExerciseName::new("Back Squat");
        let workouts = vec![
            workout_at(at(2026, 8, 1), vec![("Back Squat", vec![set(140.0, 5, true)])]),
            workout_at(at(2026, 8, 4), vec![("Back Squat", vec![set(120.0, 5, true)])]),
            // No qualifying set: present but nothing completed.
            workout_at(at(2026, 8, 6), vec![("Back Squat", vec![set(150.0, 5, false)])]),
            workout_at(at(2026, 8, 7), vec![("Deadlift", vec![set(180.0, 3, true)])]),
        ];

        let history = pr_history(&workouts, &target);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].heaviest_weight, 140.0);
        // Second point dips below the first: no running-max smoothing.
        assert_eq!(history[1].heaviest_weight, 120.0);
        assert!(history[0].date < history[1].date);
    }

    #[test]
    fn test_pr_history_sorts_unordered_input_by_date() {
        let target = NormalizedExerciseName::new("Deadlift");
        let workouts = vec![
            workout_at(at(2026, 8, 5), vec![("Deadlift", vec![set(180.0, 1, true)])]),
            workout_at(at(2026, 8, 1), vec![("Deadlift", vec![set(170.0, 1, true)])]),
        ];
        let history = pr_history(&workouts, &target);
        assert_eq!(history[0].heaviest_weight, 170.0);
        assert_eq!(history[1].heaviest_weight, 180.0);
    }

    #[test]
    fn test_overview_week_starts_monday() {
        // 2026-08-07 is a Friday; the week began Monday the 3rd.
        let today = at(2026, 8, 7);
        let dates = [at(2026, 8, 2), at(2026, 8, 3), at(2026, 8, 6)];
        let workouts: Vec<(&DateTime<Utc>, f64)> = dates.iter().map(|d| (d, 1000.0)).collect();

        let stats = overview(workouts, today);
        // Sunday the 2nd falls in the previous week.
        assert_eq!(stats.workouts_this_week, 2);
        assert_eq!(stats.total_volume, 3000.0);
    }

    #[test]
    fn test_overview_sunday_week_started_six_days_prior() {
        // 2026-08-09 is a Sunday; its week began Monday the 3rd.
        let today = at(2026, 8, 9);
        let dates = [at(2026, 8, 3), at(2026, 8, 1)];
        let workouts: Vec<(&DateTime<Utc>, f64)> = dates.iter().map(|d| (d, 0.0)).collect();

        let stats = overview(workouts, today);
        assert_eq!(stats.workouts_this_week, 1);
    }

    #[test]
    fn test_streak_counts_consecutive_days_back_from_today() {
        let today = at(2026, 8, 7);
        let dates = [at(2026, 8, 7), at(2026, 8, 6)];
        let workouts: Vec<(&DateTime<Utc>, f64)> = dates.iter().map(|d| (d, 0.0)).collect();
        assert_eq!(overview(workouts, today).streak, 2);
    }

    #[test]
    fn test_streak_breaks_on_gap_and_collapses_same_day() {
        let today = at(2026, 8, 7);
        // Two workouts today plus one three days ago: gap yesterday.
        let dates = [at(2026, 8, 7), Utc.with_ymd_and_hms(2026, 8, 7, 6, 0, 0).unwrap(), at(2026, 8, 4)];
        let workouts: Vec<(&DateTime<Utc>, f64)> = dates.iter().map(|d| (d, 0.0)).collect();
        assert_eq!(overview(workouts, today).streak, 1);
    }

    #[test]
    fn test_streak_is_zero_without_a_workout_today() {
        let today = at(2026, 8, 7);
        let dates = [at(2026, 8, 6), at(2026, 8, 5)];
        let workouts: Vec<(&DateTime<Utc>, f64)> = dates.iter().map(|d| (d, 0.0)).collect();
        assert_eq!(overview(workouts, today).streak, 0);
    }

    #[test]
    fn test_range_parse_defaults_to_week() {
        assert_eq!(RangeFilter::parse(None), RangeFilter::Week);
        assert_eq!(RangeFilter::parse(Some("month")), RangeFilter::Month);
        assert_eq!(RangeFilter::parse(Some("bogus")), RangeFilter::Week);
    }

    #[test]
    fn test_muscle_distribution_counts_all_sets() {
        let now = at(2026, 8, 7);
        let workouts = vec![workout_at(
            at(2026, 8, 5),
            vec![("Plank", vec![set(0.0, 30, true), set(0.0, 30, false), set(0.0, 30, false)])],
        )];

        let distribution = muscle_distribution(&workouts, RangeFilter::Week, now);
        assert_eq!(distribution.len(), 1);
        assert_eq!(distribution["Core"], 3.0);
    }

    #[test]
    fn test_muscle_distribution_ignores_unknown_and_out_of_range() {
        let now = at(2026, 8, 7);
        let workouts = vec![
            workout_at(at(2026, 8, 5), vec![("Quantum Squat", vec![set(50.0, 5, true)])]),
            // Dated outside the weekly window.
            workout_at(at(2026, 7, 20), vec![("Plank", vec![set(0.0, 30, true)])]),
        ];

        let distribution = muscle_distribution(&workouts, RangeFilter::Week, now);
        assert!(distribution.is_empty());
    }

    #[test]
    fn test_muscle_distribution_splits_shares() {
        let now = at(2026, 8, 7);
        let workouts = vec![workout_at(
            at(2026, 8, 6),
            vec![("Bench Press", vec![set(80.0, 8, true), set(80.0, 8, true)])],
        )];

        let distribution = muscle_distribution(&workouts, RangeFilter::Week, now);
        assert_eq!(distribution["Chest"], 1.2);
        assert_eq!(distribution["Arms"], 0.6);
        assert_eq!(distribution["Shoulders"], 0.2);
    }

    #[test]
    fn test_weekly_chart_buckets_by_weekday() {
        let now = at(2026, 8, 7);
        // 2026-08-05 is a Wednesday.
        let workouts = vec![workout_with_meta(at(2026, 8, 5), 45, 5000.0, vec![])];

        let points = aggregated_chart(&workouts, Some(ChartMetric::Volume), RangeFilter::Week, now);
        assert_eq!(points.len(), 7);
        assert_eq!(points[2].label, "Wed");
        assert_eq!(points[2].value, 5.0);
        assert!(points.iter().enumerate().filter(|(i, _)| *i != 2).all(|(_, p)| p.value == 0.0));
    }

    #[test]
    fn test_monthly_chart_buckets_by_weeks_ago() {
        let now = at(2026, 8, 28);
        let workouts = vec![
            workout_with_meta(at(2026, 8, 27), 30, 0.0, vec![]), // 1 day ago -> Week 4
            workout_with_meta(at(2026, 8, 18), 40, 0.0, vec![]), // 10 days ago -> Week 3
            workout_with_meta(at(2026, 8, 1), 50, 0.0, vec![]),  // 27 days ago -> Week 1
        ];

        let points =
            aggregated_chart(&workouts, Some(ChartMetric::Duration), RangeFilter::Month, now);
        assert_eq!(points.len(), 4);
        assert_eq!(points[3], ChartPoint { label: "Week 4".into(), value: 30.0 });
        assert_eq!(points[2].value, 40.0);
        assert_eq!(points[0].value, 50.0);
    }

    #[test]
    fn test_reps_and_sets_metrics_ignore_completion() {
        let now = at(2026, 8, 7);
        let workouts = vec![workout_at(
            at(2026, 8, 6),
            vec![
                ("Bench Press", vec![set(100.0, 5, true), set(100.0, 5, false)]),
                ("Lat Pulldown", vec![set(60.0, 12, false)]),
            ],
        )];

        let reps = aggregated_chart(&workouts, Some(ChartMetric::Reps), RangeFilter::Week, now);
        let sets = aggregated_chart(&workouts, Some(ChartMetric::Sets), RangeFilter::Week, now);
        // 2026-08-06 is a Thursday.
        assert_eq!(reps[3].value, 22.0);
        assert_eq!(sets[3].value, 3.0);
    }

    #[test]
    fn test_unknown_metric_yields_zero_filled_buckets() {
        let now = at(2026, 8, 7);
        let workouts = vec![workout_with_meta(at(2026, 8, 6), 45, 9000.0, vec![])];

        assert_eq!(ChartMetric::parse("Bogus"), None);
        let points = aggregated_chart(&workouts, None, RangeFilter::Week, now);
        assert!(points.iter().all(|p| p.value == 0.0));
        assert_eq!(points.len(), 7);
    }
}
