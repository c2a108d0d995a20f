/// A newtype that gives exercise names a consistent, normalized identity so
/// "Bench Press", "bench press" and " Bench Press " all refer to the same
/// exercise when keying PR rows or matching workout history.
///
/// The original display form is preserved alongside the normalized key, so
/// responses can echo back what the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedExerciseName {
    display: String,
    key: String,
}

impl NormalizedExerciseName {
    /// Creates a normalized exercise name. The key is the trimmed,
    /// lowercased form of the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use storage::models::NormalizedExerciseName;
    ///
    /// let a = NormalizedExerciseName::new("Bench Press");
    /// let b = NormalizedExerciseName::new("  bench press ");
    ///
    /// assert_eq!(a.key(), b.key());
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        let display = name.into();
        let key = display.trim().to_lowercase();
        Self { display, key }
    }

    /// The normalized key used for lookups and storage uniqueness.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The name as the user entered it.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Whether another raw name refers to the same exercise.
    pub fn matches(&self, other: &str) -> bool {
        self.key == other.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_trimmed_and_lowercased() {
        let name = NormalizedExerciseName::new("  Bench Press ");
        assert_eq!(name.key(), "bench press");
        assert_eq!(name.display(), "  Bench Press ");
    }

    #[test]
    fn test_equality_is_case_insensitive() {
        let a = NormalizedExerciseName::new("Lat Pulldown");
        let b = NormalizedExerciseName::new("LAT PULLDOWN");
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn test_matches_raw_names() {
        let name = NormalizedExerciseName::new("Deadlift");
        assert!(name.matches(" deadlift "));
        assert!(!name.matches("Sumo Deadlift"));
    }
}
