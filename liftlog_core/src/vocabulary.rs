//! Controlled vocabulary of exercise names.
//!
//! Logs may only reference exercises listed here. Variations group the
//! competition-relevant lifts for filtering.

use crate::types::{Exercise, TrainingLog};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Built-in exercise names, in presentation order
const BUILTIN_EXERCISES: &[&str] = &[
    // Squats
    "high bar squats",
    "low bar squats",
    "belted low bar squats",
    "front squats",
    "paused high bar squats",
    "paused low bar squats",
    "paused front squats",
    "db lunges",
    // Pressing
    "close grip bench press",
    "bench press",
    "incline bench press",
    "tng bench press",
    "overhead press",
    "behind the neck press",
    "db incline press",
    "db flyes",
    // Pulling
    "sumo deadlift",
    "conventional deadlift",
    "paused conventional deadlift",
    "stiff leg deadlift",
    "deficit conventional deadlift",
    "block pulls",
    "sumo block pulls",
    "bent over rows",
    "pendlay rows",
    "chest supported rows",
    // Back
    "pull ups",
    "chin ups",
    "lat pulldowns",
    // Arms
    "alternating db curls",
];

const SQUAT_VARIATIONS: &[&str] = &["high bar squats", "low bar squats", "belted low bar squats"];
const BENCH_VARIATIONS: &[&str] = &["close grip bench press", "bench press", "tng bench press"];
const DEADLIFT_VARIATIONS: &[&str] = &["sumo deadlift", "conventional deadlift"];

/// Cached built-in vocabulary - built once and reused across all operations
static DEFAULT_VOCABULARY: Lazy<Vocabulary> = Lazy::new(Vocabulary::builtin);

/// Get a reference to the cached built-in vocabulary
pub fn default_vocabulary() -> &'static Vocabulary {
    &DEFAULT_VOCABULARY
}

/// Ordered set of valid exercise names.
///
/// Lookups are exact and case-sensitive.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    names: Vec<String>,
    index: HashSet<String>,
}

impl Vocabulary {
    /// Build a vocabulary from the given names, dropping repeated entries
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocabulary = Self {
            names: Vec::new(),
            index: HashSet::new(),
        };
        vocabulary.extend(names);
        vocabulary
    }

    /// The built-in vocabulary
    ///
    /// **Note**: prefer `default_vocabulary()` which returns a cached reference.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_EXERCISES.iter().copied())
    }

    /// This vocabulary with additional names appended
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(extra);
        self
    }

    fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if self.index.insert(name.clone()) {
                self.names.push(name);
            }
        }
    }

    pub fn is_valid_exercise(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Validate the vocabulary for consistency
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for name in &self.names {
            if name.trim().is_empty() {
                errors.push("Vocabulary has an empty exercise name".to_string());
            } else if name.trim() != name {
                errors.push(format!(
                    "Exercise '{}' has leading or trailing whitespace",
                    name
                ));
            }
        }

        for variation in Variation::ALL {
            for member in variation.members() {
                if !self.is_valid_exercise(member) {
                    errors.push(format!(
                        "{} variation references unknown exercise '{}'",
                        variation, member
                    ));
                }
            }
        }

        errors
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// Variations
// ============================================================================

/// Named group of related lifts
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Variation {
    Squat,
    Bench,
    Deadlift,
}

impl Variation {
    pub const ALL: [Variation; 3] = [Variation::Squat, Variation::Bench, Variation::Deadlift];

    pub fn members(&self) -> &'static [&'static str] {
        match self {
            Variation::Squat => SQUAT_VARIATIONS,
            Variation::Bench => BENCH_VARIATIONS,
            Variation::Deadlift => DEADLIFT_VARIATIONS,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.members().contains(&name)
    }
}

impl fmt::Display for Variation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variation::Squat => "squat",
            Variation::Bench => "bench",
            Variation::Deadlift => "deadlift",
        };
        f.write_str(name)
    }
}

impl FromStr for Variation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "squat" | "squats" => Ok(Variation::Squat),
            "bench" => Ok(Variation::Bench),
            "deadlift" | "deadlifts" => Ok(Variation::Deadlift),
            other => Err(format!("unknown variation: {}", other)),
        }
    }
}

// ============================================================================
// Selection
// ============================================================================

/// The set of exercises a filter or projection matches
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExerciseSelector {
    Names(Vec<String>),
    Variation(Variation),
}

impl ExerciseSelector {
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExerciseSelector::Names(names.into_iter().map(Into::into).collect())
    }

    /// An empty name list matches every exercise
    pub fn matches(&self, name: &str) -> bool {
        match self {
            ExerciseSelector::Names(names) => names.is_empty() || names.iter().any(|n| n == name),
            ExerciseSelector::Variation(variation) => variation.contains(name),
        }
    }
}

impl From<Variation> for ExerciseSelector {
    fn from(variation: Variation) -> Self {
        ExerciseSelector::Variation(variation)
    }
}

impl TrainingLog {
    /// Workout entries whose name is in `names`, in workout order.
    ///
    /// An empty `names` returns the whole workout.
    pub fn filter_by_names<S: AsRef<str>>(&self, names: &[S]) -> Vec<&Exercise> {
        let names = names.iter().map(|n| AsRef::<str>::as_ref(n).to_string());
        self.filter_by_selector(&ExerciseSelector::Names(names.collect()))
    }

    /// Workout entries belonging to `variation`, in workout order
    pub fn filter_by_variation(&self, variation: Variation) -> Vec<&Exercise> {
        self.filter_by_selector(&ExerciseSelector::Variation(variation))
    }

    /// Workout entries matched by `selector`, in workout order.
    ///
    /// Projections and exports select entries through this method.
    pub fn filter_by_selector(&self, selector: &ExerciseSelector) -> Vec<&Exercise> {
        self.workout
            .iter()
            .filter(|exercise| selector.matches(&exercise.name))
            .collect()
    }
}
