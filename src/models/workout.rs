use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Reps for a set: either a plain count or free text such as
/// "12 each leg".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reps {
    Count(u32),
    Text(String),
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reps::Count(n) => write!(f, "{}", n),
            Reps::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for Reps {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<u32>() {
            Ok(n) => Reps::Count(n),
            Err(_) => Reps::Text(s.to_string()),
        })
    }
}

/// A single exercise completion. Append-only: records are deleted by id
/// but never updated in place.
///
/// `exercise_id` is the stable catalog slug; `exercise_name` is display
/// only, so renaming an exercise in the catalog does not orphan history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedWorkout {
    pub id: Uuid,
    pub exercise_id: String,
    pub exercise_name: String,
    /// Full instant of completion.
    pub date: DateTime<Utc>,
    pub sets_completed: u32,
    pub reps_completed: Reps,
    /// Seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CompletedWorkout {
    pub fn new(
        exercise_id: impl Into<String>,
        exercise_name: impl Into<String>,
        sets: u32,
        reps: Reps,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise_id: exercise_id.into(),
            exercise_name: exercise_name.into(),
            date: Utc::now(),
            sets_completed: sets,
            reps_completed: reps,
            duration: None,
            notes: None,
        }
    }

    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

impl fmt::Display for CompletedWorkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} sets x {} reps",
            self.exercise_name, self.sets_completed, self.reps_completed
        )?;
        if let Some(secs) = self.duration {
            write!(f, " ({}s)", secs)?;
        }
        Ok(())
    }
}

/// Aggregate workout statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStats {
    /// Unique days with at least one completion.
    pub total_workouts: usize,
    /// Total completion records.
    pub total_exercises: usize,
    pub current_streak: u32,
    pub longest_streak: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_exercise: Option<String>,
    pub total_minutes: u32,
}

impl fmt::Display for WorkoutStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Workout days:   {}", self.total_workouts)?;
        writeln!(f, "Exercises done: {}", self.total_exercises)?;
        writeln!(f, "Current streak: {} day(s)", self.current_streak)?;
        writeln!(f, "Longest streak: {} day(s)", self.longest_streak)?;
        if let Some(name) = &self.favorite_exercise {
            writeln!(f, "Favorite:       {}", name)?;
        }
        write!(f, "Total minutes:  {}", self.total_minutes)
    }
}
