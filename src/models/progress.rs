use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Body measurements in centimeters. All optional; an entry records
/// whichever were taken.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_arm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_arm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hips: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_thigh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_thigh: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_calf: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_calf: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoType {
    Front,
    Side,
    Back,
}

impl fmt::Display for PhotoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoType::Front => write!(f, "front"),
            PhotoType::Side => write!(f, "side"),
            PhotoType::Back => write!(f, "back"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPhoto {
    pub id: String,
    pub uri: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub photo_type: PhotoType,
}

/// A periodic body check-in: weight, optional measurements and photos.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub timestamp: DateTime<Utc>,
    /// Kilograms.
    pub weight: f64,
    #[serde(default)]
    pub measurements: Measurements,
    #[serde(default)]
    pub photos: Vec<ProgressPhoto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ProgressEntry {
    pub fn new(date: NaiveDate, weight: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            timestamp: Utc::now(),
            weight,
            measurements: Measurements::default(),
            photos: Vec::new(),
            notes: None,
        }
    }

    pub fn with_measurements(mut self, measurements: Measurements) -> Self {
        self.measurements = measurements;
        self
    }

    pub fn with_photos(mut self, photos: Vec<ProgressPhoto>) -> Self {
        self.photos = photos;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Partial update for an existing entry; unset fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct ProgressEntryUpdate {
    pub date: Option<NaiveDate>,
    pub weight: Option<f64>,
    pub measurements: Option<Measurements>,
    pub photos: Option<Vec<ProgressPhoto>>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightDataPoint {
    pub date: NaiveDate,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionDataPoint {
    pub date: NaiveDate,
    pub calories: f64,
    pub protein: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStats {
    pub total_entries: usize,
    /// Latest weight minus oldest weight, one decimal. Negative when
    /// weight was lost.
    pub weight_gained: f64,
    /// Unique calendar days with an entry.
    pub days_tracked: usize,
    pub start_weight: f64,
    pub current_weight: f64,
}

impl fmt::Display for ProgressStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Entries:        {}", self.total_entries)?;
        writeln!(f, "Days tracked:   {}", self.days_tracked)?;
        writeln!(f, "Start weight:   {:.1} kg", self.start_weight)?;
        writeln!(f, "Current weight: {:.1} kg", self.current_weight)?;
        write!(f, "Change:         {:+.1} kg", self.weight_gained)
    }
}
