use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WellnessError {
    #[error("unknown mood '{0}'")]
    UnknownMood(String),
}

/// Self-reported mood, ordered from most to least upbeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Mood {
    Ecstatic,
    Happy,
    Neutral,
    Sad,
    Anxious,
    Angry,
}

impl Mood {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Ecstatic,
            Self::Happy,
            Self::Neutral,
            Self::Sad,
            Self::Anxious,
            Self::Angry,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Ecstatic => "Ecstatic",
            Self::Happy => "Happy",
            Self::Neutral => "Neutral",
            Self::Sad => "Sad",
            Self::Anxious => "Anxious",
            Self::Angry => "Angry",
        }
    }

    /// Numeric value plotted on the mood trend.
    pub const fn value(self) -> u8 {
        match self {
            Self::Ecstatic => 5,
            Self::Happy => 4,
            Self::Neutral => 3,
            Self::Sad => 2,
            Self::Anxious => 1,
            Self::Angry => 0,
        }
    }

    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Ecstatic | Self::Happy)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mood {
    type Err = WellnessError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|mood| mood.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| WellnessError::UnknownMood(trimmed.to_string()))
    }
}

impl<'de> Deserialize<'de> for Mood {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    pub mood: Mood,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub completed_dates: Vec<NaiveDate>,
}

impl Habit {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            completed_dates: Vec::new(),
        }
    }

    pub fn is_completed_on(&self, day: NaiveDate) -> bool {
        self.completed_dates.contains(&day)
    }

    /// Mark `today` done, or undo it when already marked. Returns the new state.
    pub fn toggle(&mut self, today: NaiveDate) -> bool {
        if let Some(position) = self.completed_dates.iter().position(|day| *day == today) {
            self.completed_dates.remove(position);
            false
        } else {
            self.completed_dates.push(today);
            true
        }
    }

    pub fn completions(&self) -> usize {
        self.completed_dates.len()
    }

    pub fn first_completion(&self) -> Option<NaiveDate> {
        self.completed_dates.iter().min().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
}

/// Mood of the most recent entry. Entries sharing the newest timestamp resolve
/// to the one listed first.
pub fn latest_mood(moods: &[MoodEntry]) -> Option<Mood> {
    moods
        .iter()
        .fold(None::<&MoodEntry>, |latest, entry| match latest {
            Some(current) if current.date >= entry.date => Some(current),
            _ => Some(entry),
        })
        .map(|entry| entry.mood)
}
