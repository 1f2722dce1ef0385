use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{Habit, Mood, MoodEntry};

const TREND_WINDOW_DAYS: usize = 30;
const HABIT_LABEL_LIMIT: usize = 15;
const HABIT_LABEL_KEEP: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyMood {
    pub date: NaiveDate,
    pub average: f32,
    pub entries: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HabitRate {
    pub name: String,
    pub rate: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodCount {
    pub mood: Mood,
    pub count: usize,
}

/// Combined analytics view served to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellnessAnalytics {
    pub mood_trend: Vec<DailyMood>,
    pub habit_rates: Vec<HabitRate>,
    pub mood_distribution: Vec<MoodCount>,
    pub total_moods: usize,
}

impl WellnessAnalytics {
    pub fn build(moods: &[MoodEntry], habits: &[Habit], today: NaiveDate) -> Self {
        Self {
            mood_trend: daily_mood_trend(moods),
            habit_rates: habit_completion_rates(habits, today),
            mood_distribution: mood_distribution(moods),
            total_moods: moods.len(),
        }
    }
}

/// Average mood value per UTC day, oldest first, limited to the most recent
/// thirty days that have entries.
pub fn daily_mood_trend(moods: &[MoodEntry]) -> Vec<DailyMood> {
    let mut by_day: BTreeMap<NaiveDate, (u32, usize)> = BTreeMap::new();
    for entry in moods {
        let slot = by_day.entry(entry.date.date_naive()).or_default();
        slot.0 += u32::from(entry.mood.value());
        slot.1 += 1;
    }

    let skip = by_day.len().saturating_sub(TREND_WINDOW_DAYS);
    by_day
        .into_iter()
        .skip(skip)
        .map(|(date, (total, entries))| DailyMood {
            date,
            average: total as f32 / entries as f32,
            entries,
        })
        .collect()
}

pub fn habit_completion_rates(habits: &[Habit], today: NaiveDate) -> Vec<HabitRate> {
    habits
        .iter()
        .map(|habit| HabitRate {
            name: short_label(&habit.name),
            rate: completion_rate(habit, today),
        })
        .collect()
}

/// Percentage of days completed since the first completion, capped at 100.
pub fn completion_rate(habit: &Habit, today: NaiveDate) -> f32 {
    let Some(first) = habit.first_completion() else {
        return 0.0;
    };

    let elapsed = (today - first).num_days().max(0) + 1;
    let rate = habit.completions() as f32 / elapsed as f32 * 100.0;
    rate.min(100.0)
}

pub fn mood_distribution(moods: &[MoodEntry]) -> Vec<MoodCount> {
    Mood::ordered()
        .into_iter()
        .map(|mood| MoodCount {
            mood,
            count: moods.iter().filter(|entry| entry.mood == mood).count(),
        })
        .collect()
}

fn short_label(name: &str) -> String {
    if name.chars().count() > HABIT_LABEL_LIMIT {
        let head: String = name.chars().take(HABIT_LABEL_KEEP).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}
