//! Derived views over mood, habit, and journal records: the wellness garden,
//! sanctuary lighting, analytics charts, and crisis-language screening.

pub mod analytics;
pub mod domain;
pub mod garden;
pub mod safety;
pub mod sanctuary;

pub use analytics::{
    completion_rate, daily_mood_trend, habit_completion_rates, mood_distribution, DailyMood,
    HabitRate, MoodCount, WellnessAnalytics,
};
pub use domain::{latest_mood, Habit, JournalEntry, Mood, MoodEntry, WellnessError};
pub use garden::{wellness_score, FlowerForm, GardenPalette, GardenSnapshot, PlantStage};
pub use safety::{screen_message, CrisisScreening, CRISIS_KEYWORDS};
pub use sanctuary::{lighting_presets, preset_for, suggest_lighting, LightingPreset};
