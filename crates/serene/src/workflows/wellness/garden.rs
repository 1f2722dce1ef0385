use serde::Serialize;

use super::domain::{latest_mood, Habit, JournalEntry, Mood, MoodEntry};

/// Growth stage of the wellness plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantStage {
    Dormant,
    Seed,
    Sprout,
    Leafing,
    Flowering,
    Thriving,
}

impl PlantStage {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s > 30 => Self::Thriving,
            s if s > 15 => Self::Flowering,
            s if s > 5 => Self::Leafing,
            s if s > 1 => Self::Sprout,
            s if s > 0 => Self::Seed,
            _ => Self::Dormant,
        }
    }

    pub const fn level(self) -> u8 {
        match self {
            Self::Dormant => 0,
            Self::Seed => 1,
            Self::Sprout => 2,
            Self::Leafing => 3,
            Self::Flowering => 4,
            Self::Thriving => 5,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Dormant => {
                "Your garden is waiting. Log a mood, habit, or journal entry to plant a seed."
            }
            Self::Seed => "A seed has been planted! Keep up your wellness activities.",
            Self::Sprout => "A sprout appears! Your consistency is helping it grow.",
            Self::Leafing => "Your plant is growing leaves. Great job!",
            Self::Flowering => "Look at that! Your plant is flowering!",
            Self::Thriving => "Your garden is thriving! A beautiful testament to your dedication.",
        }
    }

    pub const fn blooms(self) -> u8 {
        match self {
            Self::Flowering => 1,
            Self::Thriving => 3,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GardenPalette {
    pub primary: &'static str,
    pub secondary: &'static str,
}

impl GardenPalette {
    pub const fn for_mood(mood: Mood) -> Self {
        let (primary, secondary) = match mood {
            Mood::Ecstatic => ("#FBBF24", "#FDE68A"),
            Mood::Happy => ("#EC4899", "#FBCFE8"),
            Mood::Neutral => ("#38BDF8", "#E0F2FE"),
            Mood::Sad => ("#64748B", "#CBD5E1"),
            Mood::Anxious => ("#8B5CF6", "#DDD6FE"),
            Mood::Angry => ("#E11D48", "#FECDD3"),
        };
        Self { primary, secondary }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowerForm {
    Sunflower,
    Bellflower,
    Spiky,
    Pointed,
    Simple,
}

impl FlowerForm {
    pub fn for_mood(mood: Option<Mood>) -> Self {
        match mood {
            Some(Mood::Ecstatic | Mood::Happy) => Self::Sunflower,
            Some(Mood::Sad) => Self::Bellflower,
            Some(Mood::Anxious) => Self::Spiky,
            Some(Mood::Angry) => Self::Pointed,
            Some(Mood::Neutral) | None => Self::Simple,
        }
    }
}

/// Upbeat moods, habit completions, and journal entries each count one point.
pub fn wellness_score(moods: &[MoodEntry], habits: &[Habit], journal: &[JournalEntry]) -> u32 {
    let mood_points = moods.iter().filter(|entry| entry.mood.is_positive()).count();
    let habit_points: usize = habits.iter().map(Habit::completions).sum();
    let total = mood_points + habit_points + journal.len();
    u32::try_from(total).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GardenSnapshot {
    pub score: u32,
    pub stage: PlantStage,
    pub level: u8,
    pub message: &'static str,
    pub latest_mood: Option<Mood>,
    pub palette: GardenPalette,
    pub flower: FlowerForm,
    pub blooms: u8,
}

impl GardenSnapshot {
    pub fn build(moods: &[MoodEntry], habits: &[Habit], journal: &[JournalEntry]) -> Self {
        let score = wellness_score(moods, habits, journal);
        let stage = PlantStage::from_score(score);
        let latest = latest_mood(moods);

        Self {
            score,
            stage,
            level: stage.level(),
            message: stage.message(),
            latest_mood: latest,
            palette: GardenPalette::for_mood(latest.unwrap_or(Mood::Neutral)),
            flower: FlowerForm::for_mood(latest),
            blooms: stage.blooms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_thresholds_are_exclusive() {
        let cases = [
            (0, PlantStage::Dormant),
            (1, PlantStage::Seed),
            (2, PlantStage::Sprout),
            (5, PlantStage::Sprout),
            (6, PlantStage::Leafing),
            (15, PlantStage::Leafing),
            (16, PlantStage::Flowering),
            (30, PlantStage::Flowering),
            (31, PlantStage::Thriving),
        ];
        for (score, expected) in cases {
            assert_eq!(PlantStage::from_score(score), expected, "score {score}");
        }
    }

    #[test]
    fn blooms_appear_only_once_flowering() {
        assert_eq!(PlantStage::Leafing.blooms(), 0);
        assert_eq!(PlantStage::Flowering.blooms(), 1);
        assert_eq!(PlantStage::Thriving.blooms(), 3);
    }

    #[test]
    fn empty_garden_is_dormant_with_neutral_palette() {
        let snapshot = GardenSnapshot::build(&[], &[], &[]);
        assert_eq!(snapshot.score, 0);
        assert_eq!(snapshot.stage, PlantStage::Dormant);
        assert_eq!(snapshot.latest_mood, None);
        assert_eq!(snapshot.palette, GardenPalette::for_mood(Mood::Neutral));
        assert_eq!(snapshot.flower, FlowerForm::Simple);
    }

    #[test]
    fn flower_form_follows_mood() {
        assert_eq!(FlowerForm::for_mood(Some(Mood::Ecstatic)), FlowerForm::Sunflower);
        assert_eq!(FlowerForm::for_mood(Some(Mood::Sad)), FlowerForm::Bellflower);
        assert_eq!(FlowerForm::for_mood(Some(Mood::Anxious)), FlowerForm::Spiky);
        assert_eq!(FlowerForm::for_mood(Some(Mood::Angry)), FlowerForm::Pointed);
    }
}
