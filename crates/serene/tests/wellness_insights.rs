use chrono::{Duration, NaiveDate, TimeZone, Utc};
use serene::workflows::wellness::{
    latest_mood, mood_distribution, screen_message, suggest_lighting, FlowerForm, GardenSnapshot,
    Habit, JournalEntry, Mood, MoodEntry, PlantStage, WellnessAnalytics, CRISIS_KEYWORDS,
};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
}

fn mood_entry(offset: i64, mood: Mood) -> MoodEntry {
    let day = start() + Duration::days(offset);
    MoodEntry {
        id: format!("mood-{offset}"),
        mood,
        date: Utc.from_utc_datetime(&day.and_hms_opt(18, 30, 0).expect("valid time")),
    }
}

fn journal_entry(offset: i64, content: &str) -> JournalEntry {
    let day = start() + Duration::days(offset);
    JournalEntry {
        id: format!("journal-{offset}"),
        content: content.to_string(),
        date: Utc.from_utc_datetime(&day.and_hms_opt(21, 0, 0).expect("valid time")),
    }
}

#[test]
fn garden_grows_with_sustained_activity() {
    let moods: Vec<_> = (0..12).map(|offset| mood_entry(offset, Mood::Happy)).collect();
    let mut habit = Habit::new("habit-1", "Gratitude list");
    for offset in 0..12 {
        habit.toggle(start() + Duration::days(offset));
    }
    let journal: Vec<_> = (0..8)
        .map(|offset| journal_entry(offset, "A quiet, steady day."))
        .collect();

    let snapshot = GardenSnapshot::build(&moods, &[habit], &journal);
    assert_eq!(snapshot.score, 32);
    assert_eq!(snapshot.stage, PlantStage::Thriving);
    assert_eq!(snapshot.blooms, 3);
    assert_eq!(snapshot.flower, FlowerForm::Sunflower);
    assert_eq!(snapshot.palette.primary, "#EC4899");
}

#[test]
fn unhappy_moods_do_not_count_toward_the_garden() {
    let moods = vec![mood_entry(0, Mood::Sad), mood_entry(1, Mood::Angry)];
    let snapshot = GardenSnapshot::build(&moods, &[], &[]);

    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.stage, PlantStage::Dormant);
    assert_eq!(snapshot.latest_mood, Some(Mood::Angry));
    assert_eq!(snapshot.flower, FlowerForm::Pointed);
}

#[test]
fn sanctuary_follows_the_most_recent_mood() {
    let moods = vec![mood_entry(3, Mood::Anxious), mood_entry(1, Mood::Happy)];
    assert_eq!(latest_mood(&moods), Some(Mood::Anxious));
    assert_eq!(suggest_lighting(&moods).name, "Lavender Calm");
}

#[test]
fn analytics_bundle_reports_every_chart() {
    let moods = vec![
        mood_entry(0, Mood::Happy),
        mood_entry(0, Mood::Sad),
        mood_entry(2, Mood::Ecstatic),
    ];
    let mut habit = Habit::new("habit-1", "Evening stretch routine");
    habit.toggle(start());
    habit.toggle(start() + Duration::days(1));

    let analytics = WellnessAnalytics::build(&moods, &[habit], start() + Duration::days(3));

    assert_eq!(analytics.total_moods, 3);
    assert_eq!(analytics.mood_trend.len(), 2);
    assert_eq!(analytics.mood_trend[0].average, 3.0);
    assert_eq!(analytics.mood_trend[1].average, 5.0);
    assert_eq!(analytics.habit_rates[0].name, "Evening stre...");
    assert_eq!(analytics.habit_rates[0].rate, 50.0);
    assert_eq!(analytics.mood_distribution, mood_distribution(&moods));
}

#[test]
fn every_crisis_keyword_is_detected_on_its_own() {
    for keyword in CRISIS_KEYWORDS {
        let screening = screen_message(&format!("lately: {}", keyword.to_uppercase()));
        assert!(screening.flagged, "{keyword}");
        assert!(screening.matched.contains(&keyword));
    }
}
