use chrono::{Duration, NaiveDate, TimeZone, Utc};
use clap::Args;
use serene::error::AppError;
use serene::workflows::assessment::{
    evaluate_answers, profiles, resolve_profile, AssessmentResult, AssessmentSession, Dichotomy,
    Survey, SurveyState, TypeCode, TypeProfile,
};
use serene::workflows::wellness::{
    screen_message, suggest_lighting, GardenSnapshot, Habit, JournalEntry, Mood, MoodEntry,
    WellnessAnalytics,
};

use crate::infra::parse_date;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Option index per question in survey order (0 = strongly agree, 4 = strongly disagree)
    #[arg(long, value_delimiter = ',', required = true)]
    pub(crate) answers: Vec<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct ProfileArgs {
    /// Four-letter type code such as INFJ
    pub(crate) code: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Mood to log for today in the sample wellness data (e.g. happy, anxious)
    #[arg(long)]
    pub(crate) mood: Option<String>,
    /// Override the reporting date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip the wellness portion of the demo.
    #[arg(long)]
    pub(crate) skip_wellness: bool,
}

pub(crate) fn print_questions() {
    let survey = Survey::standard();
    println!("Personality survey ({} questions)", survey.len());
    for question in survey.questions() {
        println!("\n{:>2}. [{}] {}", question.id, question.dichotomy, question.text);
        for (index, option) in question.options.iter().enumerate() {
            println!("    {index}) {} ({:+})", option.text, option.score);
        }
    }
}

pub(crate) fn print_score(args: ScoreArgs) -> Result<(), AppError> {
    let survey = Survey::standard();
    let result = evaluate_answers(&survey, &args.answers)?;
    render_result(&result);
    Ok(())
}

pub(crate) fn print_profile(args: ProfileArgs) -> Result<(), AppError> {
    let code: TypeCode = args.code.parse()?;
    let profile = resolve_profile(code)?;
    render_profile(profile);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        mood,
        today,
        skip_wellness,
    } = args;

    let today_mood = mood.as_deref().map(str::parse::<Mood>).transpose()?;
    let today = today.unwrap_or_else(|| Utc::now().date_naive());

    println!("Serene demo");
    println!("\nPersonality assessment session");
    let survey = Survey::standard();
    let mut session = AssessmentSession::new();
    for option_index in scripted_answers(&survey) {
        let question_id = session
            .current_question(&survey)
            .map(|question| question.id)
            .unwrap_or_default();
        match session.answer(&survey, option_index)? {
            SurveyState::InProgress { index } if index % 7 == 0 => {
                println!(
                    "- answered question {question_id} -> now on question {} ({:.0}%)",
                    index + 1,
                    survey.progress_percent(*index)
                );
            }
            SurveyState::Complete { .. } => {
                println!("- answered question {question_id} -> complete");
            }
            SurveyState::InProgress { .. } => {}
        }
    }

    if let Some(result) = session.result() {
        render_result(result);
    }

    if let Err(err) = session.answer(&survey, 0) {
        println!("\nFurther answers are refused: {err}");
    }
    session.reset();
    println!(
        "Session reset: {} responses, state {}",
        session.answered(),
        session.state().label()
    );

    if skip_wellness {
        return Ok(());
    }

    let (moods, habits, journal) = sample_wellness_data(today, today_mood);

    println!("\nWellness garden");
    let garden = GardenSnapshot::build(&moods, &habits, &journal);
    println!(
        "- score {} | stage {} ({:?}) | {} bloom(s)",
        garden.score, garden.level, garden.stage, garden.blooms
    );
    println!("- {}", garden.message);
    if let Some(latest) = garden.latest_mood {
        println!(
            "- flowers reflect {latest}: {:?} in {} / {}",
            garden.flower, garden.palette.primary, garden.palette.secondary
        );
    }

    let lighting = suggest_lighting(&moods);
    println!(
        "\nSanctuary lighting suggestion: {} ({})",
        lighting.name, lighting.color_hex
    );

    println!("\nAnalytics as of {today}");
    let analytics = WellnessAnalytics::build(&moods, &habits, today);
    for day in &analytics.mood_trend {
        println!("- {}: average mood {:.1}", day.date, day.average);
    }
    for habit in &analytics.habit_rates {
        println!("- {}: {:.0}% completion", habit.name, habit.rate);
    }
    let distribution: Vec<String> = analytics
        .mood_distribution
        .iter()
        .filter(|entry| entry.count > 0)
        .map(|entry| format!("{} x{}", entry.mood, entry.count))
        .collect();
    println!("- distribution: {}", distribution.join(", "));

    if let Some(entry) = journal.last() {
        let screening = screen_message(&entry.content);
        println!(
            "\nCrisis screen on latest journal entry: {}",
            if screening.flagged {
                "flagged, share crisis resources"
            } else {
                "clear"
            }
        );
    }

    Ok(())
}

fn render_result(result: &AssessmentResult) {
    println!("\nType {}", result.type_code);
    for dichotomy in Dichotomy::ordered() {
        let sum = result.axis_scores.get(dichotomy);
        println!(
            "- {dichotomy}: {sum:+} -> {}",
            result.type_code.letter(dichotomy)
        );
    }
    render_profile(result.profile);
}

fn render_profile(profile: &TypeProfile) {
    println!("\n{} - {} \"{}\"", profile.code, profile.name, profile.nickname);
    println!("{}", profile.description);
    println!("Strengths: {}", profile.strengths.join(", "));
    println!("Challenges: {}", profile.challenges.join(", "));
    println!("Careers: {}", profile.careers.join(", "));
    println!("Relationships: {}", profile.relationships);
    println!("Population: {}", profile.population);
    println!("({} profiles available)", profiles().len());
}

/// Leans extraverted, intuitive, feeling, and perceiving with a few neutral answers.
fn scripted_answers(survey: &Survey) -> Vec<usize> {
    survey
        .questions()
        .iter()
        .enumerate()
        .map(|(position, question)| match (question.dichotomy, position % 3) {
            (_, 2) => 2,
            (Dichotomy::EI, _) => 1,
            (Dichotomy::SN | Dichotomy::TF | Dichotomy::JP, _) => 3,
        })
        .collect()
}

fn sample_wellness_data(
    today: NaiveDate,
    today_mood: Option<Mood>,
) -> (Vec<MoodEntry>, Vec<Habit>, Vec<JournalEntry>) {
    let history = [
        Mood::Neutral,
        Mood::Anxious,
        Mood::Happy,
        Mood::Happy,
        Mood::Sad,
        Mood::Ecstatic,
        Mood::Happy,
    ];
    let at_nine = |day: NaiveDate| {
        day.and_hms_opt(9, 0, 0)
            .map(|naive| Utc.from_utc_datetime(&naive))
            .unwrap_or_else(Utc::now)
    };

    let mut moods: Vec<MoodEntry> = history
        .iter()
        .enumerate()
        .map(|(offset, mood)| {
            let day = today - Duration::days((history.len() - offset) as i64);
            MoodEntry {
                id: format!("mood-{offset}"),
                mood: *mood,
                date: at_nine(day),
            }
        })
        .collect();
    if let Some(mood) = today_mood {
        moods.push(MoodEntry {
            id: "mood-today".to_string(),
            mood,
            date: at_nine(today),
        });
    }

    let mut meditate = Habit::new("habit-1", "Morning meditation");
    let mut walk = Habit::new("habit-2", "Walk");
    for offset in 0..6 {
        let day = today - Duration::days(offset);
        meditate.toggle(day);
        if offset % 2 == 0 {
            walk.toggle(day);
        }
    }

    let journal = vec![
        JournalEntry {
            id: "journal-1".to_string(),
            content: "Slept well and felt calm after the walk.".to_string(),
            date: at_nine(today - Duration::days(2)),
        },
        JournalEntry {
            id: "journal-2".to_string(),
            content: "Busy day, but grateful for a long call with a friend.".to_string(),
            date: at_nine(today - Duration::days(1)),
        },
    ];

    (moods, vec![meditate, walk], journal)
}
