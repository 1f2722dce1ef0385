use super::domain::{AnswerOption, Dichotomy, Polarity, Question, Response};
use super::AssessmentError;

/// Option scores from most positive-letter aligned to most negative-letter aligned.
pub const OPTION_SCORES: [i8; 5] = [4, 2, 0, -2, -4];

/// Ordered, fixed question set for the personality assessment.
#[derive(Debug, Clone)]
pub struct Survey {
    questions: Vec<Question>,
}

impl Survey {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Check that a response names a survey question, sits on that question's
    /// axis, and carries one of its option scores.
    pub fn validate(&self, response: &Response) -> Result<(), AssessmentError> {
        let matches_question = self
            .questions
            .iter()
            .find(|question| question.id == response.question_id)
            .is_some_and(|question| {
                question.dichotomy == response.dichotomy
                    && question
                        .options
                        .iter()
                        .any(|option| option.score == response.score)
            });

        if matches_question {
            Ok(())
        } else {
            Err(AssessmentError::InvalidResponse {
                question_id: response.question_id,
            })
        }
    }

    pub fn current_question(&self, index: usize) -> Result<&Question, AssessmentError> {
        self.questions.get(index).ok_or(AssessmentError::OutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    pub fn is_complete(&self, responses: &[Response]) -> bool {
        responses.len() == self.questions.len()
    }

    pub fn questions_for(&self, dichotomy: Dichotomy) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|question| question.dichotomy == dichotomy)
            .collect()
    }

    /// Percentage shown while `index` is the active question.
    pub fn progress_percent(&self, index: usize) -> f32 {
        if self.questions.is_empty() {
            return 0.0;
        }
        let position = index.min(self.questions.len() - 1) + 1;
        position as f32 / self.questions.len() as f32 * 100.0
    }
}

fn polarity_for(letter: char) -> Polarity {
    match letter {
        'E' => Polarity::E,
        'I' => Polarity::I,
        'S' => Polarity::S,
        'N' => Polarity::N,
        'T' => Polarity::T,
        'F' => Polarity::F,
        'J' => Polarity::J,
        'P' => Polarity::P,
        _ => Polarity::Neutral,
    }
}

fn question(id: u8, text: &'static str, dichotomy: Dichotomy, texts: [&'static str; 5]) -> Question {
    let positive = polarity_for(dichotomy.positive());
    let negative = polarity_for(dichotomy.negative());
    let polarities = [positive, positive, Polarity::Neutral, negative, negative];

    let options = [0, 1, 2, 3, 4].map(|slot| AnswerOption {
        text: texts[slot],
        score: OPTION_SCORES[slot],
        polarity: polarities[slot],
    });

    Question {
        id,
        text,
        dichotomy,
        options,
    }
}

fn standard_questions() -> Vec<Question> {
    use Dichotomy::{EI, JP, SN, TF};

    vec![
        question(
            1,
            "In social situations, I typically find myself:",
            EI,
            [
                "Actively seeking out new people to meet and talk with",
                "Engaging with several people but taking some breaks",
                "Comfortable with either approach depending on my mood",
                "Preferring to have deeper conversations with fewer people",
                "Feeling most comfortable observing or talking with one close friend",
            ],
        ),
        question(
            2,
            "After a long day, I feel most restored by:",
            EI,
            [
                "Going out with friends or engaging in social activities",
                "Doing something social but low-key with close friends",
                "It depends on what kind of day I've had",
                "Having quiet time with a book, movie, or hobby",
                "Being completely alone to recharge in solitude",
            ],
        ),
        question(
            3,
            "When working on a project, I prefer to:",
            EI,
            [
                "Constantly discuss ideas and get feedback from others",
                "Share ideas regularly but also work independently",
                "Balance independent work with occasional collaboration",
                "Work mostly alone and share ideas when they're developed",
                "Work entirely independently and present finished results",
            ],
        ),
        question(
            4,
            "In group discussions, I tend to:",
            EI,
            [
                "Speak up immediately and think out loud as I talk",
                "Share thoughts readily after a moment of consideration",
                "Contribute when I have something specific to add",
                "Listen carefully and speak when asked or when certain",
                "Prefer to listen and reflect, rarely speaking up",
            ],
        ),
        question(
            5,
            "My ideal weekend would involve:",
            EI,
            [
                "Multiple social events and activities with different groups",
                "One or two social activities with friends or family",
                "A mix of social time and personal time",
                "Mostly quiet activities with maybe one low-key social event",
                "Peaceful solitude with personal hobbies and minimal social contact",
            ],
        ),
        question(
            6,
            "When facing a personal problem, I'm most likely to:",
            EI,
            [
                "Immediately call friends or family to talk through it",
                "Discuss it with one or two trusted people",
                "Think about it first, then maybe discuss with others",
                "Reflect on it privately before seeking any outside input",
                "Work through it entirely on my own",
            ],
        ),
        question(
            7,
            "At parties or social gatherings, I usually:",
            EI,
            [
                "Feel energized and could stay until the very end",
                "Enjoy myself but start to feel tired after a few hours",
                "Have fun but need to pace myself with breaks",
                "Enjoy it for a while but prefer to leave on the earlier side",
                "Feel drained quickly and look for opportunities to leave early",
            ],
        ),
        question(
            8,
            "When learning something new, I prefer to start with:",
            SN,
            [
                "Specific examples, facts, and step-by-step procedures",
                "Some concrete examples along with general principles",
                "A balance of specific examples and broader concepts",
                "The big picture and underlying theories first",
                "Abstract concepts and future possibilities",
            ],
        ),
        question(
            9,
            "I am more naturally drawn to:",
            SN,
            [
                "Practical, real-world applications and concrete results",
                "Useful applications with some theoretical interest",
                "Both practical applications and theoretical concepts",
                "Theoretical concepts with potential future applications",
                "Abstract theories and imaginative possibilities",
            ],
        ),
        question(
            10,
            "When giving directions, I tend to:",
            SN,
            [
                "Give specific landmarks, street names, and distances",
                "Provide clear landmarks with some general directions",
                "Mix specific details with general directional guidance",
                "Describe general areas and patterns of movement",
                "Give conceptual directions and expect others to figure out details",
            ],
        ),
        question(
            11,
            "I prefer books, movies, and stories that are:",
            SN,
            [
                "Realistic, based on actual events or plausible scenarios",
                "Mostly realistic with some creative or dramatic elements",
                "Either realistic or fantastical depending on my mood",
                "Imaginative with creative possibilities and symbolism",
                "Highly imaginative, abstract, or futuristic",
            ],
        ),
        question(
            12,
            "When planning, I focus more on:",
            SN,
            [
                "Concrete details, specific steps, and immediate requirements",
                "Important details with some consideration of broader goals",
                "Both immediate needs and longer-term objectives",
                "Overall vision with key milestones and possibilities",
                "Big picture possibilities and future potential",
            ],
        ),
        question(
            13,
            "I trust more in:",
            SN,
            [
                "Direct experience and proven methods",
                "Experience combined with some innovative approaches",
                "Both experience and intuition equally",
                "Intuition backed up by some evidence",
                "Hunches, insights, and future possibilities",
            ],
        ),
        question(
            14,
            "In conversations, I'm more interested in discussing:",
            SN,
            [
                "Current events, practical matters, and real experiences",
                "Current topics with some exploration of implications",
                "A variety of topics both concrete and abstract",
                "Ideas, possibilities, and future trends",
                "Theoretical concepts and imaginative scenarios",
            ],
        ),
        question(
            15,
            "When making important decisions, I primarily rely on:",
            TF,
            [
                "Objective analysis, logic, and factual evidence",
                "Logical analysis while considering some personal factors",
                "A balance of logical analysis and personal values",
                "Personal values while considering logical implications",
                "Personal values, feelings, and impact on relationships",
            ],
        ),
        question(
            16,
            "In conflicts or disagreements, I tend to focus on:",
            TF,
            [
                "Facts, logical arguments, and who is objectively right",
                "Being right while trying to maintain civility",
                "Finding a solution that addresses both facts and feelings",
                "Understanding all perspectives and finding common ground",
                "Maintaining harmony and ensuring everyone feels heard",
            ],
        ),
        question(
            17,
            "When someone asks for my advice, I usually:",
            TF,
            [
                "Help them analyze the situation logically and systematically",
                "Offer logical solutions while acknowledging their feelings",
                "Provide both logical guidance and emotional support",
                "Listen empathetically and help them explore their feelings",
                "Focus primarily on emotional support and understanding",
            ],
        ),
        question(
            18,
            "I feel more successful when I'm seen as:",
            TF,
            [
                "Competent, efficient, and intellectually capable",
                "Capable and fair-minded",
                "Both competent and caring",
                "Understanding and supportive",
                "Caring, empathetic, and emotionally supportive",
            ],
        ),
        question(
            19,
            "When evaluating ideas or proposals, I first consider:",
            TF,
            [
                "Logical consistency, evidence, and objective merit",
                "Merit and feasibility with some consideration of impact",
                "Both logical merit and potential human impact",
                "How it affects people while considering its logical merit",
                "Impact on people, values alignment, and harmony",
            ],
        ),
        question(
            20,
            "In team settings, I naturally tend to:",
            TF,
            [
                "Focus on efficiency, task completion, and objective standards",
                "Balance task focus with attention to team dynamics",
                "Pay equal attention to tasks and team relationships",
                "Ensure good team relationships while working toward goals",
                "Prioritize team harmony and everyone's emotional well-being",
            ],
        ),
        question(
            21,
            "When criticized, my first reaction is usually to:",
            TF,
            [
                "Analyze whether the criticism is logically valid",
                "Consider the merit while noting how it was delivered",
                "Evaluate both the content and emotional impact",
                "Consider how it makes me feel and the relationship impact",
                "Focus on the emotional impact and relationship implications",
            ],
        ),
        question(
            22,
            "I prefer my daily life to be:",
            JP,
            [
                "Highly structured with detailed plans and schedules",
                "Generally planned with some flexibility for changes",
                "Balanced between structure and spontaneity",
                "Loosely structured with plenty of room for spontaneity",
                "Completely flexible and spontaneous",
            ],
        ),
        question(
            23,
            "When starting a new project, I typically:",
            JP,
            [
                "Create a detailed plan with timelines before beginning",
                "Make a general plan and adjust as needed",
                "Do some planning but stay open to changing direction",
                "Start with a loose idea and develop it as I go",
                "Jump in and figure it out completely as I proceed",
            ],
        ),
        question(
            24,
            "My ideal work environment would have:",
            JP,
            [
                "Clear deadlines, structured processes, and predictable schedules",
                "Reasonable structure with some flexibility",
                "A balance of structure and adaptability",
                "Flexibility with loose guidelines and adaptable timelines",
                "Maximum flexibility and freedom to work as inspiration strikes",
            ],
        ),
        question(
            25,
            "When making vacation plans, I prefer to:",
            JP,
            [
                "Plan everything in advance with reservations and itineraries",
                "Plan major elements but leave some details flexible",
                "Plan some key things and leave room for spontaneous activities",
                "Book basic travel and figure out activities when I arrive",
                "Go with minimal planning and see what opportunities arise",
            ],
        ),
        question(
            26,
            "I feel most comfortable when:",
            JP,
            [
                "Things are decided, settled, and I know what to expect",
                "I have plans but can adjust them if needed",
                "I have some structure but options remain open",
                "Multiple options are available and nothing is set in stone",
                "Everything is open-ended with maximum flexibility",
            ],
        ),
        question(
            27,
            "My approach to deadlines is typically to:",
            JP,
            [
                "Complete tasks well ahead of schedule",
                "Finish with some time to spare for review",
                "Complete tasks on time with steady progress",
                "Work steadily but often finish close to the deadline",
                "Work best under pressure and often finish at the last minute",
            ],
        ),
        question(
            28,
            "My living/working space tends to be:",
            JP,
            [
                "Highly organized with everything in its designated place",
                "Generally tidy and organized",
                "Organized enough to find what I need when I need it",
                "Somewhat disorganized but I know where things are",
                "Chaotic but creative - organized chaos that works for me",
            ],
        ),
    ]
}
