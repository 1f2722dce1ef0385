use super::domain::{TypeCode, TypeProfile};
use super::AssessmentError;

pub fn profiles() -> &'static [TypeProfile] {
    &PROFILES
}

/// Look up the static profile for `code`.
///
/// Every code produced by the classifier has an entry; a miss means the table
/// was edited incorrectly and is surfaced rather than defaulted.
pub fn resolve_profile(code: TypeCode) -> Result<&'static TypeProfile, AssessmentError> {
    PROFILES
        .iter()
        .find(|profile| profile.code == code.as_str())
        .ok_or_else(|| AssessmentError::UnknownType(code.to_string()))
}

static PROFILES: [TypeProfile; 16] = [
    TypeProfile {
        code: "ENTJ",
        name: "The Commander",
        nickname: "Natural Leader",
        description: "Strategic, decisive, and ambitious natural-born leaders. You excel at organizing people and resources to achieve long-term objectives. Your combination of vision and execution makes you effective at turning ideas into reality.",
        strengths: &[
            "Strategic thinking",
            "Natural leadership",
            "Efficiency and productivity",
            "Confident decision-making",
            "Long-term planning",
            "Inspiring others toward goals",
        ],
        challenges: &[
            "May seem intimidating to others",
            "Can be impatient with inefficiency",
            "Sometimes overlook personal feelings",
            "May struggle with work-life balance",
        ],
        careers: &[
            "CEO/Executive",
            "Project Manager",
            "Management Consultant",
            "Lawyer",
            "Investment Banker",
            "Entrepreneur",
        ],
        relationships: "You bring leadership and vision to relationships but may need to remember to show warmth and consideration for others' emotional needs.",
        population: "2-4% of population",
    },
    TypeProfile {
        code: "ENTP",
        name: "The Debater",
        nickname: "Innovative Visionary",
        description: "Innovative, creative, and intellectually curious. You love exploring new possibilities, challenging conventional thinking, and engaging in stimulating debates. Your quick wit and adaptability make you excellent at generating creative solutions.",
        strengths: &[
            "Innovation and creativity",
            "Adaptability",
            "Charisma and communication",
            "Quick thinking",
            "Seeing possibilities",
            "Intellectual curiosity",
        ],
        challenges: &[
            "May struggle with follow-through",
            "Can be perceived as argumentative",
            "Difficulty with routine tasks",
            "Sometimes neglects details",
        ],
        careers: &[
            "Entrepreneur",
            "Marketing Professional",
            "Journalist",
            "Consultant",
            "Inventor",
            "Psychologist",
        ],
        relationships: "You bring excitement and intellectual stimulation to relationships but may need to work on following through on commitments and being attentive to partners' emotional needs.",
        population: "2-3% of population",
    },
    TypeProfile {
        code: "ENFJ",
        name: "The Protagonist",
        nickname: "Inspiring Teacher",
        description: "Charismatic, empathetic leaders who are genuinely interested in helping others reach their potential. You have a natural ability to understand and motivate people, making you effective at bringing out the best in others.",
        strengths: &[
            "Empathy and understanding",
            "Communication skills",
            "Inspiring and motivating others",
            "Organized and goal-oriented",
            "Reading people well",
            "Creating harmony",
        ],
        challenges: &[
            "May neglect own needs",
            "Can be overly sensitive to criticism",
            "Sometimes take on too much responsibility",
            "May struggle with difficult decisions affecting others",
        ],
        careers: &[
            "Teacher",
            "Counselor",
            "Human Resources",
            "Non-profit Leader",
            "Sales",
            "Public Relations",
        ],
        relationships: "You are naturally caring and supportive in relationships, though you may need to ensure you're taking care of your own needs and setting appropriate boundaries.",
        population: "3-4% of population",
    },
    TypeProfile {
        code: "ENFP",
        name: "The Campaigner",
        nickname: "Enthusiastic Free Spirit",
        description: "Enthusiastic, creative, and sociable free spirits who see life as full of exciting possibilities. Your warmth and imagination inspire others, and you excel at connecting with people and generating new ideas.",
        strengths: &[
            "Enthusiasm and energy",
            "Creativity and imagination",
            "People skills",
            "Flexibility and adaptability",
            "Seeing potential in others",
            "Generating ideas",
        ],
        challenges: &[
            "Difficulty with routine tasks",
            "May struggle with focus",
            "Sometimes overcommit",
            "Can be disorganized",
        ],
        careers: &[
            "Marketing",
            "Journalism",
            "Psychology",
            "Art/Creative Fields",
            "Public Relations",
            "Entrepreneurship",
        ],
        relationships: "You bring warmth, enthusiasm, and creativity to relationships but may need to work on follow-through and giving partners space for independence.",
        population: "6-8% of population",
    },
    TypeProfile {
        code: "ESTJ",
        name: "The Executive",
        nickname: "Efficient Organizer",
        description: "Organized, hardworking, and results-oriented. You excel at managing people and processes, bringing order to chaos, and ensuring that goals are met efficiently. Your practical approach and reliability make you a natural administrator.",
        strengths: &[
            "Organization and efficiency",
            "Reliability and responsibility",
            "Leadership abilities",
            "Practical problem-solving",
            "Goal achievement",
            "Creating structure",
        ],
        challenges: &[
            "May be inflexible",
            "Can be too focused on rules",
            "Sometimes dismissive of others' feelings",
            "May struggle with change",
        ],
        careers: &[
            "Management",
            "Business Administration",
            "Finance",
            "Military Officer",
            "Government",
            "Operations",
        ],
        relationships: "You bring stability and commitment to relationships but may need to be more flexible and attentive to emotional aspects of partnership.",
        population: "8-12% of population",
    },
    TypeProfile {
        code: "ESTP",
        name: "The Entrepreneur",
        nickname: "Energetic Problem-Solver",
        description: "Energetic, adaptable, and pragmatic. You thrive in the moment and excel at crisis management and hands-on problem solving. Your ability to think on your feet and connect with others makes you effective in dynamic situations.",
        strengths: &[
            "Adaptability and flexibility",
            "Practical problem-solving",
            "People skills",
            "Crisis management",
            "Living in the moment",
            "Hands-on learning",
        ],
        challenges: &[
            "May struggle with long-term planning",
            "Can be impatient with theory",
            "Sometimes act impulsively",
            "Difficulty with abstract concepts",
        ],
        careers: &[
            "Sales",
            "Emergency Services",
            "Sports/Athletics",
            "Entertainment",
            "Real Estate",
            "Skilled Trades",
        ],
        relationships: "You bring energy and spontaneity to relationships but may need to work on long-term commitment and planning for the future.",
        population: "4-6% of population",
    },
    TypeProfile {
        code: "ESFJ",
        name: "The Consul",
        nickname: "Caring Supporter",
        description: "Warm, caring, and cooperative. You have a natural talent for bringing out the best in others and creating harmonious environments. Your empathy and organizational skills make you excellent at supporting and nurturing others.",
        strengths: &[
            "Empathy and caring",
            "Cooperation and teamwork",
            "Reliability",
            "Attention to others' needs",
            "Creating harmony",
            "Practical helpfulness",
        ],
        challenges: &[
            "May neglect own needs",
            "Can be overly sensitive to criticism",
            "Sometimes avoid conflict",
            "May be too focused on others' approval",
        ],
        careers: &[
            "Healthcare",
            "Education",
            "Social Work",
            "Human Resources",
            "Customer Service",
            "Event Planning",
        ],
        relationships: "You are naturally nurturing and supportive in relationships but may need to ensure you're communicating your own needs and maintaining independence.",
        population: "9-13% of population",
    },
    TypeProfile {
        code: "ESFP",
        name: "The Entertainer",
        nickname: "Spontaneous Performer",
        description: "Spontaneous, enthusiastic, and people-focused. You bring joy and energy to situations, excel at connecting with others, and have a natural ability to live in and enjoy the present moment.",
        strengths: &[
            "Enthusiasm and optimism",
            "People skills",
            "Flexibility and spontaneity",
            "Aesthetic appreciation",
            "Practical helpfulness",
            "Living in the moment",
        ],
        challenges: &[
            "May avoid long-term planning",
            "Can be sensitive to criticism",
            "Sometimes struggle with abstract theory",
            "May have difficulty saying no",
        ],
        careers: &[
            "Entertainment",
            "Healthcare",
            "Sales",
            "Hospitality",
            "Art/Design",
            "Social Work",
        ],
        relationships: "You bring warmth and fun to relationships but may need to work on discussing serious topics and planning for the future together.",
        population: "4-9% of population",
    },
    TypeProfile {
        code: "INTJ",
        name: "The Architect",
        nickname: "Strategic Mastermind",
        description: "Strategic, independent, and insightful. You excel at seeing the big picture and developing comprehensive plans to achieve your vision. Your combination of intuition and logical thinking makes you highly effective at complex problem-solving.",
        strengths: &[
            "Strategic thinking",
            "Independence",
            "Competence and knowledge",
            "Vision and insight",
            "Logical analysis",
            "Long-term planning",
        ],
        challenges: &[
            "May seem aloof or arrogant",
            "Can be overly critical",
            "Sometimes struggle with teamwork",
            "May neglect relationships",
        ],
        careers: &[
            "Strategy Consulting",
            "Engineering",
            "Research",
            "Architecture",
            "Law",
            "Technology",
        ],
        relationships: "You bring depth and loyalty to relationships but may need to work on expressing emotions and being more flexible with others' different approaches.",
        population: "1-3% of population",
    },
    TypeProfile {
        code: "INTP",
        name: "The Thinker",
        nickname: "Logical Innovator",
        description: "Logical, innovative, and intellectually curious. You're driven to understand how systems work and love exploring theoretical concepts. Your analytical mind and creative problem-solving make you excellent at developing new ideas.",
        strengths: &[
            "Logic and analysis",
            "Innovation and creativity",
            "Independence",
            "Intellectual curiosity",
            "Problem-solving",
            "Theoretical thinking",
        ],
        challenges: &[
            "May struggle with follow-through",
            "Can be socially awkward",
            "Sometimes procrastinate",
            "May seem insensitive to others",
        ],
        careers: &[
            "Research Scientist",
            "Software Development",
            "Philosophy",
            "Mathematics",
            "Engineering",
            "Writing",
        ],
        relationships: "You bring intellectual depth and loyalty to relationships but may need to work on emotional expression and practical relationship maintenance.",
        population: "3-5% of population",
    },
    TypeProfile {
        code: "INFJ",
        name: "The Advocate",
        nickname: "Insightful Idealist",
        description: "Creative, principled, and deeply committed to helping others. You have strong intuitive insights about people and situations, combined with a desire to make a meaningful positive impact on the world.",
        strengths: &[
            "Insight and intuition",
            "Empathy and understanding",
            "Principled thinking",
            "Creativity",
            "Long-term vision",
            "Helping others grow",
        ],
        challenges: &[
            "May be overly idealistic",
            "Can be sensitive to criticism",
            "Sometimes struggle with practical details",
            "May neglect own needs",
        ],
        careers: &[
            "Counseling",
            "Writing",
            "Non-profit Work",
            "Psychology",
            "Education",
            "Healthcare",
        ],
        relationships: "You bring deep understanding and commitment to relationships but may need to communicate your needs more clearly and be patient with others' different approaches.",
        population: "1-2% of population",
    },
    TypeProfile {
        code: "INFP",
        name: "The Mediator",
        nickname: "Passionate Idealist",
        description: "Caring, creative, and guided by strong personal values. You're driven by a desire to help others and make the world a better place. Your empathy and authenticity create deep connections with others.",
        strengths: &[
            "Empathy and understanding",
            "Strong values",
            "Creativity",
            "Adaptability",
            "Seeing potential in others",
            "Authenticity",
        ],
        challenges: &[
            "Can be too idealistic",
            "Dislike dealing with data",
            "Overly sensitive",
            "May struggle to be organized",
        ],
        careers: &["Writing", "Art", "Counseling", "Social Work", "Psychology"],
        relationships: "You are a deeply caring partner but may need to set boundaries to protect your energy.",
        population: "4-5% of population",
    },
    TypeProfile {
        code: "ISFJ",
        name: "The Protector",
        nickname: "Dedicated Defender",
        description: "Conscientious, warm, and responsible individuals dedicated to caring for others. You are highly attuned to the needs of those around you.",
        strengths: &[
            "Supportive and reliable",
            "Detail-oriented",
            "Loyal and patient",
            "Caring and empathetic",
        ],
        challenges: &[
            "Overly humble",
            "Neglect own needs",
            "Dislike conflict",
            "Resistant to change",
        ],
        careers: &["Healthcare", "Social Work", "Teaching", "Administration"],
        relationships: "A deeply committed partner, but you must express your own needs.",
        population: "9-14% of population",
    },
    TypeProfile {
        code: "ISFP",
        name: "The Artist",
        nickname: "Charming Adventurer",
        description: "Quiet, friendly, and sensitive individuals with a strong aesthetic sense. You live in the present moment and enjoy new experiences.",
        strengths: &[
            "Artistic and creative",
            "Charming",
            "Adaptable",
            "Loyal to values",
        ],
        challenges: &[
            "Fiercely independent",
            "Dislike long-term planning",
            "Overly sensitive",
        ],
        careers: &["Artist/Musician", "Designer", "Chef", "Social Worker"],
        relationships: "Spontaneous and caring, but may need to address conflicts directly.",
        population: "5-9% of population",
    },
    TypeProfile {
        code: "ISTJ",
        name: "The Inspector",
        nickname: "Reliable Realist",
        description: "Responsible, practical, and dependable individuals who value tradition and order. You are meticulous and thorough.",
        strengths: &["Responsible", "Detail-oriented", "Logical", "Organized"],
        challenges: &[
            "Inflexible",
            "Resistant to new ideas",
            "Can seem insensitive",
        ],
        careers: &["Accounting", "Law", "Logistics", "Data Analysis"],
        relationships: "A loyal partner who values commitment, but may need to be more open to spontaneity.",
        population: "11-16% of population",
    },
    TypeProfile {
        code: "ISTP",
        name: "The Crafter",
        nickname: "Virtuoso Problem-Solver",
        description: "Observant, adaptable, and analytical individuals who excel at understanding how things work. You are a hands-on learner.",
        strengths: &[
            "Practical problem-solving",
            "Adaptable",
            "Excellent in a crisis",
            "Resourceful",
        ],
        challenges: &[
            "Overly private",
            "Easily bored",
            "Dislike commitment",
            "May seem detached",
        ],
        careers: &[
            "Mechanic/Engineer",
            "Pilot",
            "Paramedic",
            "Software Developer",
        ],
        relationships: "An independent partner who values freedom and shared experiences.",
        population: "4-6% of population",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_classifiable_code_has_a_profile() {
        for code in TypeCode::all() {
            let profile = resolve_profile(code).expect("profile present");
            assert_eq!(profile.code, code.as_str());
            assert!(!profile.strengths.is_empty());
            assert!(!profile.careers.is_empty());
        }
        assert_eq!(profiles().len(), 16);
    }

    #[test]
    fn repeated_lookups_return_the_same_record() {
        let code: TypeCode = "INFJ".parse().expect("valid code");
        let first = resolve_profile(code).expect("present");
        let second = resolve_profile(code).expect("present");
        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
        assert_eq!(first.name, "The Advocate");
    }

    #[test]
    fn table_codes_are_unique() {
        let mut codes: Vec<&str> = profiles().iter().map(|profile| profile.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 16);
    }
}
