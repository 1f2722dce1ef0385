use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Failures raised by the survey engine, scorer, and classifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("question index {index} is outside the survey (0..{len})")]
    OutOfRange { index: usize, len: usize },
    #[error("unknown personality type '{0}'")]
    UnknownType(String),
    #[error("question {question_id} has no option {index}")]
    InvalidOption { question_id: u8, index: usize },
    #[error("assessment incomplete: {answered} of {required} questions answered")]
    Incomplete { answered: usize, required: usize },
    #[error("assessment already complete; reset to start again")]
    AlreadyComplete,
    #[error("response for question {question_id} does not match the survey")]
    InvalidResponse { question_id: u8 },
}

/// One of the four bipolar personality axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dichotomy {
    #[serde(rename = "E/I")]
    EI,
    #[serde(rename = "S/N")]
    SN,
    #[serde(rename = "T/F")]
    TF,
    #[serde(rename = "J/P")]
    JP,
}

impl Dichotomy {
    /// Axes in the order their letters appear in a type code.
    pub const fn ordered() -> [Self; 4] {
        [Self::EI, Self::SN, Self::TF, Self::JP]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EI => "E/I",
            Self::SN => "S/N",
            Self::TF => "T/F",
            Self::JP => "J/P",
        }
    }

    /// Letter chosen when the axis sum is zero or above.
    pub const fn positive(self) -> char {
        match self {
            Self::EI => 'E',
            Self::SN => 'S',
            Self::TF => 'T',
            Self::JP => 'J',
        }
    }

    pub const fn negative(self) -> char {
        match self {
            Self::EI => 'I',
            Self::SN => 'N',
            Self::TF => 'F',
            Self::JP => 'P',
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::EI => 0,
            Self::SN => 1,
            Self::TF => 2,
            Self::JP => 3,
        }
    }
}

impl fmt::Display for Dichotomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Informational lean of an answer option. Scoring only uses the numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Polarity {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub text: &'static str,
    pub score: i8,
    pub polarity: Polarity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u8,
    pub text: &'static str,
    pub dichotomy: Dichotomy,
    pub options: [AnswerOption; 5],
}

/// A recorded answer. Created once per question and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub question_id: u8,
    pub dichotomy: Dichotomy,
    pub score: i8,
}

impl Response {
    /// Build the response for selecting `option_index` on `question`.
    pub fn for_option(question: &Question, option_index: usize) -> Result<Self, AssessmentError> {
        let option = question
            .options
            .get(option_index)
            .ok_or(AssessmentError::InvalidOption {
                question_id: question.id,
                index: option_index,
            })?;

        Ok(Self {
            question_id: question.id,
            dichotomy: question.dichotomy,
            score: option.score,
        })
    }
}

/// Signed per-axis totals derived from a response sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AxisScores {
    sums: [i16; 4],
}

impl AxisScores {
    pub fn new(ei: i16, sn: i16, tf: i16, jp: i16) -> Self {
        Self {
            sums: [ei, sn, tf, jp],
        }
    }

    pub fn get(&self, dichotomy: Dichotomy) -> i16 {
        self.sums[dichotomy.index()]
    }

    pub(crate) fn add(&mut self, dichotomy: Dichotomy, score: i8) {
        self.sums[dichotomy.index()] += i16::from(score);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dichotomy, i16)> + '_ {
        Dichotomy::ordered()
            .into_iter()
            .map(move |dichotomy| (dichotomy, self.get(dichotomy)))
    }
}

impl Serialize for AxisScores {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(4))?;
        for (dichotomy, sum) in self.iter() {
            map.serialize_entry(dichotomy.label(), &sum)?;
        }
        map.end()
    }
}

/// Four-letter classification, one letter per axis in E/I, S/N, T/F, J/P order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeCode([u8; 4]);

impl TypeCode {
    pub(crate) fn from_letters(letters: [char; 4]) -> Self {
        let mut bytes = [0u8; 4];
        for (slot, letter) in bytes.iter_mut().zip(letters) {
            *slot = letter as u8;
        }
        Self(bytes)
    }

    /// Every code the classifier can produce.
    pub fn all() -> Vec<Self> {
        let mut codes = Vec::with_capacity(16);
        for ei in ['E', 'I'] {
            for sn in ['S', 'N'] {
                for tf in ['T', 'F'] {
                    for jp in ['J', 'P'] {
                        codes.push(Self::from_letters([ei, sn, tf, jp]));
                    }
                }
            }
        }
        codes
    }

    pub fn letter(&self, dichotomy: Dichotomy) -> char {
        char::from(self.0[dichotomy.index()])
    }

    pub fn as_str(&self) -> &str {
        // Construction only ever stores ASCII letters.
        std::str::from_utf8(&self.0).unwrap_or("????")
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TypeCode {
    type Err = AssessmentError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_uppercase();
        let letters: Vec<char> = normalized.chars().collect();
        if letters.len() != 4 {
            return Err(AssessmentError::UnknownType(raw.trim().to_string()));
        }

        for (dichotomy, letter) in Dichotomy::ordered().into_iter().zip(&letters) {
            if *letter != dichotomy.positive() && *letter != dichotomy.negative() {
                return Err(AssessmentError::UnknownType(raw.trim().to_string()));
            }
        }

        Ok(Self::from_letters([letters[0], letters[1], letters[2], letters[3]]))
    }
}

impl Serialize for TypeCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TypeCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Static descriptive record for one of the sixteen types.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TypeProfile {
    pub code: &'static str,
    pub name: &'static str,
    pub nickname: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub careers: &'static [&'static str],
    pub relationships: &'static str,
    pub population: &'static str,
}
