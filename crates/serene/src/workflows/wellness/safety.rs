use serde::Serialize;
use tracing::warn;

/// Phrases that route a conversation to crisis resources.
pub const CRISIS_KEYWORDS: [&str; 9] = [
    "suicide",
    "self-harm",
    "kill myself",
    "want to die",
    "hopeless",
    "end my life",
    "self harm",
    "cutting",
    "overdose",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrisisScreening {
    pub flagged: bool,
    pub matched: Vec<&'static str>,
}

/// Case-insensitive substring screen against [`CRISIS_KEYWORDS`].
pub fn screen_message(text: &str) -> CrisisScreening {
    let lowered = text.to_lowercase();
    let matched: Vec<&'static str> = CRISIS_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lowered.contains(keyword))
        .collect();

    if !matched.is_empty() {
        warn!(keywords = matched.len(), "crisis language detected");
    }

    CrisisScreening {
        flagged: !matched.is_empty(),
        matched,
    }
}
