use serde::Serialize;

use super::domain::{latest_mood, Mood, MoodEntry};

/// Ambient lighting theme for the sanctuary room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LightingPreset {
    pub mood: Mood,
    pub name: &'static str,
    pub color_class: &'static str,
    pub color_hex: &'static str,
}

static PRESETS: [LightingPreset; 6] = [
    LightingPreset {
        mood: Mood::Ecstatic,
        name: "Golden Hour",
        color_class: "bg-amber-400",
        color_hex: "#FBBF24",
    },
    LightingPreset {
        mood: Mood::Happy,
        name: "Lush Meadow",
        color_class: "bg-emerald-400",
        color_hex: "#34D399",
    },
    LightingPreset {
        mood: Mood::Neutral,
        name: "Clear Sky",
        color_class: "bg-sky-400",
        color_hex: "#38BDF8",
    },
    LightingPreset {
        mood: Mood::Sad,
        name: "Twilight Mist",
        color_class: "bg-slate-500",
        color_hex: "#64748B",
    },
    LightingPreset {
        mood: Mood::Anxious,
        name: "Lavender Calm",
        color_class: "bg-violet-500",
        color_hex: "#8B5CF6",
    },
    LightingPreset {
        mood: Mood::Angry,
        name: "Warm Ember",
        color_class: "bg-rose-500",
        color_hex: "#F43F5E",
    },
];

pub fn lighting_presets() -> &'static [LightingPreset] {
    &PRESETS
}

pub fn preset_for(mood: Mood) -> &'static LightingPreset {
    // PRESETS follows Mood::ordered().
    &PRESETS[mood as usize]
}

pub fn suggest_lighting(moods: &[MoodEntry]) -> &'static LightingPreset {
    preset_for(latest_mood(moods).unwrap_or(Mood::Neutral))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_line_up_with_mood_order() {
        for (preset, mood) in lighting_presets().iter().zip(Mood::ordered()) {
            assert_eq!(preset.mood, mood);
            assert_eq!(preset_for(mood).name, preset.name);
        }
    }

    #[test]
    fn suggestion_defaults_to_clear_sky() {
        assert_eq!(suggest_lighting(&[]).name, "Clear Sky");
    }
}
