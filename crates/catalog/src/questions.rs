use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Topic group a question belongs to. Used by the selector to avoid asking
/// about the same topic several times in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionGroup {
    Temperature,
    Soupiness,
    Richness,
    SpiceLevel,
    Staple,
    Texture,
    Flavor,
    Portion,
}

impl QuestionGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionGroup::Temperature => "temperature",
            QuestionGroup::Soupiness => "soupiness",
            QuestionGroup::Richness => "richness",
            QuestionGroup::SpiceLevel => "spice_level",
            QuestionGroup::Staple => "staple",
            QuestionGroup::Texture => "texture",
            QuestionGroup::Flavor => "flavor",
            QuestionGroup::Portion => "portion",
        }
    }
}

impl fmt::Display for QuestionGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub group: QuestionGroup,
    pub enabled: bool,
}

/// (id, text, group, enabled)
const QUESTION_ROWS: &[(&str, &str, QuestionGroup, bool)] = &[
    (
        "q_hot_dish",
        "Are you in the mood for a hot dish?",
        QuestionGroup::Temperature,
        true,
    ),
    (
        "q_cold_dish",
        "Would a chilled dish be good?",
        QuestionGroup::Temperature,
        true,
    ),
    (
        "q_soup_warmup",
        "Do you want something to warm you up?",
        QuestionGroup::Temperature,
        true,
    ),
    (
        "q_refreshing",
        "Do you want something refreshing?",
        QuestionGroup::Temperature,
        true,
    ),
    (
        "q_soupy",
        "Do you want a dish with broth or soup?",
        QuestionGroup::Soupiness,
        true,
    ),
    (
        "q_slurp_noodles",
        "Do you feel like slurping noodles?",
        QuestionGroup::Soupiness,
        true,
    ),
    (
        "q_dry_dish",
        "Would you prefer a dish without soup?",
        QuestionGroup::Soupiness,
        true,
    ),
    (
        "q_dipping",
        "Does dipping things in sauce or broth sound fun?",
        QuestionGroup::Soupiness,
        true,
    ),
    (
        "q_rich_heavy",
        "Are you craving something rich and heavy?",
        QuestionGroup::Richness,
        true,
    ),
    (
        "q_light_meal",
        "Do you want to keep it light?",
        QuestionGroup::Richness,
        true,
    ),
    (
        "q_garlic_ok",
        "Is a strong garlic punch welcome?",
        QuestionGroup::Richness,
        true,
    ),
    (
        "q_oily_ok",
        "Is an oily, greasy dish fine today?",
        QuestionGroup::Richness,
        true,
    ),
    (
        "q_creamy",
        "Do you want something creamy?",
        QuestionGroup::Richness,
        true,
    ),
    (
        "q_spicy",
        "Do you want it spicy?",
        QuestionGroup::SpiceLevel,
        true,
    ),
    (
        "q_very_spicy",
        "Could you handle serious heat right now?",
        QuestionGroup::SpiceLevel,
        true,
    ),
    (
        "q_mild",
        "Do you prefer mild flavors today?",
        QuestionGroup::SpiceLevel,
        true,
    ),
    // Needs a better phrasing before enabling; see catalog review notes.
    (
        "q_numbing",
        "Does a tingling, numbing spice sound good?",
        QuestionGroup::SpiceLevel,
        false,
    ),
    (
        "q_rice_mood",
        "Are you in a rice mood?",
        QuestionGroup::Staple,
        true,
    ),
    (
        "q_noodle_mood",
        "Are you in a noodle mood?",
        QuestionGroup::Staple,
        true,
    ),
    (
        "q_bread_mood",
        "Would bread or a bun be good?",
        QuestionGroup::Staple,
        true,
    ),
    (
        "q_meat_main",
        "Do you want meat as the star of the meal?",
        QuestionGroup::Staple,
        true,
    ),
    (
        "q_seafood_mood",
        "Is seafood appealing right now?",
        QuestionGroup::Staple,
        true,
    ),
    (
        "q_crispy",
        "Are you craving something crispy or fried?",
        QuestionGroup::Texture,
        true,
    ),
    (
        "q_chewy",
        "Do you want a chewy bite?",
        QuestionGroup::Texture,
        true,
    ),
    (
        "q_tender",
        "Does melt-in-the-mouth tender sound right?",
        QuestionGroup::Texture,
        true,
    ),
    (
        "q_juicy",
        "Do you want something juicy?",
        QuestionGroup::Texture,
        true,
    ),
    (
        "q_savory_soy",
        "Does a soy-sauce savoriness appeal?",
        QuestionGroup::Flavor,
        true,
    ),
    (
        "q_sweet_savory",
        "Do you like a sweet-savory glaze today?",
        QuestionGroup::Flavor,
        true,
    ),
    (
        "q_tomato",
        "Does a tomato-based flavor sound good?",
        QuestionGroup::Flavor,
        true,
    ),
    (
        "q_miso",
        "Are you in the mood for miso depth?",
        QuestionGroup::Flavor,
        true,
    ),
    (
        "q_tangy",
        "Do you want bright, tangy flavors?",
        QuestionGroup::Flavor,
        true,
    ),
    (
        "q_grilled_char",
        "Does smoky char off the grill sound good?",
        QuestionGroup::Flavor,
        true,
    ),
    (
        "q_big_portion",
        "Do you want a big, filling portion?",
        QuestionGroup::Portion,
        true,
    ),
    (
        "q_small_portion",
        "Would a smaller portion be enough?",
        QuestionGroup::Portion,
        true,
    ),
    (
        "q_shareable",
        "Do you want dishes to share?",
        QuestionGroup::Portion,
        true,
    ),
    (
        "q_quick_bite",
        "Just a quick bite?",
        QuestionGroup::Portion,
        true,
    ),
];

static QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    QUESTION_ROWS
        .iter()
        .map(|(id, text, group, enabled)| Question {
            id: (*id).to_string(),
            text: (*text).to_string(),
            group: *group,
            enabled: *enabled,
        })
        .collect()
});

pub fn all_questions() -> &'static [Question] {
    &QUESTIONS
}

pub fn enabled_questions() -> Vec<Question> {
    QUESTIONS.iter().filter(|q| q.enabled).cloned().collect()
}

pub fn question_by_id(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}
