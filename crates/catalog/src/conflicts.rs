use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Questions rendered irrelevant by a confident affirmative answer to the
/// key question. One-directional: answering the key excludes the targets,
/// not the other way round.
const CONFLICT_ROWS: &[(&str, &[&str])] = &[
    ("q_hot_dish", &["q_cold_dish"]),
    ("q_cold_dish", &["q_hot_dish", "q_soup_warmup"]),
    ("q_soupy", &["q_dry_dish"]),
    ("q_dry_dish", &["q_soupy", "q_slurp_noodles"]),
    ("q_spicy", &["q_mild"]),
    ("q_very_spicy", &["q_mild"]),
    ("q_mild", &["q_spicy", "q_very_spicy", "q_numbing"]),
    ("q_rich_heavy", &["q_light_meal", "q_small_portion"]),
    ("q_light_meal", &["q_rich_heavy", "q_oily_ok", "q_big_portion"]),
    ("q_big_portion", &["q_small_portion", "q_quick_bite"]),
    ("q_small_portion", &["q_big_portion"]),
    ("q_quick_bite", &["q_big_portion"]),
];

static CONFLICTS: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| CONFLICT_ROWS.iter().copied().collect());

/// Question ids excluded once `question_id` receives a confident affirmative.
pub fn conflicting_questions(question_id: &str) -> &'static [&'static str] {
    CONFLICTS.get(question_id).copied().unwrap_or(&[])
}

pub(crate) fn conflict_rows() -> &'static [(&'static str, &'static [&'static str])] {
    CONFLICT_ROWS
}
