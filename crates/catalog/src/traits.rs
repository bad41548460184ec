use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const TRAIT_MIN: i8 = -2;
pub const TRAIT_MAX: i8 = 2;

/// Expected answer per (genre, question), on the same [-2, 2] scale as the
/// answer options. Sparse: absent entries read as neutral (0).
///
/// Hand-authored. A positive value means a user wanting that genre tends to
/// answer the question affirmatively; negative means the opposite.
const TRAIT_ROWS: &[(&str, &[(&str, i8)])] = &[
    (
        "ramen_shoyu",
        &[
            ("q_hot_dish", 2),
            ("q_soup_warmup", 1),
            ("q_soupy", 2),
            ("q_slurp_noodles", 2),
            ("q_noodle_mood", 2),
            ("q_savory_soy", 2),
            ("q_oily_ok", 1),
            ("q_quick_bite", 1),
            ("q_cold_dish", -2),
            ("q_dry_dish", -2),
            ("q_rice_mood", -1),
            ("q_crispy", -1),
        ],
    ),
    (
        "ramen_tonkotsu",
        &[
            ("q_hot_dish", 2),
            ("q_soup_warmup", 1),
            ("q_soupy", 2),
            ("q_slurp_noodles", 2),
            ("q_noodle_mood", 2),
            ("q_rich_heavy", 2),
            ("q_oily_ok", 2),
            ("q_garlic_ok", 2),
            ("q_creamy", 1),
            ("q_light_meal", -2),
            ("q_cold_dish", -2),
            ("q_dry_dish", -2),
        ],
    ),
    (
        "tsukemen",
        &[
            ("q_noodle_mood", 2),
            ("q_dipping", 2),
            ("q_chewy", 2),
            ("q_big_portion", 2),
            ("q_rich_heavy", 1),
            ("q_hot_dish", 1),
            ("q_slurp_noodles", 1),
            ("q_dry_dish", 1),
            ("q_soupy", -1),
        ],
    ),
    (
        "udon",
        &[
            ("q_hot_dish", 1),
            ("q_soup_warmup", 1),
            ("q_soupy", 2),
            ("q_noodle_mood", 2),
            ("q_chewy", 2),
            ("q_mild", 2),
            ("q_light_meal", 1),
            ("q_savory_soy", 1),
            ("q_quick_bite", 1),
            ("q_spicy", -1),
            ("q_oily_ok", -1),
        ],
    ),
    (
        "soba",
        &[
            ("q_noodle_mood", 2),
            ("q_light_meal", 2),
            ("q_quick_bite", 2),
            ("q_cold_dish", 1),
            ("q_refreshing", 1),
            ("q_mild", 1),
            ("q_savory_soy", 1),
            ("q_slurp_noodles", 1),
            ("q_rich_heavy", -2),
            ("q_oily_ok", -2),
        ],
    ),
    (
        "pho",
        &[
            ("q_soupy", 2),
            ("q_noodle_mood", 2),
            ("q_light_meal", 2),
            ("q_hot_dish", 1),
            ("q_soup_warmup", 1),
            ("q_refreshing", 1),
            ("q_tangy", 1),
            ("q_mild", 1),
            ("q_rich_heavy", -1),
            ("q_oily_ok", -1),
        ],
    ),
    (
        "sushi",
        &[
            ("q_cold_dish", 2),
            ("q_seafood_mood", 2),
            ("q_rice_mood", 1),
            ("q_light_meal", 1),
            ("q_refreshing", 1),
            ("q_savory_soy", 1),
            ("q_hot_dish", -1),
            ("q_soupy", -1),
            ("q_oily_ok", -2),
            ("q_crispy", -1),
        ],
    ),
    (
        "kaisendon",
        &[
            ("q_seafood_mood", 2),
            ("q_rice_mood", 2),
            ("q_cold_dish", 1),
            ("q_light_meal", 1),
            ("q_refreshing", 1),
            ("q_quick_bite", 1),
            ("q_oily_ok", -1),
            ("q_noodle_mood", -1),
        ],
    ),
    (
        "gyudon",
        &[
            ("q_rice_mood", 2),
            ("q_sweet_savory", 2),
            ("q_quick_bite", 2),
            ("q_meat_main", 1),
            ("q_big_portion", 1),
            ("q_juicy", 1),
            ("q_tender", 1),
            ("q_seafood_mood", -1),
            ("q_noodle_mood", -1),
            ("q_soupy", -1),
        ],
    ),
    (
        "katsudon",
        &[
            ("q_rice_mood", 2),
            ("q_crispy", 1),
            ("q_meat_main", 1),
            ("q_sweet_savory", 1),
            ("q_rich_heavy", 1),
            ("q_big_portion", 1),
            ("q_light_meal", -1),
            ("q_cold_dish", -1),
        ],
    ),
    (
        "curry_japanese",
        &[
            ("q_rice_mood", 2),
            ("q_spicy", 1),
            ("q_sweet_savory", 1),
            ("q_rich_heavy", 1),
            ("q_hot_dish", 1),
            ("q_big_portion", 1),
            ("q_seafood_mood", -1),
        ],
    ),
    (
        "curry_indian",
        &[
            ("q_spicy", 2),
            ("q_very_spicy", 1),
            ("q_hot_dish", 1),
            ("q_bread_mood", 1),
            ("q_rich_heavy", 1),
            ("q_creamy", 1),
            ("q_mild", -2),
            ("q_cold_dish", -1),
        ],
    ),
    (
        "thai_curry",
        &[
            ("q_spicy", 2),
            ("q_very_spicy", 1),
            ("q_tangy", 1),
            ("q_creamy", 1),
            ("q_rice_mood", 1),
            ("q_hot_dish", 1),
            ("q_mild", -2),
        ],
    ),
    (
        "mapo_tofu",
        &[
            ("q_spicy", 2),
            ("q_very_spicy", 2),
            ("q_numbing", 2),
            ("q_hot_dish", 2),
            ("q_rice_mood", 1),
            ("q_oily_ok", 1),
            ("q_tender", 1),
            ("q_mild", -2),
            ("q_cold_dish", -2),
        ],
    ),
    (
        "gyoza",
        &[
            ("q_juicy", 2),
            ("q_garlic_ok", 2),
            ("q_shareable", 2),
            ("q_crispy", 1),
            ("q_dipping", 1),
            ("q_quick_bite", 1),
            ("q_oily_ok", 1),
            ("q_light_meal", -1),
        ],
    ),
    (
        "yakiniku",
        &[
            ("q_meat_main", 2),
            ("q_grilled_char", 2),
            ("q_juicy", 2),
            ("q_shareable", 2),
            ("q_rich_heavy", 1),
            ("q_big_portion", 1),
            ("q_rice_mood", 1),
            ("q_oily_ok", 1),
            ("q_light_meal", -2),
            ("q_seafood_mood", -1),
        ],
    ),
    (
        "yakitori",
        &[
            ("q_grilled_char", 2),
            ("q_shareable", 2),
            ("q_meat_main", 1),
            ("q_savory_soy", 1),
            ("q_sweet_savory", 1),
            ("q_quick_bite", 1),
            ("q_soupy", -1),
        ],
    ),
    (
        "steak",
        &[
            ("q_meat_main", 2),
            ("q_juicy", 2),
            ("q_big_portion", 2),
            ("q_tender", 1),
            ("q_rich_heavy", 1),
            ("q_grilled_char", 1),
            ("q_noodle_mood", -2),
            ("q_light_meal", -1),
        ],
    ),
    (
        "hamburger",
        &[
            ("q_bread_mood", 2),
            ("q_juicy", 2),
            ("q_meat_main", 1),
            ("q_quick_bite", 1),
            ("q_big_portion", 1),
            ("q_oily_ok", 1),
            ("q_light_meal", -1),
            ("q_rice_mood", -1),
        ],
    ),
    (
        "pizza",
        &[
            ("q_tomato", 2),
            ("q_shareable", 2),
            ("q_bread_mood", 1),
            ("q_creamy", 1),
            ("q_crispy", 1),
            ("q_rich_heavy", 1),
            ("q_rice_mood", -2),
            ("q_noodle_mood", -1),
            ("q_light_meal", -1),
        ],
    ),
    (
        "pasta",
        &[
            ("q_noodle_mood", 1),
            ("q_tomato", 1),
            ("q_creamy", 1),
            ("q_garlic_ok", 1),
            ("q_chewy", 1),
            ("q_rice_mood", -1),
            ("q_soupy", -1),
        ],
    ),
    (
        "salad_bowl",
        &[
            ("q_light_meal", 2),
            ("q_refreshing", 2),
            ("q_cold_dish", 1),
            ("q_tangy", 1),
            ("q_mild", 1),
            ("q_rich_heavy", -2),
            ("q_oily_ok", -2),
            ("q_big_portion", -1),
        ],
    ),
    (
        "tempura",
        &[
            ("q_crispy", 2),
            ("q_seafood_mood", 1),
            ("q_dipping", 1),
            ("q_oily_ok", 1),
            ("q_savory_soy", 1),
            ("q_hot_dish", 1),
            ("q_rice_mood", 1),
            ("q_cold_dish", -1),
        ],
    ),
    (
        "nabe",
        &[
            ("q_hot_dish", 2),
            ("q_soupy", 2),
            ("q_soup_warmup", 2),
            ("q_shareable", 2),
            ("q_dipping", 1),
            ("q_light_meal", 1),
            ("q_seafood_mood", 1),
            ("q_meat_main", 1),
            ("q_miso", 1),
            ("q_cold_dish", -2),
            ("q_crispy", -2),
        ],
    ),
    (
        "oden",
        &[
            ("q_hot_dish", 2),
            ("q_soupy", 2),
            ("q_soup_warmup", 2),
            ("q_light_meal", 1),
        ],
    ),
];

static TRAIT_MATRIX: Lazy<HashMap<&'static str, HashMap<&'static str, i8>>> = Lazy::new(|| {
    TRAIT_ROWS
        .iter()
        .map(|(genre_id, entries)| (*genre_id, entries.iter().copied().collect()))
        .collect()
});

/// Trait value for (genre, question). Absent entries are neutral.
pub fn trait_value(genre_id: &str, question_id: &str) -> i8 {
    TRAIT_MATRIX
        .get(genre_id)
        .and_then(|row| row.get(question_id))
        .copied()
        .unwrap_or(0)
}

pub(crate) fn trait_rows() -> &'static [(&'static str, &'static [(&'static str, i8)])] {
    TRAIT_ROWS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_entry_resolves() {
        assert_eq!(trait_value("ramen_shoyu", "q_hot_dish"), 2);
        assert_eq!(trait_value("sushi", "q_oily_ok"), -2);
    }

    #[test]
    fn absent_entry_is_neutral() {
        assert_eq!(trait_value("sushi", "q_big_portion"), 0);
        assert_eq!(trait_value("no_such_genre", "q_hot_dish"), 0);
    }

    #[test]
    fn all_values_in_range() {
        for (_, entries) in trait_rows() {
            for (_, value) in entries.iter() {
                assert!(*value >= TRAIT_MIN && *value <= TRAIT_MAX);
            }
        }
    }
}
