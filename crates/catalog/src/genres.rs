use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: String,
    pub name: String,
    pub enabled: bool,
}

/// (id, display name, enabled)
const GENRE_ROWS: &[(&str, &str, bool)] = &[
    ("ramen_shoyu", "Shoyu Ramen", true),
    ("ramen_tonkotsu", "Tonkotsu Ramen", true),
    ("tsukemen", "Tsukemen", true),
    ("udon", "Udon", true),
    ("soba", "Soba", true),
    ("pho", "Pho", true),
    ("sushi", "Sushi", true),
    ("kaisendon", "Seafood Rice Bowl", true),
    ("gyudon", "Beef Rice Bowl", true),
    ("katsudon", "Pork Cutlet Rice Bowl", true),
    ("curry_japanese", "Japanese Curry", true),
    ("curry_indian", "Indian Curry", true),
    ("thai_curry", "Thai Curry", true),
    ("mapo_tofu", "Mapo Tofu", true),
    ("gyoza", "Gyoza", true),
    ("yakiniku", "Yakiniku", true),
    ("yakitori", "Yakitori", true),
    ("steak", "Steak", true),
    ("hamburger", "Hamburger", true),
    ("pizza", "Pizza", true),
    ("pasta", "Pasta", true),
    ("salad_bowl", "Salad Bowl", true),
    ("tempura", "Tempura", true),
    ("nabe", "Hot Pot", true),
    // Seasonal; re-enabled in winter builds.
    ("oden", "Oden", false),
];

static GENRES: Lazy<Vec<Genre>> = Lazy::new(|| {
    GENRE_ROWS
        .iter()
        .map(|(id, name, enabled)| Genre {
            id: (*id).to_string(),
            name: (*name).to_string(),
            enabled: *enabled,
        })
        .collect()
});

pub fn all_genres() -> &'static [Genre] {
    &GENRES
}

pub fn enabled_genres() -> Vec<Genre> {
    GENRES.iter().filter(|g| g.enabled).cloned().collect()
}

pub fn genre_by_id(id: &str) -> Option<&'static Genre> {
    GENRES.iter().find(|g| g.id == id)
}
