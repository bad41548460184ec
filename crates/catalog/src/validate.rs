use std::collections::HashSet;

use umami_common::error::{UmamiError, UmamiResult};

use crate::conflicts::conflict_rows;
use crate::genres::all_genres;
use crate::questions::all_questions;
use crate::traits::{trait_rows, TRAIT_MAX, TRAIT_MIN};

/// Sanity-check the hand-authored tables. Run once at startup; a failure here
/// is a build defect, not a runtime condition.
pub fn validate() -> UmamiResult<()> {
    let genres = all_genres();
    let questions = all_questions();

    if genres.iter().filter(|g| g.enabled).count() == 0 {
        return Err(UmamiError::Config("no enabled genres in catalog".into()));
    }
    if questions.iter().filter(|q| q.enabled).count() == 0 {
        return Err(UmamiError::Config("no enabled questions in catalog".into()));
    }

    let mut genre_ids = HashSet::new();
    for genre in genres {
        if !genre_ids.insert(genre.id.as_str()) {
            return Err(UmamiError::Config(format!(
                "duplicate genre id: {}",
                genre.id
            )));
        }
    }

    let mut question_ids = HashSet::new();
    for question in questions {
        if !question_ids.insert(question.id.as_str()) {
            return Err(UmamiError::Config(format!(
                "duplicate question id: {}",
                question.id
            )));
        }
    }

    for (genre_id, entries) in trait_rows() {
        if !genre_ids.contains(genre_id) {
            return Err(UmamiError::Config(format!(
                "trait matrix references unknown genre: {genre_id}"
            )));
        }
        for (question_id, value) in entries.iter() {
            if !question_ids.contains(question_id) {
                return Err(UmamiError::Config(format!(
                    "trait matrix references unknown question: {question_id}"
                )));
            }
            if *value < TRAIT_MIN || *value > TRAIT_MAX {
                return Err(UmamiError::Config(format!(
                    "trait value out of range for ({genre_id}, {question_id}): {value}"
                )));
            }
        }
    }

    for (question_id, targets) in conflict_rows() {
        if !question_ids.contains(question_id) {
            return Err(UmamiError::Config(format!(
                "conflict table references unknown question: {question_id}"
            )));
        }
        for target in targets.iter() {
            if !question_ids.contains(target) {
                return Err(UmamiError::Config(format!(
                    "conflict target is unknown question: {target}"
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_catalog_is_valid() {
        validate().expect("catalog tables should validate");
    }
}
