pub mod answers;
pub mod conflicts;
pub mod genres;
pub mod questions;
pub mod traits;
mod validate;

pub use answers::AnswerId;
pub use conflicts::conflicting_questions;
pub use genres::{all_genres, enabled_genres, genre_by_id, Genre};
pub use questions::{all_questions, enabled_questions, question_by_id, Question, QuestionGroup};
pub use traits::{trait_value, TRAIT_MAX, TRAIT_MIN};
pub use validate::validate;
