pub mod config;
pub mod engine;
pub mod likelihood;
pub mod selector;
pub mod session;

pub use config::{InferenceConfig, SessionConfig};
pub use engine::{GenreResult, InferenceEngine};
pub use likelihood::LikelihoodModel;
pub use selector::QuestionSelector;
pub use session::{QuestionAnswer, QuizSession};
