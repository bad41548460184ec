pub mod config;
pub mod engine;
pub mod geo;
pub mod scorers;
pub mod trace;

pub use config::{PricePreference, ScoringSettings, ScoringWeights};
pub use engine::{evaluate, rank, rank_top, RankedVenue, MAX_RESULTS};
pub use scorers::RankContext;
pub use trace::RankTrace;
