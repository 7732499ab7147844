pub mod config;
pub mod core;
pub mod error;
pub mod matcher;
pub mod score;
pub mod similarity;

pub use self::core::unicode::decompose_hangul;
pub use error::{Error, Result};
pub use matcher::{extract_keywords, find_best_matches, score, FlavorMatcher, MatchResult, MatchType, MatcherConfig};
pub use score::{
    calculate_match_score, calculate_numeric_match_score, FlavorBreakdown, FlavorDictionary, MatchLevel, MatchScore,
    NumericScorer, NumericTasting, ScoreAggregator, ScoreConfig, TastingRecord,
};
pub use similarity::{phonetic_similarity, similarity};
