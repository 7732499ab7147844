//! 시음 기록 매치 스코어
//!
//! 사용자의 맛/감각 선택이 로스터 노트와 얼마나 맞는지 0~100 점수로 계산합니다.
//!
//! # 두 가지 계산 경로
//!
//! 1. **Level 1 / Level 2 집계** ([`ScoreAggregator`]): 맛 표현을 사전 동의어로
//!    로스터 노트에서 찾고, 감각 표현이 있으면 감각 점수와 50/50으로 섞습니다.
//! 2. **수치 평가** ([`NumericScorer`]): 맛 목록 매칭과 1~5 척도 속성 거리를
//!    40/60으로 섞습니다.
//!
//! 두 경로의 가중치는 서로 다르며 [`ScoreConfig`]에서 각각 조정합니다.

mod aggregator;
mod config;
mod dictionary;
mod numeric;
mod sensory;
mod types;

// 공개 인터페이스
pub use aggregator::ScoreAggregator;
pub use config::ScoreConfig;
pub use dictionary::FlavorDictionary;
pub use numeric::{NumericBreakdown, NumericScorer};
pub use sensory::{PlaceholderSensory, RoasterTextSensory, SensoryScorer, SensoryStrategy};
pub use types::{FlavorBreakdown, MatchLevel, MatchScore, NumericTasting, SensoryCategory, TastingRecord};

/// 내장 사전 + 기본 설정으로 Level 1/2 매치 스코어 계산
///
/// 로스터 노트가 없으면 None.
pub fn calculate_match_score(record: &TastingRecord) -> Option<MatchScore> {
    ScoreAggregator::new().calculate(record)
}

/// 기본 설정(1~5 척도, 40/60)으로 수치 평가 매치 스코어 계산
///
/// # Examples
/// ```
/// use cupnote::{calculate_numeric_match_score, NumericTasting};
///
/// let record = NumericTasting {
///     flavors: vec!["chocolate".into(), "caramel".into(), "nutty".into()],
///     acidity: 3.0,
///     sweetness: 4.0,
///     body: 3.0,
///     aftertaste: 4.0,
/// };
/// assert_eq!(calculate_numeric_match_score(&record, &record), 100);
/// ```
pub fn calculate_numeric_match_score(user: &NumericTasting, roaster: &NumericTasting) -> u8 {
    NumericScorer::new().score(user, roaster)
}
