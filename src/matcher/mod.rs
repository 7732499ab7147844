//! 퍼지 키워드 매칭
//!
//! 로스터 노트 키워드와 사용자가 고른 맛 표현을 비교합니다.
//!
//! # 개요
//!
//! 1. **복합 스코어링**: 쌍 하나를 Exact / Fuzzy / Phonetic / Contextual로 판정
//! 2. **탐욕적 할당**: 키워드마다 가장 잘 맞는 선택을 하나씩 할당 (중복 없음)
//!
//! # 사용 예시
//!
//! ```
//! use cupnote::matcher::{find_best_matches, FlavorMatcher, MatcherConfig};
//!
//! let matches = find_best_matches(&["chocolate", "caramel"], &["carmel", "Chocolate"], "", 0.6);
//! assert_eq!(matches.len(), 2);
//!
//! let strict = FlavorMatcher::with_config(MatcherConfig::new().with_threshold(0.9));
//! assert_eq!(strict.find_best_matches(&["caramel"], &["carmel"], "").len(), 0);
//! ```

mod assign;
mod config;
mod keywords;
mod scorer;
mod types;

// 공개 인터페이스
pub use config::MatcherConfig;
pub use keywords::extract_keywords;
pub use scorer::FlavorMatcher;
pub use types::{MatchResult, MatchType};

/// 기본 설정으로 키워드/선택 한 쌍 스코어링
pub fn score(keyword: &str, selection: &str, note: &str) -> MatchResult {
    FlavorMatcher::new().score(keyword, selection, note)
}

/// 기본 가중치 + 지정 임계값으로 최선 매칭 목록 생성
pub fn find_best_matches<K, S>(keywords: &[K], selections: &[S], note: &str, threshold: f64) -> Vec<MatchResult>
where
    K: AsRef<str>,
    S: AsRef<str>,
{
    FlavorMatcher::new().find_best_matches_with_threshold(keywords, selections, note, threshold)
}
