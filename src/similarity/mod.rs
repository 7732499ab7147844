//! 개별 유사도 신호
//!
//! 복합 스코어러가 섞어 쓰는 네 가지 신호입니다:
//!
//! 1. **편집 거리**: 철자 유사도 (`levenshtein`)
//! 2. **발음**: 한글 자모 분해 후 편집 거리 (`phonetic`)
//! 3. **포함**: 한쪽이 다른 쪽을 포함하는지 (`substring`)
//! 4. **문맥**: 로스터 노트 안에서 함께 나오는지 (`context`)

pub mod context;
pub mod levenshtein;
pub mod phonetic;
pub mod substring;

pub use context::{context_bonus, CONTEXT_BONUS_CAP};
pub use levenshtein::{levenshtein_distance, similarity};
pub use phonetic::phonetic_similarity;
pub use substring::substring_score;
