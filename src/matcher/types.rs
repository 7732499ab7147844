//! 매칭 결과 타입

use serde::{Deserialize, Serialize};

/// 매칭 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// 대소문자 무시 동일, 또는 강한 부분 문자열 포함
    Exact,
    /// 철자 유사
    Fuzzy,
    /// 자모 단위 발음 유사
    Phonetic,
    /// 로스터 노트 문맥상 함께 등장
    Contextual,
}

impl MatchType {
    /// 설명 문구용 이름
    pub fn label(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Fuzzy => "fuzzy",
            MatchType::Phonetic => "phonetic",
            MatchType::Contextual => "contextual",
        }
    }
}

/// 키워드 하나와 사용자 선택 하나의 매칭 결과
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// 로스터 노트 쪽 키워드
    pub keyword: String,
    /// 사용자가 고른 토큰
    pub user_selection: String,
    /// 유사도 (0.0 ~ 1.0)
    pub similarity: f64,
    /// 신뢰도 (0.0 ~ 1.0)
    pub confidence: f64,
    pub match_type: MatchType,
    /// UI에 보여줄 "왜 매칭되었나" 설명
    pub explanation: String,
}
