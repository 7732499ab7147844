//! 매처 설정
//!
//! 복합 스코어링과 할당에 쓰이는 가중치/임계값 정의

/// 퍼지 매처 설정
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// 매칭으로 인정하는 최소 유사도
    pub threshold: f64,

    /// 편집 거리 유사도 가중치
    /// 철자가 가장 강한 증거
    pub string_weight: f64,

    /// 자모 발음 유사도 가중치
    pub phonetic_weight: f64,

    /// 문맥 가산점 가중치
    /// 확인용 증거일 뿐, 단독으로 높은 점수를 만들 수 없음
    pub context_weight: f64,

    /// 이 값을 넘는 포함 점수는 Exact로 취급
    pub substring_exact_threshold: f64,

    /// 문맥 가산점이 이 값을 넘으면 Contextual로 분류
    pub contextual_threshold: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: 0.6,
            string_weight: 0.5,
            phonetic_weight: 0.3,
            context_weight: 0.2,
            substring_exact_threshold: 0.7,
            contextual_threshold: 0.1,
        }
    }
}

impl MatcherConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 임계값 설정
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// 신호 가중치 설정 (편집 거리, 발음, 문맥)
    pub fn with_weights(mut self, string: f64, phonetic: f64, context: f64) -> Self {
        self.string_weight = string;
        self.phonetic_weight = phonetic;
        self.context_weight = context;
        self
    }
}
