//! 점수 집계 설정

use crate::matcher::MatcherConfig;

use super::sensory::{SensoryStrategy, DEFAULT_PLACEHOLDER_SCORE};

/// 점수 집계 설정
///
/// Level 2 집계(50/50)와 수치 평가(40/60)의 맛 가중치는 호출 경로마다
/// 다르게 쓰이므로 따로 둡니다.
#[derive(Debug, Clone)]
pub struct ScoreConfig {
    /// Level 2 점수에서 맛 점수 비중 (나머지는 감각 점수)
    pub level2_flavor_weight: f64,

    /// 수치 평가 점수에서 맛 점수 비중 (나머지는 속성 점수)
    pub numeric_flavor_weight: f64,

    /// Level 2 감각 점수 전략
    pub sensory_strategy: SensoryStrategy,

    /// 임시 전략이 돌려주는 감각 점수
    pub placeholder_sensory_score: u8,

    /// 수치 평가 척도 최소값
    pub scale_min: f64,

    /// 수치 평가 척도 최대값
    pub scale_max: f64,

    /// 수치 평가에서 맛 목록을 매칭할 때 쓰는 매처 설정 (임계값 + 가중치)
    pub matcher: MatcherConfig,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            level2_flavor_weight: 0.5,
            numeric_flavor_weight: 0.4,
            sensory_strategy: SensoryStrategy::Placeholder,
            placeholder_sensory_score: DEFAULT_PLACEHOLDER_SCORE,
            scale_min: 1.0,
            scale_max: 5.0,
            matcher: MatcherConfig::default(),
        }
    }
}

impl ScoreConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 감각 점수 전략 설정
    pub fn with_sensory_strategy(mut self, strategy: SensoryStrategy) -> Self {
        self.sensory_strategy = strategy;
        self
    }

    /// Level 2 맛 가중치 설정
    pub fn with_level2_flavor_weight(mut self, weight: f64) -> Self {
        self.level2_flavor_weight = weight.clamp(0.0, 1.0);
        self
    }

    /// 수치 평가 맛 가중치 설정
    pub fn with_numeric_flavor_weight(mut self, weight: f64) -> Self {
        self.numeric_flavor_weight = weight.clamp(0.0, 1.0);
        self
    }

    /// 맛 목록 매처 설정
    pub fn with_matcher_config(mut self, matcher: MatcherConfig) -> Self {
        self.matcher = matcher;
        self
    }

    /// 수치 평가 척도 설정
    pub fn with_scale(mut self, min: f64, max: f64) -> Self {
        self.scale_min = min;
        self.scale_max = max;
        self
    }
}
