//! Level 2 감각 점수 전략
//!
//! 감각 표현 비교는 아직 확정된 방식이 없어서 전략 객체로 분리합니다.
//! 기본값은 고정 상수를 돌려주는 [`PlaceholderSensory`]입니다.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::dictionary::FlavorDictionary;
use super::types::{to_percent, TastingRecord};

/// 기본 임시 감각 점수
pub const DEFAULT_PLACEHOLDER_SCORE: u8 = 75;

/// 감각 점수 계산 전략
pub trait SensoryScorer: fmt::Debug + Send + Sync {
    /// 감각 점수 (0 ~ 100)
    ///
    /// 감각 표현이 있고 로스터 노트가 비어 있지 않은 기록에 대해서만 호출됩니다.
    fn sensory_score(&self, record: &TastingRecord, roaster_text: &str, dictionary: &FlavorDictionary) -> u8;
}

/// 고정 상수를 돌려주는 임시 전략
///
/// 실제로 측정한 값이 아니므로 호출 측은 이 점수를 신뢰하면 안 됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSensory {
    pub value: u8,
}

impl Default for PlaceholderSensory {
    fn default() -> Self {
        Self {
            value: DEFAULT_PLACEHOLDER_SCORE,
        }
    }
}

impl SensoryScorer for PlaceholderSensory {
    fn sensory_score(&self, _record: &TastingRecord, _roaster_text: &str, _dictionary: &FlavorDictionary) -> u8 {
        self.value.min(100)
    }
}

/// 감각 표현이 로스터 노트에 등장하는 비율
///
/// 표현마다 사전 동의어와 표현 자체를 후보로 삼아 대소문자 무시 포함 검사를 합니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoasterTextSensory;

impl SensoryScorer for RoasterTextSensory {
    fn sensory_score(&self, record: &TastingRecord, roaster_text: &str, dictionary: &FlavorDictionary) -> u8 {
        let descriptors = record.sensory_descriptors();
        if descriptors.is_empty() {
            return 0;
        }

        let text = roaster_text.to_lowercase();
        let found = descriptors
            .iter()
            .filter(|(category, descriptor)| {
                let mut candidates = dictionary.synonyms(descriptor);
                candidates.push(descriptor.to_lowercase());
                let hit = candidates.iter().any(|c| text.contains(c.as_str()));
                log::trace!("sensory {:?} '{}' found: {}", category, descriptor, hit);
                hit
            })
            .count();

        to_percent(found as f64 / descriptors.len() as f64 * 100.0)
    }
}

/// 설정 파일에서 고르는 전략 종류
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensoryStrategy {
    #[default]
    Placeholder,
    RoasterText,
}

impl SensoryStrategy {
    /// 전략 객체 생성
    pub fn build(self, placeholder_score: u8) -> Box<dyn SensoryScorer> {
        match self {
            SensoryStrategy::Placeholder => Box::new(PlaceholderSensory {
                value: placeholder_score,
            }),
            SensoryStrategy::RoasterText => Box::new(RoasterTextSensory),
        }
    }
}
