//! 매치 스코어 입력/출력 타입

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 감각 표현 카테고리 (선언 순서 = 정렬 순서)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SensoryCategory {
    Acidity,
    Sweetness,
    Bitterness,
    Body,
    Aroma,
    Finish,
}

impl SensoryCategory {
    /// 전체 카테고리 (고정 순서)
    pub const ALL: [SensoryCategory; 6] = [
        SensoryCategory::Acidity,
        SensoryCategory::Sweetness,
        SensoryCategory::Bitterness,
        SensoryCategory::Body,
        SensoryCategory::Aroma,
        SensoryCategory::Finish,
    ];

    /// 저장 데이터의 키 문자열
    pub fn key(&self) -> &'static str {
        match self {
            SensoryCategory::Acidity => "acidity",
            SensoryCategory::Sweetness => "sweetness",
            SensoryCategory::Bitterness => "bitterness",
            SensoryCategory::Body => "body",
            SensoryCategory::Aroma => "aroma",
            SensoryCategory::Finish => "finish",
        }
    }

    /// 키 문자열 → 카테고리 (모르는 키는 None)
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key.trim())
    }
}

/// 완료된 시음 기록 (점수 계산에 필요한 부분만)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TastingRecord {
    /// 사용자가 고른 맛 표현
    #[serde(default)]
    pub selected_flavors: Vec<String>,
    /// 카테고리 → 고른 감각 표현
    #[serde(default)]
    pub sensory_expressions: HashMap<String, Vec<String>>,
    /// 로스터 노트 원문
    #[serde(default)]
    pub roaster_notes: Option<String>,
}

impl TastingRecord {
    /// 로스터 노트 (비어 있거나 공백뿐이면 None)
    pub fn roaster_text(&self) -> Option<&str> {
        self.roaster_notes
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// 알려진 카테고리의 비어 있지 않은 감각 표현
    ///
    /// 모르는 카테고리 키는 조용히 무시합니다. 공백만 다른 키처럼 같은
    /// 카테고리로 읽히는 키가 여럿이면 모두 합치고, 결과는 (카테고리, 원래 키)
    /// 순으로 정렬되어 HashMap 순회 순서와 무관합니다.
    pub fn sensory_descriptors(&self) -> Vec<(SensoryCategory, &str)> {
        let mut keyed: Vec<(SensoryCategory, &str, &Vec<String>)> = self
            .sensory_expressions
            .iter()
            .filter_map(|(key, values)| SensoryCategory::from_key(key).map(|c| (c, key.as_str(), values)))
            .collect();
        keyed.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

        keyed
            .into_iter()
            .flat_map(|(category, _, values)| {
                values
                    .iter()
                    .map(|v| v.trim())
                    .filter(|v| !v.is_empty())
                    .map(move |v| (category, v))
            })
            .collect()
    }

    /// 감각 표현이 하나라도 있는지 (Level 2 여부)
    pub fn has_sensory_expressions(&self) -> bool {
        !self.sensory_descriptors().is_empty()
    }
}

/// 점수 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MatchLevel {
    /// 맛만 비교
    Level1,
    /// 맛 + 감각 표현
    Level2,
}

impl From<MatchLevel> for u8 {
    fn from(level: MatchLevel) -> Self {
        match level {
            MatchLevel::Level1 => 1,
            MatchLevel::Level2 => 2,
        }
    }
}

impl TryFrom<u8> for MatchLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MatchLevel::Level1),
            2 => Ok(MatchLevel::Level2),
            other => Err(format!("알 수 없는 매치 레벨: {}", other)),
        }
    }
}

/// 시음 기록 하나의 매치 스코어 (생성 후 불변)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchScore {
    pub level: MatchLevel,
    /// 최종 점수 (0 ~ 100)
    pub score: u8,
    /// 맛 일치 점수 (0 ~ 100)
    pub flavor_score: u8,
    /// 감각 점수 (Level 1이면 None)
    pub sensory_score: Option<u8>,
}

/// 선택한 맛 중 로스터 노트에서 찾은 것/못 찾은 것
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorBreakdown {
    pub matched: Vec<String>,
    pub unmatched: Vec<String>,
}

impl FlavorBreakdown {
    /// 전체 선택 수
    pub fn total(&self) -> usize {
        self.matched.len() + self.unmatched.len()
    }
}

/// 1~5 척도 수치 평가 기록
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumericTasting {
    #[serde(default)]
    pub flavors: Vec<String>,
    pub acidity: f64,
    pub sweetness: f64,
    pub body: f64,
    pub aftertaste: f64,
}

impl NumericTasting {
    /// 비교 대상 속성값 (산미, 단맛, 바디, 여운)
    pub fn attributes(&self) -> [f64; 4] {
        [self.acidity, self.sweetness, self.body, self.aftertaste]
    }
}

/// 0~100 범위의 정수로 반올림
pub(crate) fn to_percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}
