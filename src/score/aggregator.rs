//! Level 1 / Level 2 매치 스코어 집계
//!
//! 판정 순서:
//! 1. 로스터 노트가 없으면 점수 없음 (None)
//! 2. 선택한 맛의 동의어가 로스터 노트에 있는 비율 → 맛 점수
//! 3. 감각 표현이 있으면 Level 2 (맛 + 감각), 없으면 Level 1 (맛만)

use super::config::ScoreConfig;
use super::dictionary::FlavorDictionary;
use super::sensory::SensoryScorer;
use super::types::{to_percent, FlavorBreakdown, MatchLevel, MatchScore, TastingRecord};

/// 시음 기록 매치 스코어 집계기
#[derive(Debug)]
pub struct ScoreAggregator<'a> {
    dictionary: &'a FlavorDictionary,
    sensory: Box<dyn SensoryScorer>,
    config: ScoreConfig,
}

impl Default for ScoreAggregator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreAggregator<'static> {
    /// 내장 사전 + 기본 설정으로 집계기 생성
    pub fn new() -> Self {
        Self::with_config(FlavorDictionary::builtin(), ScoreConfig::default())
    }
}

impl<'a> ScoreAggregator<'a> {
    /// 사전과 설정을 지정하여 집계기 생성
    pub fn with_config(dictionary: &'a FlavorDictionary, config: ScoreConfig) -> Self {
        let sensory = config.sensory_strategy.build(config.placeholder_sensory_score);
        Self {
            dictionary,
            sensory,
            config,
        }
    }

    /// 감각 점수 전략 교체
    pub fn with_sensory_scorer(mut self, sensory: Box<dyn SensoryScorer>) -> Self {
        self.sensory = sensory;
        self
    }

    /// 매치 스코어 계산
    ///
    /// 로스터 노트가 비어 있으면 계산할 기준이 없으므로 None을 돌려줍니다.
    ///
    /// # Examples
    /// ```
    /// use cupnote::{MatchLevel, ScoreAggregator, TastingRecord};
    ///
    /// let record = TastingRecord {
    ///     selected_flavors: vec!["블루베리".into(), "초콜릿".into()],
    ///     roaster_notes: Some("Blueberry jam, cocoa nib".into()),
    ///     ..Default::default()
    /// };
    /// let score = ScoreAggregator::new().calculate(&record).unwrap();
    /// assert_eq!(score.level, MatchLevel::Level1);
    /// assert_eq!(score.score, 100);
    /// ```
    pub fn calculate(&self, record: &TastingRecord) -> Option<MatchScore> {
        let Some(roaster_text) = record.roaster_text() else {
            log::debug!("roaster notes missing, score not computable");
            return None;
        };

        let breakdown = self.breakdown_against(record, roaster_text);
        let flavor_score = flavor_percent(&breakdown);

        let score = if record.has_sensory_expressions() {
            let sensory_score = self
                .sensory
                .sensory_score(record, roaster_text, self.dictionary)
                .min(100);
            let weight = self.config.level2_flavor_weight;
            let blended = flavor_score as f64 * weight + sensory_score as f64 * (1.0 - weight);
            MatchScore {
                level: MatchLevel::Level2,
                score: to_percent(blended),
                flavor_score,
                sensory_score: Some(sensory_score),
            }
        } else {
            MatchScore {
                level: MatchLevel::Level1,
                score: flavor_score,
                flavor_score,
                sensory_score: None,
            }
        };

        log::debug!(
            "match score {:?}: {} (flavor {}, sensory {:?})",
            score.level,
            score.score,
            score.flavor_score,
            score.sensory_score
        );
        Some(score)
    }

    /// 선택한 맛 중 로스터 노트에서 찾은 것/못 찾은 것
    ///
    /// 로스터 노트가 없으면 None.
    pub fn flavor_breakdown(&self, record: &TastingRecord) -> Option<FlavorBreakdown> {
        record
            .roaster_text()
            .map(|text| self.breakdown_against(record, text))
    }

    fn breakdown_against(&self, record: &TastingRecord, roaster_text: &str) -> FlavorBreakdown {
        let text = roaster_text.to_lowercase();
        let mut breakdown = FlavorBreakdown::default();

        // 빈 선택은 무엇과도 "포함" 관계가 되므로 집계에서 제외
        for flavor in record.selected_flavors.iter().filter(|f| !f.trim().is_empty()) {
            let found = self
                .dictionary
                .synonyms(flavor)
                .iter()
                .any(|synonym| text.contains(synonym.as_str()));
            if found {
                breakdown.matched.push(flavor.clone());
            } else {
                breakdown.unmatched.push(flavor.clone());
            }
        }
        breakdown
    }
}

/// 찾은 맛 비율 (선택이 없으면 0)
fn flavor_percent(breakdown: &FlavorBreakdown) -> u8 {
    let total = breakdown.total();
    if total == 0 {
        return 0;
    }
    to_percent(breakdown.matched.len() as f64 / total as f64 * 100.0)
}
