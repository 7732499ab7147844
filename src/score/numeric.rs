//! 수치 평가(1~5 척도) 매치 스코어
//!
//! `맛 × 0.4 + 속성 × 0.6`. 속성 점수는 산미/단맛/바디/여운마다
//! `1 - |사용자 - 로스터| / (최대 - 최소)`를 구해 평균낸 값입니다.

use crate::matcher::FlavorMatcher;

use super::config::ScoreConfig;
use super::types::{to_percent, NumericTasting};

/// 수치 평가 점수 상세
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericBreakdown {
    /// 맛 목록 일치율 (0.0 ~ 100.0)
    pub flavor: f64,
    /// 속성 유사도 (0.0 ~ 100.0)
    pub sensory: f64,
    /// 최종 점수
    pub score: u8,
}

/// 수치 평가 스코어러
#[derive(Debug, Clone)]
pub struct NumericScorer {
    matcher: FlavorMatcher,
    config: ScoreConfig,
}

impl Default for NumericScorer {
    fn default() -> Self {
        Self::with_config(ScoreConfig::default())
    }
}

impl NumericScorer {
    /// 기본 설정으로 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 설정을 지정하여 생성
    pub fn with_config(config: ScoreConfig) -> Self {
        let matcher = FlavorMatcher::with_config(config.matcher.clone());
        Self { matcher, config }
    }

    /// 최종 점수 (0 ~ 100)
    pub fn score(&self, user: &NumericTasting, roaster: &NumericTasting) -> u8 {
        self.breakdown(user, roaster).score
    }

    /// 점수 상세
    pub fn breakdown(&self, user: &NumericTasting, roaster: &NumericTasting) -> NumericBreakdown {
        let flavor = self.flavor_similarity(user, roaster);
        let sensory = self.sensory_similarity(user, roaster);
        let weight = self.config.numeric_flavor_weight;
        let score = to_percent(flavor * weight + sensory * (1.0 - weight));

        log::debug!("numeric score {} (flavor {:.1}, sensory {:.1})", score, flavor, sensory);
        NumericBreakdown { flavor, sensory, score }
    }

    /// 로스터 맛 중 사용자가 맞힌 비율 (0.0 ~ 100.0)
    ///
    /// 로스터 맛이 키워드, 사용자 맛이 선택이 되어 탐욕적 할당을 거칩니다.
    pub fn flavor_similarity(&self, user: &NumericTasting, roaster: &NumericTasting) -> f64 {
        if user.flavors.is_empty() || roaster.flavors.is_empty() {
            return 0.0;
        }
        let matches = self.matcher.find_best_matches(&roaster.flavors, &user.flavors, "");
        matches.len() as f64 / roaster.flavors.len() as f64 * 100.0
    }

    /// 속성별 거리 유사도 평균 (0.0 ~ 100.0)
    pub fn sensory_similarity(&self, user: &NumericTasting, roaster: &NumericTasting) -> f64 {
        let (min, max) = (self.config.scale_min, self.config.scale_max);
        let range = max - min;
        // NaN 척도도 여기서 걸러야 clamp가 패닉하지 않음
        if range.is_nan() || range <= 0.0 {
            log::warn!("invalid scale {}..{}, sensory similarity set to 0", min, max);
            return 0.0;
        }

        let pairs = user.attributes().into_iter().zip(roaster.attributes());
        let total: f64 = pairs
            .map(|(u, r)| {
                let u = u.clamp(min, max);
                let r = r.clamp(min, max);
                1.0 - (u - r).abs() / range
            })
            .sum();

        total / 4.0 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::MatcherConfig;

    fn tasting(flavors: &[&str], values: [f64; 4]) -> NumericTasting {
        NumericTasting {
            flavors: flavors.iter().map(|f| f.to_string()).collect(),
            acidity: values[0],
            sweetness: values[1],
            body: values[2],
            aftertaste: values[3],
        }
    }

    #[test]
    fn test_identical_records() {
        let flavors = ["chocolate", "caramel", "nutty"];
        let user = tasting(&flavors, [3.0, 4.0, 3.0, 4.0]);
        let roaster = tasting(&flavors, [3.0, 4.0, 3.0, 4.0]);
        assert_eq!(NumericScorer::new().score(&user, &roaster), 100);
    }

    #[test]
    fn test_empty_roaster_flavors() {
        let scorer = NumericScorer::new();
        let user = tasting(&["chocolate"], [3.0; 4]);
        let roaster = tasting(&[], [3.0; 4]);
        let breakdown = scorer.breakdown(&user, &roaster);
        assert_eq!(breakdown.flavor, 0.0);
        // 속성만 100 → 60
        assert_eq!(breakdown.score, 60);
    }

    #[test]
    fn test_single_attribute_off_by_two() {
        let scorer = NumericScorer::new();
        let user = tasting(&[], [3.0, 4.0, 3.0, 4.0]);
        let roaster = tasting(&[], [5.0, 4.0, 3.0, 4.0]);
        let sensory = scorer.sensory_similarity(&user, &roaster);
        assert!((sensory - 87.5).abs() < 1e-9);
        assert_eq!(to_percent(sensory), 88);
    }

    #[test]
    fn test_fuzzy_flavor_matching() {
        let scorer = NumericScorer::new();
        let user = tasting(&["Carmel", "cherry"], [3.0; 4]);
        let roaster = tasting(&["caramel", "chocolate"], [3.0; 4]);
        // caramel ↔ Carmel 만 매칭 → 50%
        assert!((scorer.flavor_similarity(&user, &roaster) - 50.0).abs() < 1e-9);
        // 50 × 0.4 + 100 × 0.6 = 80
        assert_eq!(scorer.score(&user, &roaster), 80);
    }

    #[test]
    fn test_out_of_scale_values_clamped() {
        let scorer = NumericScorer::new();
        let user = tasting(&[], [9.0, 4.0, 3.0, 4.0]);
        let roaster = tasting(&[], [1.0, 4.0, 3.0, 4.0]);
        // 9 → 5, 거리 4/4 → 0, 평균 75
        assert!((scorer.sensory_similarity(&user, &roaster) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_ten_point_scale_and_weight() {
        let config = ScoreConfig::new().with_scale(1.0, 10.0).with_numeric_flavor_weight(0.5);
        let scorer = NumericScorer::with_config(config);
        let user = tasting(&["cherry"], [1.0, 10.0, 5.0, 5.0]);
        let roaster = tasting(&["cherry"], [10.0, 10.0, 5.0, 5.0]);
        let breakdown = scorer.breakdown(&user, &roaster);
        assert!((breakdown.sensory - 75.0).abs() < 1e-9);
        assert_eq!(breakdown.score, 88); // round(100 × 0.5 + 75 × 0.5)
    }

    #[test]
    fn test_invalid_scale() {
        let user = tasting(&[], [3.0; 4]);
        for (min, max) in [(5.0, 5.0), (5.0, 1.0), (f64::NAN, 5.0), (1.0, f64::NAN)] {
            let scorer = NumericScorer::with_config(ScoreConfig::new().with_scale(min, max));
            assert_eq!(scorer.sensory_similarity(&user, &user), 0.0);
            assert_eq!(scorer.score(&user, &user), 0);
        }
    }

    #[test]
    fn test_matcher_weights_applied_to_flavors() {
        let user = tasting(&["carmel"], [3.0; 4]);
        let roaster = tasting(&["caramel"], [3.0; 4]);
        assert!((NumericScorer::new().flavor_similarity(&user, &roaster) - 100.0).abs() < 1e-9);

        // 모든 신호 가중치 0 → 퍼지 매칭 불가
        let matcher = MatcherConfig::new().with_weights(0.0, 0.0, 0.0);
        let scorer = NumericScorer::with_config(ScoreConfig::new().with_matcher_config(matcher));
        assert_eq!(scorer.flavor_similarity(&user, &roaster), 0.0);
        assert_eq!(scorer.score(&user, &roaster), 60);
    }
}
