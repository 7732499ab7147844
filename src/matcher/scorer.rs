//! 키워드/선택 쌍 복합 스코어링
//!
//! 우선순위 순서로 판정합니다 (먼저 해당하는 쪽이 결정):
//! 1. 대소문자 무시 동일 → Exact
//! 2. 강한 부분 문자열 포함 → Exact
//! 3. 편집 거리 + 발음 + 문맥 가중 합 → Contextual / Phonetic / Fuzzy

use crate::core::normalize::normalize;
use crate::similarity::{context_bonus, phonetic_similarity, similarity, substring_score};

use super::config::MatcherConfig;
use super::types::{MatchResult, MatchType};

/// 포함 매칭 신뢰도
const SUBSTRING_CONFIDENCE: f64 = 0.9;
/// 신뢰도에 반영되는 문맥 가산점 비율
const CONTEXT_CONFIDENCE_FACTOR: f64 = 0.5;

/// 판정 결과
#[derive(Debug, Clone, Copy, PartialEq)]
enum Verdict {
    Exact,
    Substring {
        score: f64,
    },
    Blended {
        string_sim: f64,
        phonetic_sim: f64,
        context: f64,
    },
}

/// 퍼지 매처
///
/// 로스터 노트 키워드와 사용자 선택을 비교하여 [`MatchResult`]를 만듭니다.
/// 내부 상태가 없으므로 여러 스레드에서 공유해도 됩니다.
#[derive(Debug, Clone, Default)]
pub struct FlavorMatcher {
    pub(super) config: MatcherConfig,
}

impl FlavorMatcher {
    /// 기본 설정으로 매처 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 설정을 지정하여 매처 생성
    pub fn with_config(config: MatcherConfig) -> Self {
        Self { config }
    }

    /// 현재 설정
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// 키워드 하나와 선택 하나를 비교
    ///
    /// # Examples
    /// ```
    /// use cupnote::{FlavorMatcher, MatchType};
    ///
    /// let matcher = FlavorMatcher::new();
    /// let result = matcher.score("블루베리", "블루베리", "");
    /// assert_eq!(result.match_type, MatchType::Exact);
    /// assert_eq!(result.similarity, 1.0);
    /// ```
    pub fn score(&self, keyword: &str, selection: &str, note: &str) -> MatchResult {
        let verdict = self.judge(keyword, selection, note);
        let result = self.build_result(keyword, selection, verdict);

        log::debug!(
            "score '{}' / '{}' -> {:?} {:.3} (confidence {:.3})",
            keyword,
            selection,
            result.match_type,
            result.similarity,
            result.confidence
        );
        result
    }

    /// 우선순위 순서로 판정
    fn judge(&self, keyword: &str, selection: &str, note: &str) -> Verdict {
        let keyword = normalize(keyword);
        let selection = normalize(selection);

        if !keyword.is_empty() && keyword == selection {
            return Verdict::Exact;
        }

        let contained = substring_score(&keyword, &selection);
        if contained > self.config.substring_exact_threshold {
            return Verdict::Substring { score: contained };
        }

        Verdict::Blended {
            string_sim: similarity(&keyword, &selection),
            phonetic_sim: phonetic_similarity(&keyword, &selection),
            context: context_bonus(&keyword, &selection, note),
        }
    }

    fn build_result(&self, keyword: &str, selection: &str, verdict: Verdict) -> MatchResult {
        let (similarity, confidence, match_type, explanation) = match verdict {
            Verdict::Exact => (1.0, 1.0, MatchType::Exact, "exact match".to_string()),
            Verdict::Substring { score } => (
                score,
                SUBSTRING_CONFIDENCE,
                MatchType::Exact,
                "substring match".to_string(),
            ),
            Verdict::Blended {
                string_sim,
                phonetic_sim,
                context,
            } => {
                let similarity = string_sim * self.config.string_weight
                    + phonetic_sim * self.config.phonetic_weight
                    + context * self.config.context_weight;
                let similarity = similarity.clamp(0.0, 1.0);
                let confidence = (similarity + context * CONTEXT_CONFIDENCE_FACTOR).clamp(0.0, 1.0);
                let match_type = self.classify(string_sim, phonetic_sim, context);
                let explanation = explain(match_type, string_sim, phonetic_sim, context);
                (similarity, confidence, match_type, explanation)
            }
        };

        MatchResult {
            keyword: keyword.to_string(),
            user_selection: selection.to_string(),
            similarity,
            confidence,
            match_type,
            explanation,
        }
    }

    /// 문맥 → 발음 → 철자 순으로 분류
    fn classify(&self, string_sim: f64, phonetic_sim: f64, context: f64) -> MatchType {
        if context > self.config.contextual_threshold {
            MatchType::Contextual
        } else if phonetic_sim > string_sim {
            MatchType::Phonetic
        } else {
            MatchType::Fuzzy
        }
    }
}

fn explain(match_type: MatchType, string_sim: f64, phonetic_sim: f64, context: f64) -> String {
    let mut text = format!(
        "{} match: spelling {:.0}%, sound {:.0}%",
        match_type.label(),
        string_sim * 100.0,
        phonetic_sim * 100.0
    );
    if context > 0.0 {
        text.push_str(&format!(", context +{:.0}%", context * 100.0));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let matcher = FlavorMatcher::new();
        let result = matcher.score("블루베리", "블루베리", "");
        assert_eq!(result.match_type, MatchType::Exact);
        assert_eq!(result.similarity, 1.0);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.explanation, "exact match");
    }

    #[test]
    fn test_exact_match_ignores_case_and_whitespace() {
        let result = FlavorMatcher::new().score("Chocolate", " chocolate ", "");
        assert_eq!(result.match_type, MatchType::Exact);
        // 원본 토큰은 그대로 보존
        assert_eq!(result.keyword, "Chocolate");
        assert_eq!(result.user_selection, " chocolate ");
    }

    #[test]
    fn test_substring_match() {
        let result = FlavorMatcher::new().score("dark chocolate", "chocolate", "");
        assert_eq!(result.match_type, MatchType::Exact);
        assert_eq!(result.similarity, 1.0);
        assert!((result.confidence - 0.9).abs() < f64::EPSILON);
        assert_eq!(result.explanation, "substring match");
    }

    #[test]
    fn test_weak_substring_falls_through() {
        // "tea" ⊆ "black tea notes": 0.5 → 가중 합으로 넘어감
        let result = FlavorMatcher::new().score("tea", "black tea notes", "");
        assert_ne!(result.explanation, "substring match");
    }

    #[test]
    fn test_phonetic_match() {
        let result = FlavorMatcher::new().score("블루베리", "블루배리", "");
        assert_eq!(result.match_type, MatchType::Phonetic);
        // 0.75 × 0.5 + 8/9 × 0.3
        let expected = 0.75 * 0.5 + (8.0 / 9.0) * 0.3;
        assert!((result.similarity - expected).abs() < 1e-9);
        assert!((result.confidence - expected).abs() < 1e-9);
    }

    #[test]
    fn test_fuzzy_match() {
        let result = FlavorMatcher::new().score("caramel", "carmel", "");
        assert_eq!(result.match_type, MatchType::Fuzzy);
        let sim = 1.0 - 1.0 / 7.0;
        assert!((result.similarity - sim * 0.8).abs() < 1e-9);
        assert!(result.explanation.starts_with("fuzzy match"));
    }

    #[test]
    fn test_contextual_overrides_phonetic() {
        let note = "블루배리 블루베리 향이 가득하다.";
        let result = FlavorMatcher::new().score("블루베리", "블루배리", note);
        assert_eq!(result.match_type, MatchType::Contextual);
        assert!(result.explanation.contains("context +30%"));
        assert!(result.confidence > result.similarity);
    }

    #[test]
    fn test_unrelated_pair_stays_low_with_context() {
        let note = "Lemon and chocolate.";
        let result = FlavorMatcher::new().score("lemon", "chocolate", note);
        assert!(result.similarity < 0.6);
    }

    #[test]
    fn test_bounds() {
        let matcher = FlavorMatcher::new();
        let note = "Berry jam. Berry jam! Berry jam?";
        for (a, b) in [("berry", "jam"), ("", ""), ("x", "블루베리"), ("jam", "jams")] {
            let result = matcher.score(a, b, note);
            assert!((0.0..=1.0).contains(&result.similarity));
            assert!((0.0..=1.0).contains(&result.confidence));
        }
    }

    #[test]
    fn test_empty_tokens_are_not_exact() {
        let result = FlavorMatcher::new().score("", "", "");
        assert_eq!(result.similarity, 0.0);
        assert_eq!(result.match_type, MatchType::Fuzzy);
    }
}
