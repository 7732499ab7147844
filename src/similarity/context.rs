//! 로스터 노트 내 동시 출현 가산점
//!
//! 키워드와 사용자 선택이 같은 문장에 나오거나, 단어 거리상 가까이
//! 붙어 있으면 두 토큰이 같은 맛을 가리킬 가능성이 높다고 봅니다.

use crate::core::normalize::{normalize, split_sentences, tokenize_words};

/// 같은 문장 하나당 가산점
const SAME_SENTENCE_BONUS: f64 = 0.2;
/// 근접 가산점 최대값 (거리 0)
const PROXIMITY_BONUS: f64 = 0.15;
/// 근접으로 인정하는 최대 단어 거리
const PROXIMITY_WINDOW: usize = 2;
/// 전체 가산점 상한
pub const CONTEXT_BONUS_CAP: f64 = 0.3;

/// 문맥 가산점 (0.0 ~ 0.3)
pub fn context_bonus(keyword: &str, selection: &str, note: &str) -> f64 {
    let keyword = normalize(keyword);
    let selection = normalize(selection);
    if keyword.is_empty() || selection.is_empty() || note.trim().is_empty() {
        return 0.0;
    }

    let bonus = same_sentence_bonus(&keyword, &selection, note)
        + proximity_bonus(&keyword, &selection, note);

    log::trace!("context bonus '{}' / '{}' = {:.3}", keyword, selection, bonus);
    bonus.min(CONTEXT_BONUS_CAP)
}

/// 두 토큰을 모두 포함하는 문장마다 0.2
fn same_sentence_bonus(keyword: &str, selection: &str, note: &str) -> f64 {
    let shared = split_sentences(note)
        .map(str::to_lowercase)
        .filter(|sentence| sentence.contains(keyword) && sentence.contains(selection))
        .count();
    shared as f64 * SAME_SENTENCE_BONUS
}

/// 첫 출현 위치 간 단어 거리가 2 이하이면 `0.15 × (3 - d) / 3`
fn proximity_bonus(keyword: &str, selection: &str, note: &str) -> f64 {
    let words = tokenize_words(note);
    let keyword_pos = words.iter().position(|w| w.contains(keyword));
    let selection_pos = words.iter().position(|w| w.contains(selection));

    match (keyword_pos, selection_pos) {
        (Some(k), Some(s)) => {
            let distance = k.abs_diff(s);
            if distance <= PROXIMITY_WINDOW {
                let span = (PROXIMITY_WINDOW + 1) as f64;
                PROXIMITY_BONUS * (span - distance as f64) / span
            } else {
                0.0
            }
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTE: &str = "Juicy blueberry and dark chocolate. Long caramel finish!";

    #[test]
    fn test_same_sentence_and_adjacent() {
        // 같은 문장 0.2 + 거리 2 → 0.05 = 0.25
        let bonus = context_bonus("blueberry", "dark", NOTE);
        assert!((bonus - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_cap() {
        // 같은 문장 0.2 + 거리 1 → 0.1 = 0.3
        let bonus = context_bonus("dark", "chocolate", NOTE);
        assert!((bonus - 0.3).abs() < 1e-9);

        // 두 문장 모두 포함 → 0.4 + 0.15 에서 0.3으로 제한
        let note = "Berry jam. Berry jam! Berry jam?";
        assert!((context_bonus("berry", "jam", note) - CONTEXT_BONUS_CAP).abs() < 1e-9);
    }

    #[test]
    fn test_different_sentences_far_apart() {
        assert_eq!(context_bonus("blueberry", "finish", NOTE), 0.0);
    }

    #[test]
    fn test_proximity_across_sentences() {
        // 다른 문장이지만 단어 거리 1 ("chocolate." / "long")
        let bonus = context_bonus("chocolate", "long", NOTE);
        assert!((bonus - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_same_word_distance_zero() {
        // 마침표로 문장이 갈리지만 공백이 없어 한 단어 → 거리 0, 근접 가산점만 0.15
        let bonus = context_bonus("blue", "jam", "Blue.jam spread");
        assert!((bonus - PROXIMITY_BONUS).abs() < 1e-9);

        // 같은 단어 + 같은 문장 → 0.2 + 0.15 에서 0.3으로 제한
        let bonus = context_bonus("blueberry", "berry", "Ripe blueberry, jam");
        assert!((bonus - CONTEXT_BONUS_CAP).abs() < 1e-9);
    }

    #[test]
    fn test_absent_token() {
        assert_eq!(context_bonus("cherry", "chocolate", NOTE), 0.0);
        assert_eq!(context_bonus("dark", "chocolate", ""), 0.0);
        assert_eq!(context_bonus("", "chocolate", NOTE), 0.0);
    }

    #[test]
    fn test_case_insensitive_hangul_mixed() {
        let note = "블루베리 잼 같은 단맛. Bright ACIDITY";
        assert!((context_bonus("블루베리", "잼", note) - 0.3).abs() < 1e-9);
        assert!((context_bonus("bright", "acidity", note) - 0.3).abs() < 1e-9);
    }
}
