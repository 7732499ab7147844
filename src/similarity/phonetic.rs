//! 자모 분해 기반 발음 유사도
//!
//! 음절 블록이 달라도 소리가 비슷한 단어(예: 배리/베리)는
//! 음절 단위보다 자모 단위에서 더 가깝게 나옵니다.

use crate::core::unicode::to_jamo_string;

use super::levenshtein::similarity;

/// 자모 시퀀스 편집 거리 유사도 (0.0 ~ 1.0)
///
/// 한글이 아닌 문자는 그대로 비교되므로 라틴 문자만 있는 경우
/// 일반 편집 거리 유사도와 같습니다.
///
/// # Examples
/// ```
/// use cupnote::{phonetic_similarity, similarity};
/// // 음절로는 1/4이 다르지만 자모로는 1/8만 다름
/// assert!(phonetic_similarity("블루베리", "블루배리") > similarity("블루베리", "블루배리"));
/// ```
pub fn phonetic_similarity(a: &str, b: &str) -> f64 {
    similarity(&to_jamo_string(a), &to_jamo_string(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phonetic_identity() {
        assert!((phonetic_similarity("캐러멜", "캐러멜") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_phonetic_empty() {
        assert_eq!(phonetic_similarity("", "캐러멜"), 0.0);
        assert_eq!(phonetic_similarity("캐러멜", ""), 0.0);
    }

    #[test]
    fn test_phonetic_beats_syllable_distance() {
        // ㅂㅡㄹㄹㅜㅂㅔㄹㅣ vs ㅂㅡㄹㄹㅜㅂㅐㄹㅣ: 9자 중 1자 차이
        let phonetic = phonetic_similarity("블루베리", "블루배리");
        assert!((phonetic - (1.0 - 1.0 / 9.0)).abs() < 1e-9);
        assert!(phonetic > similarity("블루베리", "블루배리"));

        // 카라멜 / 캐러멜
        assert!(phonetic_similarity("카라멜", "캐러멜") > similarity("카라멜", "캐러멜"));
    }

    #[test]
    fn test_phonetic_latin_equals_string_similarity() {
        assert_eq!(phonetic_similarity("cherry", "berry"), similarity("cherry", "berry"));
    }
}
