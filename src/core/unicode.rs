//! 유니코드 한글 음절 분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 초성 하나당 음절 수 (21 × 28 = 588)
const SYLLABLES_PER_CHOSEONG: u32 = JUNGSEONG_COUNT * JONGSEONG_COUNT;

/// 초성 테이블 (호환용 자모)
#[rustfmt::skip]
const CHOSEONG_TABLE: [&str; 19] = [
    "ㄱ", "ㄲ", "ㄴ", "ㄷ", "ㄸ", "ㄹ", "ㅁ", "ㅂ", "ㅃ", "ㅅ",
    "ㅆ", "ㅇ", "ㅈ", "ㅉ", "ㅊ", "ㅋ", "ㅌ", "ㅍ", "ㅎ",
];

/// 중성 테이블 (호환용 자모)
#[rustfmt::skip]
const JUNGSEONG_TABLE: [&str; 21] = [
    "ㅏ", "ㅐ", "ㅑ", "ㅒ", "ㅓ", "ㅔ", "ㅕ", "ㅖ", "ㅗ", "ㅘ",
    "ㅙ", "ㅚ", "ㅛ", "ㅜ", "ㅝ", "ㅞ", "ㅟ", "ㅠ", "ㅡ", "ㅢ", "ㅣ",
];

/// 종성 테이블 (0번 = 종성 없음)
#[rustfmt::skip]
const JONGSEONG_TABLE: [&str; 28] = [
    "",   "ㄱ", "ㄲ", "ㄳ", "ㄴ", "ㄵ", "ㄶ", "ㄷ", "ㄹ", "ㄺ",
    "ㄻ", "ㄼ", "ㄽ", "ㄾ", "ㄿ", "ㅀ", "ㅁ", "ㅂ", "ㅄ", "ㅅ",
    "ㅆ", "ㅇ", "ㅈ", "ㅊ", "ㅋ", "ㅌ", "ㅍ", "ㅎ",
];

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_complete_hangul(ch: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(ch as u32))
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_complete_hangul(c) {
        return None;
    }
    let code = c as u32 - HANGUL_SYLLABLE_BASE;
    let choseong = code / SYLLABLES_PER_CHOSEONG;
    let jungseong = (code % SYLLABLES_PER_CHOSEONG) / JONGSEONG_COUNT;
    let jongseong = code % JONGSEONG_COUNT;
    Some((choseong, jungseong, jongseong))
}

/// 초성 인덱스 -> 자모 문자열
pub fn choseong_jamo(cho: u32) -> Option<&'static str> {
    (cho < CHOSEONG_COUNT).then(|| CHOSEONG_TABLE[cho as usize])
}

/// 중성 인덱스 -> 자모 문자열
pub fn jungseong_jamo(jung: u32) -> Option<&'static str> {
    (jung < JUNGSEONG_COUNT).then(|| JUNGSEONG_TABLE[jung as usize])
}

/// 종성 인덱스 -> 자모 문자열 (0 = 빈 문자열)
pub fn jongseong_jamo(jong: u32) -> Option<&'static str> {
    (jong < JONGSEONG_COUNT).then(|| JONGSEONG_TABLE[jong as usize])
}

/// 문자 하나를 자모 목록으로 분해
///
/// 완성형 한글은 초성/중성/종성으로 나누고 종성이 없으면 생략합니다.
/// 한글이 아닌 문자는 그대로 한 개짜리 목록이 됩니다.
///
/// # Examples
/// ```
/// use cupnote::decompose_hangul;
/// assert_eq!(decompose_hangul('가'), vec!["ㄱ", "ㅏ"]);
/// assert_eq!(decompose_hangul('한'), vec!["ㅎ", "ㅏ", "ㄴ"]);
/// assert_eq!(decompose_hangul('a'), vec!["a"]);
/// ```
pub fn decompose_hangul(ch: char) -> Vec<String> {
    let Some((cho, jung, jong)) = decompose_syllable(ch) else {
        return vec![ch.to_string()];
    };

    [choseong_jamo(cho), jungseong_jamo(jung), jongseong_jamo(jong)]
        .into_iter()
        .flatten()
        .filter(|jamo| !jamo.is_empty())
        .map(str::to_string)
        .collect()
}

/// 문자열 전체를 자모 문자열로 펼침
pub fn to_jamo_string(text: &str) -> String {
    text.chars().flat_map(decompose_hangul).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('각'), Some((0, 0, 1)));
        assert_eq!(decompose_syllable('한'), Some((18, 0, 4)));
        assert_eq!(decompose_syllable('글'), Some((0, 18, 8)));
        assert_eq!(decompose_syllable('힣'), Some((18, 20, 27)));

        // 한글이 아닌 문자
        assert_eq!(decompose_syllable('a'), None);
        assert_eq!(decompose_syllable('1'), None);
        assert_eq!(decompose_syllable('ㄱ'), None);
    }

    #[test]
    fn test_decompose_hangul_no_jongseong() {
        // 가 = ㄱ + ㅏ, 종성 없음은 생략
        assert_eq!(decompose_hangul('가'), vec!["ㄱ", "ㅏ"]);
        assert_eq!(decompose_hangul('루'), vec!["ㄹ", "ㅜ"]);
    }

    #[test]
    fn test_decompose_hangul_with_jongseong() {
        assert_eq!(decompose_hangul('블'), vec!["ㅂ", "ㅡ", "ㄹ"]);
        assert_eq!(decompose_hangul('닭'), vec!["ㄷ", "ㅏ", "ㄺ"]);
    }

    #[test]
    fn test_decompose_hangul_passthrough() {
        assert_eq!(decompose_hangul('a'), vec!["a"]);
        assert_eq!(decompose_hangul(' '), vec![" "]);
        assert_eq!(decompose_hangul('ㅋ'), vec!["ㅋ"]);
    }

    #[test]
    fn test_jamo_tables() {
        assert_eq!(choseong_jamo(0), Some("ㄱ"));
        assert_eq!(choseong_jamo(18), Some("ㅎ"));
        assert_eq!(choseong_jamo(19), None);
        assert_eq!(jungseong_jamo(20), Some("ㅣ"));
        assert_eq!(jungseong_jamo(21), None);
        assert_eq!(jongseong_jamo(0), Some(""));
        assert_eq!(jongseong_jamo(27), Some("ㅎ"));
        assert_eq!(jongseong_jamo(28), None);
    }

    #[test]
    fn test_to_jamo_string() {
        assert_eq!(to_jamo_string("베리"), "ㅂㅔㄹㅣ");
        assert_eq!(to_jamo_string("초코 bar"), "ㅊㅗㅋㅗ bar");
        assert_eq!(to_jamo_string(""), "");
    }

    #[test]
    fn test_is_complete_hangul() {
        assert!(is_complete_hangul('가'));
        assert!(is_complete_hangul('힣'));
        assert!(!is_complete_hangul('ㄱ')); // 낱자모는 완성형이 아님
        assert!(!is_complete_hangul('a'));
    }
}
