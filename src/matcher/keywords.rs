//! 로스터 노트에서 후보 키워드 추출

use std::collections::HashSet;

use lazy_static::lazy_static;

use crate::core::normalize::normalize;

/// 키워드로 인정하는 최소 글자 수
const MIN_KEYWORD_CHARS: usize = 2;

lazy_static! {
    /// 맛 표현이 아닌 연결어/상투어
    static ref STOPWORDS: HashSet<&'static str> = [
        "and", "with", "of", "the", "a", "an", "in", "on", "to", "for", "or",
        "notes", "note", "hints", "hint", "like", "some", "very", "is", "are",
        "그리고", "및", "노트", "같은", "느낌",
    ]
    .into_iter()
    .collect();
}

/// 단어 경계로 보는 문자
fn is_separator(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            ',' | '.' | '!' | '?' | ';' | ':' | '/' | '(' | ')' | '&' | '-' | '·' | '"' | '\''
        )
}

/// 로스터 노트를 키워드 목록으로 변환
///
/// 구두점과 공백으로 자르고, 정규화 후 너무 짧은 토큰과 불용어를 빼고,
/// 처음 나온 순서대로 중복을 제거합니다.
///
/// # Examples
/// ```
/// use cupnote::extract_keywords;
/// assert_eq!(
///     extract_keywords("Notes of Blueberry, dark chocolate & caramel."),
///     vec!["blueberry", "dark", "chocolate", "caramel"]
/// );
/// ```
pub fn extract_keywords(note: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    note.split(is_separator)
        .map(normalize)
        .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
        .filter(|word| !STOPWORDS.contains(word.as_str()))
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
