//! 비교 전 토큰 정규화

/// 문장 구분 문자
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// 앞뒤 공백 제거 + 소문자화
///
/// 한글은 대소문자가 없으므로 그대로 유지됩니다.
pub fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}

/// `. ! ?` 기준 문장 분리 (빈 문장 제외)
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// 공백 기준 단어 분리 (소문자화)
pub fn tokenize_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
