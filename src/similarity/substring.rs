//! 부분 문자열 포함 점수

/// 대상이 질의를 포함할 때 가산점
const FORWARD_BONUS: f64 = 0.5;
/// 질의가 대상을 포함할 때 가산점 (역포함은 약한 신호)
const REVERSE_BONUS: f64 = 0.3;

/// 양방향 포함 점수 (0.0 ~ 1.0)
///
/// - target ⊇ query: `min(1, len(query)/len(target) + 0.5)`
/// - query ⊇ target: `min(1, len(target)/len(query) + 0.3)`
/// - 그 외 또는 빈 문자열: 0.0
///
/// 입력은 이미 정규화(소문자화)되어 있다고 가정합니다.
pub fn substring_score(target: &str, query: &str) -> f64 {
    if target.is_empty() || query.is_empty() {
        return 0.0;
    }

    let target_len = target.chars().count() as f64;
    let query_len = query.chars().count() as f64;

    if target.contains(query) {
        (query_len / target_len + FORWARD_BONUS).min(1.0)
    } else if query.contains(target) {
        (target_len / query_len + REVERSE_BONUS).min(1.0)
    } else {
        0.0
    }
}
