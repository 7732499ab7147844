//! Levenshtein 편집 거리 기반 유사도
//!
//! 삽입/삭제/치환 비용은 모두 1이며, 문자 단위(유니코드 스칼라)로 비교합니다.

/// 두 문자열의 Levenshtein 편집 거리
///
/// 표준 O(n·m) 동적 계획법 테이블을 사용합니다.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    // table[i][j] = a[..i] -> b[..j] 편집 거리
    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            table[i][j] = (table[i - 1][j] + 1) // 삭제
                .min(table[i][j - 1] + 1) // 삽입
                .min(table[i - 1][j - 1] + cost); // 치환
        }
    }

    table[m][n]
}

/// 편집 거리 유사도 (0.0 ~ 1.0)
///
/// `1 - distance / max(len(a), len(b))`. 둘 중 하나라도 비어 있으면 0.0.
///
/// # Examples
/// ```
/// use cupnote::similarity;
/// assert_eq!(similarity("caramel", "caramel"), 1.0);
/// assert_eq!(similarity("", "caramel"), 0.0);
/// assert!(similarity("caramel", "carmel") > 0.8);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let distance = levenshtein_distance(a, b);
    let max_len = a.chars().count().max(b.chars().count());

    1.0 - distance as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "xyz"), 3);
        assert_eq!(levenshtein_distance("caramel", "caramel"), 0);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("cherry", "berry"), 2);
    }

    #[test]
    fn test_levenshtein_distance_hangul() {
        // 음절 단위 비교
        assert_eq!(levenshtein_distance("블루베리", "블루베리"), 0);
        assert_eq!(levenshtein_distance("블루베리", "블루배리"), 1);
        assert_eq!(levenshtein_distance("자몽", "레몬"), 2);
    }

    #[test]
    fn test_similarity_identity() {
        for word in ["chocolate", "블루베리", "a", "earl grey"] {
            assert!((similarity(word, word) - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_similarity_empty() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("nutty", ""), 0.0);
        assert_eq!(similarity("", "nutty"), 0.0);
    }

    #[test]
    fn test_similarity_symmetric() {
        let pairs = [("cherry", "berry"), ("블루베리", "블루배리"), ("tea", "toast")];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn test_similarity_value() {
        // cherry/berry: 거리 2, 최대 길이 6
        assert!((similarity("cherry", "berry") - (1.0 - 2.0 / 6.0)).abs() < 1e-9);
        // 완전히 다른 문자열
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }
}
