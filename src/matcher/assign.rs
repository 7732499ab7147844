//! 키워드 ↔ 사용자 선택 탐욕적 할당
//!
//! 키워드를 입력 순서대로 돌면서, 아직 쓰이지 않은 선택 중 가장 높은
//! 점수를 받은 것을 가져갑니다. 선택 하나는 최대 한 키워드에만 할당됩니다.
//! 전역 최적 할당이 아니며, 앞쪽 키워드가 우선권을 가집니다.

use super::scorer::FlavorMatcher;
use super::types::MatchResult;

impl FlavorMatcher {
    /// 설정된 임계값으로 최선 매칭 목록 생성
    pub fn find_best_matches<K, S>(&self, keywords: &[K], selections: &[S], note: &str) -> Vec<MatchResult>
    where
        K: AsRef<str>,
        S: AsRef<str>,
    {
        self.find_best_matches_with_threshold(keywords, selections, note, self.config.threshold)
    }

    /// 임계값을 지정하여 최선 매칭 목록 생성
    ///
    /// 결과는 유사도 내림차순으로 정렬되며, 매칭되지 않은 키워드는 빠집니다.
    pub fn find_best_matches_with_threshold<K, S>(
        &self,
        keywords: &[K],
        selections: &[S],
        note: &str,
        threshold: f64,
    ) -> Vec<MatchResult>
    where
        K: AsRef<str>,
        S: AsRef<str>,
    {
        let mut used = vec![false; selections.len()];
        let mut matches = Vec::new();

        for keyword in keywords {
            let keyword = keyword.as_ref();
            let mut best: Option<(usize, MatchResult)> = None;

            for (idx, selection) in selections.iter().enumerate() {
                if used[idx] {
                    continue;
                }
                let candidate = self.score(keyword, selection.as_ref(), note);
                if candidate.similarity < threshold {
                    continue;
                }
                // 동점이면 먼저 나온 선택 유지
                let better = best
                    .as_ref()
                    .map_or(true, |(_, current)| candidate.similarity > current.similarity);
                if better {
                    best = Some((idx, candidate));
                }
            }

            match best {
                Some((idx, result)) => {
                    used[idx] = true;
                    matches.push(result);
                }
                None => log::debug!("no match for keyword '{}'", keyword),
            }
        }

        matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        matches
    }
}
