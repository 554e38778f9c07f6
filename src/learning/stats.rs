//! 학습 통계

use serde::Serialize;

use super::store::LearningStore;

/// 상위 형태소 목록 기본 길이
pub const DEFAULT_TOP_ROOTS: usize = 10;

/// 학습 통계 요약
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStats {
    /// 전체 검색 횟수
    pub total_searches: usize,
    /// 서로 다른 검색 단어 수
    pub unique_words: usize,
    /// 빈도 내림차순 상위 형태소 (동률이면 먼저 기록된 것 우선)
    pub top_roots: Vec<(String, u64)>,
    /// 교정 기록이 있는 단어 수
    pub correction_count: usize,
}

impl LearningStats {
    pub fn from_store(store: &LearningStore, limit: usize) -> Self {
        let mut ranked: Vec<(String, u64)> = store
            .root_frequency
            .iter()
            .map(|(k, &v)| (k.to_string(), v))
            .collect();
        // 안정 정렬이므로 동률은 삽입 순서 유지
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(limit);

        Self {
            total_searches: store.search_history.len(),
            unique_words: store.unique_words(),
            top_roots: ranked,
            correction_count: store.user_corrections.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_roots_order_and_ties() {
        let mut store = LearningStore::new();
        for m in ["port", "re-", "spect", "re-", "spect", "-ive"] {
            store.bump_frequency(m);
        }
        let stats = LearningStats::from_store(&store, 3);
        assert_eq!(
            stats.top_roots,
            vec![("re-".to_string(), 2), ("spect".to_string(), 2), ("port".to_string(), 1)]
        );
    }

    #[test]
    fn test_empty_store() {
        let stats = LearningStats::from_store(&LearningStore::new(), DEFAULT_TOP_ROOTS);
        assert_eq!(stats.total_searches, 0);
        assert_eq!(stats.unique_words, 0);
        assert!(stats.top_roots.is_empty());
        assert_eq!(stats.correction_count, 0);
    }
}
