//! 학습 데이터: 검색 기록, 형태소 빈도, 사용자 교정

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::patterns::OrderedMap;

/// 검색 기록 한 줄
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub word: String,
    /// 밀리초 단위 Unix 시각
    pub timestamp: u64,
}

/// 구성요소 하나에 대한 사용자 교정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Correction {
    /// 교정된 형태소 표기
    pub root: String,
    /// 교정된 뜻
    pub meaning: String,
    pub timestamp: u64,
}

/// 구성요소 위치 -> 교정
pub type WordCorrections = BTreeMap<usize, Correction>;

/// 학습 저장소
///
/// JSON 필드 이름은 기존 내보내기 파일(`searchHistory`, `rootFrequency`,
/// `userCorrections`)과 호환됩니다. 이전 버전의 `wordPatterns`는 해석하지 않고
/// 그대로 보관했다가 다시 내보냅니다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStore {
    #[serde(default)]
    pub search_history: Vec<SearchRecord>,
    #[serde(default)]
    pub root_frequency: OrderedMap<u64>,
    #[serde(default)]
    pub user_corrections: OrderedMap<WordCorrections>,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub word_patterns: serde_json::Value,
}

/// 가져오기용 부분 학습 데이터. 없는 필드는 그대로 둠
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPatch {
    #[serde(default)]
    pub search_history: Option<Vec<SearchRecord>>,
    #[serde(default)]
    pub root_frequency: Option<OrderedMap<u64>>,
    #[serde(default)]
    pub user_corrections: Option<OrderedMap<WordCorrections>>,
    #[serde(default)]
    pub word_patterns: Option<serde_json::Value>,
}

impl LearningStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_search(&mut self, word: &str, timestamp: u64) {
        self.search_history.push(SearchRecord {
            word: word.to_string(),
            timestamp,
        });
    }

    /// 형태소 사용 횟수 1 증가
    pub fn bump_frequency(&mut self, morpheme: &str) {
        *self.root_frequency.get_or_insert_with(morpheme, || 0) += 1;
    }

    pub fn frequency(&self, morpheme: &str) -> u64 {
        self.root_frequency.get(morpheme).copied().unwrap_or(0)
    }

    /// `(word, index)` 위치에 교정 기록 (같은 위치는 덮어씀)
    pub fn record_correction(&mut self, word: &str, index: usize, correction: Correction) {
        self.user_corrections
            .get_or_insert_with(word, WordCorrections::new)
            .insert(index, correction);
    }

    pub fn corrections_for(&self, word: &str) -> Option<&WordCorrections> {
        self.user_corrections.get(word)
    }

    /// 한 번이라도 검색된 서로 다른 단어 수
    pub fn unique_words(&self) -> usize {
        self.search_history
            .iter()
            .map(|r| r.word.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    /// 가져온 데이터 병합
    ///
    /// 검색 기록은 통째로 교체되고, 빈도와 교정은 키 단위로 병합됩니다
    /// (충돌 시 가져온 값이 이김).
    pub fn merge(&mut self, patch: LearningPatch) {
        if let Some(history) = patch.search_history {
            self.search_history = history;
        }
        if let Some(frequency) = patch.root_frequency {
            self.root_frequency.merge(frequency);
        }
        if let Some(corrections) = patch.user_corrections {
            self.user_corrections.merge(corrections);
        }
        if let Some(patterns) = patch.word_patterns {
            self.word_patterns = patterns;
        }
    }

    pub fn clear(&mut self) {
        self.search_history.clear();
        self.root_frequency.clear();
        self.user_corrections.clear();
        self.word_patterns = serde_json::Value::Null;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn correction(root: &str) -> Correction {
        Correction {
            root: root.to_string(),
            meaning: "m".to_string(),
            timestamp: 1,
        }
    }

    #[test]
    fn test_frequency_counts() {
        let mut store = LearningStore::new();
        store.bump_frequency("re-");
        store.bump_frequency("re-");
        store.bump_frequency("port");
        assert_eq!(store.frequency("re-"), 2);
        assert_eq!(store.frequency("port"), 1);
        assert_eq!(store.frequency("spect"), 0);
    }

    #[test]
    fn test_unique_words() {
        let mut store = LearningStore::new();
        store.record_search("report", 1);
        store.record_search("report", 2);
        store.record_search("inspect", 3);
        assert_eq!(store.search_history.len(), 3);
        assert_eq!(store.unique_words(), 2);
    }

    #[test]
    fn test_correction_overwrites_same_index() {
        let mut store = LearningStore::new();
        store.record_correction("foo", 0, correction("fo"));
        store.record_correction("foo", 0, correction("f"));
        store.record_correction("foo", 1, correction("oo"));
        let c = store.corrections_for("foo").unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c[&0].root, "f");
    }

    #[test]
    fn test_legacy_json_format() {
        let json = r#"{
            "searchHistory": [{"word": "report", "timestamp": 1700000000000}],
            "rootFrequency": {"re-": 3, "port": 1},
            "wordPatterns": {},
            "userCorrections": {"foo": {"0": {"root": "fo", "meaning": "m", "timestamp": 5}}}
        }"#;
        let store: LearningStore = serde_json::from_str(json).unwrap();
        assert_eq!(store.search_history[0].word, "report");
        assert_eq!(store.frequency("re-"), 3);
        assert_eq!(store.corrections_for("foo").unwrap()[&0].root, "fo");
        assert!(store.word_patterns.is_object());
    }

    #[test]
    fn test_word_patterns_kept_through_export() {
        let json = r#"{"searchHistory": [], "wordPatterns": {"report": ["re-", "port"]}}"#;
        let store: LearningStore = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&store).unwrap();
        assert_eq!(value["wordPatterns"]["report"][1], "port");

        // 없으면 내보내지 않음
        let value = serde_json::to_value(LearningStore::new()).unwrap();
        assert!(value.get("wordPatterns").is_none());
    }

    #[test]
    fn test_merge() {
        let mut store = LearningStore::new();
        store.record_search("old", 1);
        store.bump_frequency("re-");
        store.bump_frequency("port");

        let patch: LearningPatch = serde_json::from_str(
            r#"{"searchHistory": [{"word": "new", "timestamp": 2}], "rootFrequency": {"re-": 10}}"#,
        )
        .unwrap();
        store.merge(patch);

        assert_eq!(store.search_history.len(), 1);
        assert_eq!(store.search_history[0].word, "new");
        assert_eq!(store.frequency("re-"), 10);
        assert_eq!(store.frequency("port"), 1);
    }
}
