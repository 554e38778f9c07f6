//! 분해 엔진: 테이블 + 학습 데이터 + 저장소 묶음
//!
//! 모든 변경 연산은 `&mut self`를 받아 하나의 단위로 끝납니다.
//! `decompose`는 `correct_root`가 바꾸는 어근 테이블을 읽으므로, 여러 스레드에서
//! 쓸 때는 엔진 전체를 `Mutex` 하나로 감싸야 합니다.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::MorphConfig;
use crate::error::Result;
use crate::learning::{
    export_snapshot, now_millis, parse_snapshot, Correction, LearningStats, LearningStore,
    DEFAULT_TOP_ROOTS,
};
use crate::patterns::PatternTables;
use crate::segment::{Analyzer, Decomposition, RootAnalyzer};
use crate::storage::{Storage, LEARNING_KEY, PATTERNS_KEY};

/// 형태소 분해 엔진
///
/// 어근 테이블은 엔진이 소유하며 교정/가져오기로만 바뀝니다.
pub struct MorphEngine<S: Storage, A: Analyzer = RootAnalyzer> {
    tables: PatternTables,
    learning: LearningStore,
    analyzer: A,
    storage: S,
    top_roots_limit: usize,
}

impl<S: Storage> MorphEngine<S> {
    /// 기본 설정으로 저장소에서 상태를 읽어 엔진 생성
    pub fn open(storage: S) -> Self {
        Self::with_config(storage, &MorphConfig::default())
    }

    /// 설정 파일 값으로 엔진 생성
    pub fn with_config(storage: S, config: &MorphConfig) -> Self {
        let mut engine = Self::with_analyzer(storage, RootAnalyzer::new(config.segmenter()));
        engine.top_roots_limit = config.top_roots_limit;
        engine
    }
}

impl<S: Storage, A: Analyzer> MorphEngine<S, A> {
    /// 분해 전략을 지정하여 엔진 생성
    ///
    /// 저장된 상태가 없거나 읽을 수 없으면 내장 테이블과 빈 학습 데이터로 시작합니다.
    pub fn with_analyzer(storage: S, analyzer: A) -> Self {
        let mut tables = PatternTables::builtin();
        if let Some(saved) = load_json::<S, PatternTables>(&storage, PATTERNS_KEY) {
            tables.merge(saved);
        }
        let learning = load_json::<S, LearningStore>(&storage, LEARNING_KEY).unwrap_or_default();

        Self {
            tables,
            learning,
            analyzer,
            storage,
            top_roots_limit: DEFAULT_TOP_ROOTS,
        }
    }

    /// 단어를 형태소로 분해하고 검색 기록/빈도를 갱신
    ///
    /// 테이블에서 찾은 접두사/어근/접미사만 빈도에 반영하고,
    /// 이등분 조각이나 미확인 어근은 세지 않습니다.
    pub fn decompose(&mut self, word: &str) -> Decomposition {
        let word = word.to_ascii_lowercase();
        let decomposition =
            self.analyzer
                .analyze(&word, &self.tables, self.learning.corrections_for(&word));

        if word.is_empty() {
            return decomposition;
        }

        self.learning.record_search(&word, now_millis());
        for component in decomposition.iter().filter(|c| c.kind.is_table_match()) {
            self.learning.bump_frequency(&component.text);
        }

        save_json(&mut self.storage, LEARNING_KEY, &self.learning);
        decomposition
    }

    /// 사용자 교정 기록
    ///
    /// `(word, index)`에 교정을 남기고 `new_text -> new_gloss`를 어근 테이블에
    /// 추가합니다. 어근 테이블은 공용이므로 `new_text`를 포함한 다른 단어의
    /// 분해도 바뀔 수 있습니다.
    ///
    /// `index`가 현재 테이블로 분해한 `word`의 범위를 벗어나거나 `new_text`가
    /// 비어 있으면 아무것도 하지 않고 `false`를 반환합니다. 범위 검사용 분해는
    /// 기록하지 않습니다.
    pub fn correct_root(&mut self, word: &str, index: usize, new_text: &str, new_gloss: &str) -> bool {
        let word = word.to_ascii_lowercase();
        if new_text.is_empty() {
            log::warn!("빈 어근 교정 무시: {}[{}]", word, index);
            return false;
        }
        let len = self
            .analyzer
            .analyze(&word, &self.tables, self.learning.corrections_for(&word))
            .len();
        if index >= len {
            log::warn!("교정 위치 범위 초과 무시: {}[{}] (구성요소 {}개)", word, index, len);
            return false;
        }

        self.learning.record_correction(
            &word,
            index,
            Correction {
                root: new_text.to_string(),
                meaning: new_gloss.to_string(),
                timestamp: now_millis(),
            },
        );
        self.tables.insert_root(new_text, new_gloss);
        log::debug!("교정 기록: {}[{}] -> {} ({})", word, index, new_text, new_gloss);

        self.persist_all();
        true
    }

    /// 학습 통계
    pub fn learning_stats(&self) -> LearningStats {
        LearningStats::from_store(&self.learning, self.top_roots_limit)
    }

    /// 학습 데이터와 패턴 테이블 전체를 JSON으로 내보내기
    pub fn export_snapshot(&self) -> Result<String> {
        export_snapshot(&self.learning, &self.tables, now_millis())
    }

    /// 내보낸 JSON을 현재 상태에 병합
    ///
    /// 형식 오류면 상태를 바꾸지 않고 에러를 반환합니다.
    pub fn import_snapshot(&mut self, blob: &str) -> Result<()> {
        let patch = parse_snapshot(blob)?;
        if patch.learning_data.is_none() && patch.root_patterns.is_none() {
            log::warn!("가져온 파일에 학습 데이터가 없습니다");
        }

        if let Some(learning) = patch.learning_data {
            self.learning.merge(learning);
        }
        if let Some(tables) = patch.root_patterns {
            self.tables.merge(tables);
        }
        log::info!(
            "학습 데이터 가져오기 완료: 검색 {}건, 어근 {}개",
            self.learning.search_history.len(),
            self.tables.roots.len()
        );

        self.persist_all();
        Ok(())
    }

    /// 학습 데이터 초기화, 테이블은 내장 데이터로 복원
    pub fn reset(&mut self) {
        self.learning.clear();
        self.tables = PatternTables::builtin();
        log::info!("학습 데이터 초기화");
        self.persist_all();
    }

    pub fn tables(&self) -> &PatternTables {
        &self.tables
    }

    pub fn learning(&self) -> &LearningStore {
        &self.learning
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist_all(&mut self) {
        save_json(&mut self.storage, LEARNING_KEY, &self.learning);
        save_json(&mut self.storage, PATTERNS_KEY, &self.tables);
    }
}

/// 저장소에서 JSON 읽기. 없거나 깨졌으면 `None`
fn load_json<S: Storage, T: DeserializeOwned>(storage: &S, key: &str) -> Option<T> {
    match storage.load(key) {
        Ok(Some(blob)) => match serde_json::from_str(&blob) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("저장된 {} 파싱 실패, 기본값 사용: {}", key, e);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            log::warn!("저장된 {} 읽기 실패, 기본값 사용: {}", key, e);
            None
        }
    }
}

/// 저장 실패는 기록만 하고 계속 진행
fn save_json<S: Storage, T: Serialize>(storage: &mut S, key: &str, value: &T) {
    let blob = match serde_json::to_string(value) {
        Ok(blob) => blob,
        Err(e) => {
            log::error!("{} 직렬화 실패: {}", key, e);
            return;
        }
    };
    if let Err(e) = storage.save(key, &blob) {
        log::error!("{} 저장 실패: {}", key, e);
    }
}
