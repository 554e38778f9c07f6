//! 학습 데이터 내보내기/가져오기 (JSON 스냅샷)
//!
//! # 파일 형식
//! ```json
//! {
//!   "learningData": { "searchHistory": [], "rootFrequency": {}, "userCorrections": {} },
//!   "rootPatterns": { "prefixes": {}, "suffixes": {}, "roots": {} },
//!   "exportDate": 1700000000000
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{MorphError, Result};
use crate::patterns::PatternTables;

use super::store::{LearningPatch, LearningStore};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRef<'a> {
    learning_data: &'a LearningStore,
    root_patterns: &'a PatternTables,
    export_date: u64,
}

/// 가져온 스냅샷. 두 부분 모두 생략 가능
///
/// `exportDate`는 읽지 않습니다 (이전 버전은 ISO 문자열로 기록).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotPatch {
    #[serde(default)]
    pub learning_data: Option<LearningPatch>,
    #[serde(default)]
    pub root_patterns: Option<PatternTables>,
}

/// 학습 저장소와 패턴 테이블 전체를 JSON으로 직렬화
pub fn export_snapshot(
    store: &LearningStore,
    tables: &PatternTables,
    export_date: u64,
) -> Result<String> {
    let snapshot = SnapshotRef {
        learning_data: store,
        root_patterns: tables,
        export_date,
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// 스냅샷 파싱. 형식이 잘못되면 [`MorphError::Format`]
///
/// 파싱만 하고 상태는 건드리지 않으므로, 실패 시 호출 측 상태는 그대로입니다.
pub fn parse_snapshot(blob: &str) -> Result<SnapshotPatch> {
    let value: serde_json::Value =
        serde_json::from_str(blob).map_err(|e| MorphError::format(e.to_string()))?;
    if !value.is_object() {
        return Err(MorphError::format("최상위 값이 JSON 객체가 아닙니다"));
    }
    // Value는 객체 키 순서를 보존하지 않으므로 원문에서 다시 파싱
    serde_json::from_str(blob).map_err(|e| MorphError::format(e.to_string()))
}
