//! 사용자 학습 데이터
//!
//! 검색할 때마다 기록과 형태소 빈도가 쌓이고, 사용자가 교정한 분해는
//! 이후 분해에 반영됩니다.

mod stats;
mod store;
mod transfer;

use std::time::{SystemTime, UNIX_EPOCH};

pub use stats::{LearningStats, DEFAULT_TOP_ROOTS};
pub use store::{Correction, LearningPatch, LearningStore, SearchRecord, WordCorrections};
pub use transfer::{export_snapshot, parse_snapshot, SnapshotPatch};

/// 현재 시각 (밀리초 단위 Unix 시각)
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
