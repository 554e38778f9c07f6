//! 단어 -> 형태소 분해
//!
//! # 개요
//!
//! 분해는 다음 순서로 진행됩니다:
//!
//! 1. **고정 분해표**: 단어 전체가 예외 목록에 있으면 그대로 반환
//! 2. **접두사/접미사**: 테이블 정의 순서상 첫 매칭을 하나씩만 떼어냄
//! 3. **어간**: 어근 정확 일치 → 합성어 표 → 최장 어근 부분 일치(앞뒤 재귀)
//!    → 이등분 폴백
//!
//! # 사용 예시
//!
//! ```
//! use morphroot::patterns::PatternTables;
//! use morphroot::segment::{Analyzer, RootAnalyzer};
//!
//! let tables = PatternTables::builtin();
//! let analyzer = RootAnalyzer::default();
//! let d = analyzer.analyze("unhappy", &tables, None);
//! assert_eq!(d.components()[0].text, "un-");
//! assert_eq!(d.surface(), "unhappy");
//! ```

mod analyzer;
mod component;
mod config;

pub use analyzer::{Analyzer, RootAnalyzer};
pub use component::{
    strip_marker, Decomposition, MorphemeComponent, MorphemeKind, FRAGMENT_GLOSS,
    UNKNOWN_ROOT_GLOSS,
};
pub use config::{SegmenterConfig, DEFAULT_FRAGMENT_THRESHOLD};
