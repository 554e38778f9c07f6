//! 접사/어근 패턴 테이블
//!
//! - [`PatternTables`]: 접두사/접미사/어근 -> 뜻 (정의 순서 보존)
//! - [`overrides`]: 일반 규칙보다 우선하는 고정 분해표
//!
//! 접사는 첫 매칭, 어근은 최장 매칭으로 고릅니다. 두 규칙은 일부러 다르게
//! 유지합니다. 하나로 합치면 기존 분해 결과가 달라집니다.

mod data;
pub mod overrides;
mod table;

pub use data::{BUILTIN_PREFIXES, BUILTIN_ROOTS, BUILTIN_SUFFIXES};
pub use overrides::{compound, special_case};
pub use table::{OrderedMap, PatternTables, RootMatch};
