//! 형태소 구성요소와 분해 결과 타입

use serde::{Deserialize, Serialize};

/// 어떤 테이블과도 맞지 않은 어근에 붙는 뜻
pub const UNKNOWN_ROOT_GLOSS: &str = "unknown root";

/// 강제 이등분으로 생긴 조각에 붙는 뜻
pub const FRAGMENT_GLOSS: &str = "root fragment";

/// 구성요소의 출처
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MorphemeKind {
    /// 접두사 테이블에서 찾음
    Prefix,
    /// 어근 테이블(또는 고정 분해표)에서 찾음
    Root,
    /// 접미사 테이블에서 찾음
    Suffix,
    /// 이등분 폴백으로 생긴 조각
    Fragment,
    /// 아무 테이블에도 없음
    Unknown,
}

impl MorphemeKind {
    /// 테이블 조회로 얻은 구성요소인지 (빈도 집계 대상)
    pub fn is_table_match(self) -> bool {
        matches!(self, MorphemeKind::Prefix | MorphemeKind::Root | MorphemeKind::Suffix)
    }
}

/// 형태소 하나: 표기와 뜻
///
/// 접사는 하이픈 표시(`un-`, `-ness`)를 그대로 가집니다. 하이픈은 표시용이며
/// 원래 단어에서 차지하는 글자는 [`surface`](Self::surface)로 얻습니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphemeComponent {
    pub text: String,
    pub gloss: String,
    pub kind: MorphemeKind,
}

impl MorphemeComponent {
    pub fn new(text: impl Into<String>, gloss: impl Into<String>, kind: MorphemeKind) -> Self {
        Self {
            text: text.into(),
            gloss: gloss.into(),
            kind,
        }
    }

    pub fn unknown(text: impl Into<String>) -> Self {
        Self::new(text, UNKNOWN_ROOT_GLOSS, MorphemeKind::Unknown)
    }

    pub fn fragment(text: impl Into<String>) -> Self {
        Self::new(text, FRAGMENT_GLOSS, MorphemeKind::Fragment)
    }

    /// 하이픈 표시를 뗀 실제 글자
    pub fn surface(&self) -> &str {
        strip_marker(&self.text)
    }
}

/// 접사 키에서 방향 표시(앞/뒤 하이픈) 제거
pub fn strip_marker(text: &str) -> &str {
    text.trim_matches('-')
}

/// 단어 하나의 분해 결과 (왼쪽부터 표면 순서)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decomposition(Vec<MorphemeComponent>);

impl Decomposition {
    pub fn new(components: Vec<MorphemeComponent>) -> Self {
        Self(components)
    }

    pub fn components(&self) -> &[MorphemeComponent] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MorphemeComponent> {
        self.0.iter()
    }

    /// 모든 구성요소의 표면 글자를 이어 붙인 문자열
    /// 분해가 올바르면 원래 단어와 같다
    pub fn surface(&self) -> String {
        self.0.iter().map(MorphemeComponent::surface).collect()
    }

    /// `(표기, 뜻)` 쌍 목록
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.0
            .iter()
            .map(|c| (c.text.as_str(), c.gloss.as_str()))
            .collect()
    }

    pub(crate) fn components_mut(&mut self) -> &mut [MorphemeComponent] {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a Decomposition {
    type Item = &'a MorphemeComponent;
    type IntoIter = std::slice::Iter<'a, MorphemeComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for Decomposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{} ({})", c.text, c.gloss)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_strips_markers() {
        assert_eq!(MorphemeComponent::new("un-", "not, non", MorphemeKind::Prefix).surface(), "un");
        assert_eq!(MorphemeComponent::new("-ness", "noun suffix", MorphemeKind::Suffix).surface(), "ness");
        assert_eq!(MorphemeComponent::unknown("happ").surface(), "happ");
    }

    #[test]
    fn test_decomposition_surface_and_display() {
        let d = Decomposition::new(vec![
            MorphemeComponent::new("re-", "again", MorphemeKind::Prefix),
            MorphemeComponent::new("port", "to carry", MorphemeKind::Root),
        ]);
        assert_eq!(d.surface(), "report");
        assert_eq!(d.to_string(), "re- (again) + port (to carry)");
        assert_eq!(d.pairs(), vec![("re-", "again"), ("port", "to carry")]);
    }

    #[test]
    fn test_table_match_kinds() {
        assert!(MorphemeKind::Prefix.is_table_match());
        assert!(MorphemeKind::Root.is_table_match());
        assert!(!MorphemeKind::Fragment.is_table_match());
        assert!(!MorphemeKind::Unknown.is_table_match());
    }
}
