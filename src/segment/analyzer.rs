//! 재귀 형태소 분해 알고리즘

use crate::learning::WordCorrections;
use crate::patterns::{compound, special_case, PatternTables};

use super::component::{strip_marker, Decomposition, MorphemeComponent, MorphemeKind};
use super::config::SegmenterConfig;

/// 분해 전략
///
/// 엔진은 구성 시점에 구현 하나를 골라 씁니다. 테이블과 교정 기록은 호출마다
/// 넘겨받으므로 구현체는 상태를 갖지 않습니다.
pub trait Analyzer {
    /// 소문자 단어 하나를 분해
    ///
    /// `corrections`는 이 단어에 대해 기록된 사용자 교정입니다.
    fn analyze(
        &self,
        word: &str,
        tables: &PatternTables,
        corrections: Option<&WordCorrections>,
    ) -> Decomposition;
}

/// 접두사 → 접미사 → 어근 순으로 분해하는 기본 구현
#[derive(Debug, Clone, Default)]
pub struct RootAnalyzer {
    config: SegmenterConfig,
}

impl RootAnalyzer {
    pub fn new(config: SegmenterConfig) -> Self {
        Self { config }
    }

    /// 접사를 뗀 어간을 하나 이상의 어근으로 분해
    fn resolve_stem(&self, stem: &str, tables: &PatternTables) -> Vec<MorphemeComponent> {
        if let Some(gloss) = tables.lookup_root(stem) {
            return vec![MorphemeComponent::new(stem, gloss, MorphemeKind::Root)];
        }

        if let Some(parts) = compound(stem) {
            log::debug!("합성어 표 매칭: {}", stem);
            return parts;
        }

        if let Some(m) = tables.longest_root_in(stem) {
            let mut parts = Vec::new();
            if m.start > 0 {
                parts.extend(self.resolve_stem(&stem[..m.start], tables));
            }
            parts.push(MorphemeComponent::new(m.root, m.gloss, MorphemeKind::Root));
            if m.end() < stem.len() {
                parts.extend(self.resolve_stem(&stem[m.end()..], tables));
            }
            return parts;
        }

        self.bisect(stem)
    }

    /// 최후 수단: 짧으면 통째로, 길면 가운데서 둘로
    fn bisect(&self, stem: &str) -> Vec<MorphemeComponent> {
        if stem.len() <= self.config.fragment_threshold {
            return vec![MorphemeComponent::unknown(stem)];
        }
        let mid = stem.len() / 2;
        vec![
            MorphemeComponent::fragment(&stem[..mid]),
            MorphemeComponent::fragment(&stem[mid..]),
        ]
    }
}

impl Analyzer for RootAnalyzer {
    fn analyze(
        &self,
        word: &str,
        tables: &PatternTables,
        corrections: Option<&WordCorrections>,
    ) -> Decomposition {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return Decomposition::new(vec![MorphemeComponent::unknown(word)]);
        }

        if let Some(fixed) = special_case(word) {
            log::debug!("고정 분해표 사용: {}", word);
            return fixed;
        }

        let mut components = Vec::new();
        let mut remaining = word;

        if let Some((prefix, rest)) = tables.lookup_prefix(remaining) {
            components.push(prefix);
            remaining = rest;
        }

        // 접미사는 어근 뒤에 붙이므로 따로 보관
        let suffix = match tables.lookup_suffix(remaining) {
            Some((suffix, rest)) => {
                remaining = rest;
                Some(suffix)
            }
            None => None,
        };

        if !remaining.is_empty() {
            components.extend(self.resolve_stem(remaining, tables));
        }
        components.extend(suffix);

        if components.is_empty() {
            components.push(MorphemeComponent::unknown(word));
        }

        let mut decomposition = Decomposition::new(components);
        if let Some(corrections) = corrections {
            apply_corrections(&mut decomposition, corrections);
        }
        decomposition
    }
}

/// 교정 기록을 같은 위치, 같은 글자의 구성요소에 반영
///
/// 글자가 다른 교정은 분해 결과를 덮어쓰지 않습니다. 그런 교정은 어근
/// 테이블에 추가된 항목을 통해서만 반영됩니다.
fn apply_corrections(decomposition: &mut Decomposition, corrections: &WordCorrections) {
    let components = decomposition.components_mut();
    for (&index, correction) in corrections {
        let Some(component) = components.get_mut(index) else {
            continue;
        };
        if strip_marker(&correction.root) != component.surface() {
            continue;
        }
        component.text = correction.root.clone();
        component.gloss = correction.meaning.clone();
        if !component.kind.is_table_match() {
            component.kind = MorphemeKind::Root;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::learning::Correction;
    use crate::segment::{FRAGMENT_GLOSS, UNKNOWN_ROOT_GLOSS};

    fn analyze(word: &str) -> Decomposition {
        RootAnalyzer::default().analyze(word, &PatternTables::builtin(), None)
    }

    #[test]
    fn test_prefix_root_suffix() {
        let d = analyze("inspection");
        assert_eq!(d.surface(), "inspection");
        assert_eq!(d.components()[0].text, "in-");
        assert_eq!(d.components().last().unwrap().text, "-tion");
    }

    #[test]
    fn test_root_with_both_sides_recursed() {
        // re- + (tro + spect) + -ive
        let d = analyze("retrospective");
        assert_eq!(
            d.pairs(),
            vec![
                ("re-", "again"),
                ("tro", UNKNOWN_ROOT_GLOSS),
                ("spect", "to look"),
                ("-ive", "adjective suffix"),
            ]
        );
    }

    #[test]
    fn test_exact_root() {
        let d = analyze("port");
        assert_eq!(d.pairs(), vec![("port", "to carry")]);
        assert_eq!(d.components()[0].kind, MorphemeKind::Root);
    }

    #[test]
    fn test_compound_after_prefix() {
        let d = analyze("reunderstand");
        assert_eq!(
            d.pairs(),
            vec![("re-", "again"), ("under-", "below"), ("stand", "to stand, understand")]
        );
    }

    #[test]
    fn test_special_case_priority() {
        let d = analyze("decipher");
        assert_eq!(d.pairs(), vec![("de-", "remove, down"), ("cipher", "secret code, zero")]);
    }

    #[test]
    fn test_bisection_fallback() {
        let d = analyze("zzzzzz");
        assert_eq!(d.pairs(), vec![("zzz", FRAGMENT_GLOSS), ("zzz", FRAGMENT_GLOSS)]);

        let d = analyze("zzzz");
        assert_eq!(d.pairs(), vec![("zzzz", UNKNOWN_ROOT_GLOSS)]);
    }

    #[test]
    fn test_bisection_inside_root_recursion() {
        let d = analyze("reportzzzzzz");
        assert_eq!(
            d.pairs(),
            vec![
                ("re-", "again"),
                ("port", "to carry"),
                ("zzz", FRAGMENT_GLOSS),
                ("zzz", FRAGMENT_GLOSS),
            ]
        );

        let d = analyze("zzzzzzport");
        assert_eq!(
            d.pairs(),
            vec![("zzz", FRAGMENT_GLOSS), ("zzz", FRAGMENT_GLOSS), ("port", "to carry")]
        );
        assert_eq!(d.components()[0].kind, MorphemeKind::Fragment);
    }

    #[test]
    fn test_custom_fragment_threshold() {
        let analyzer = RootAnalyzer::new(SegmenterConfig::new().with_fragment_threshold(8));
        let d = analyzer.analyze("zzzzzz", &PatternTables::builtin(), None);
        assert_eq!(d.pairs(), vec![("zzzzzz", UNKNOWN_ROOT_GLOSS)]);
    }

    #[test]
    fn test_non_alphabetic_input() {
        assert_eq!(analyze("").pairs(), vec![("", UNKNOWN_ROOT_GLOSS)]);
        assert_eq!(analyze("re-do").pairs(), vec![("re-do", UNKNOWN_ROOT_GLOSS)]);
        assert_eq!(analyze("x1").pairs(), vec![("x1", UNKNOWN_ROOT_GLOSS)]);
    }

    #[test]
    fn test_correction_overrides_matching_component() {
        let mut corrections = WordCorrections::new();
        corrections.insert(
            1,
            Correction {
                root: "zzzz".into(),
                meaning: "sleep".into(),
                timestamp: 0,
            },
        );
        let d = RootAnalyzer::default().analyze("rezzzz", &PatternTables::builtin(), Some(&corrections));
        assert_eq!(d.pairs(), vec![("re-", "again"), ("zzzz", "sleep")]);
        assert_eq!(d.components()[1].kind, MorphemeKind::Root);
    }

    #[test]
    fn test_correction_with_other_text_is_not_applied() {
        let mut corrections = WordCorrections::new();
        corrections.insert(
            0,
            Correction {
                root: "po".into(),
                meaning: "x".into(),
                timestamp: 0,
            },
        );
        corrections.insert(
            7,
            Correction {
                root: "port".into(),
                meaning: "y".into(),
                timestamp: 0,
            },
        );
        let d = RootAnalyzer::default().analyze("port", &PatternTables::builtin(), Some(&corrections));
        assert_eq!(d.pairs(), vec![("port", "to carry")]);
    }
}
