//! 고정 분해표
//!
//! 일반 규칙(첫 접사 매칭, 최장 어근 매칭)으로는 잘못 쪼개지는 단어들을
//! 직접 지정합니다. 런타임에 바뀌지 않습니다.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::segment::MorphemeKind::{Prefix, Root, Suffix};
use crate::segment::{Decomposition, MorphemeComponent, MorphemeKind};

type Entry = &'static [(&'static str, &'static str, MorphemeKind)];

/// 단어 전체 단위 예외 (최우선)
pub static SPECIAL_CASES: LazyLock<HashMap<&'static str, Entry>> = LazyLock::new(|| {
    let mut map: HashMap<&'static str, Entry> = HashMap::new();
    map.insert(
        "decipher",
        &[("de-", "remove, down", Prefix), ("cipher", "secret code, zero", Root)],
    );
    // 일반 규칙으로는 맞는 어근이 없어 이등분 조각만 나옴
    map.insert(
        "asparagus",
        &[
            ("aspar", "asparagus", Root),
            ("ag", "to do, drive", Root),
            ("-us", "noun suffix", Suffix),
        ],
    );
    map.insert(
        "misunderstand",
        &[
            ("mis-", "wrong, bad", Prefix),
            ("under-", "below", Prefix),
            ("stand", "to stand, understand", Root),
        ],
    );
    map
});

/// 접사를 떼고 남은 어간 단위 예외
pub static COMPOUND_STEMS: LazyLock<HashMap<&'static str, Entry>> = LazyLock::new(|| {
    let mut map: HashMap<&'static str, Entry> = HashMap::new();
    map.insert(
        "understand",
        &[("under-", "below", Prefix), ("stand", "to stand, understand", Root)],
    );
    map.insert(
        "overcome",
        &[("over-", "above", Prefix), ("come", "to come", Root)],
    );
    map.insert(
        "withdraw",
        &[("with-", "with, against", Prefix), ("draw", "to pull", Root)],
    );
    map
});

fn build(entry: Entry) -> Vec<MorphemeComponent> {
    entry
        .iter()
        .map(|&(text, gloss, kind)| MorphemeComponent::new(text, gloss, kind))
        .collect()
}

/// 단어 전체 예외 조회
pub fn special_case(word: &str) -> Option<Decomposition> {
    SPECIAL_CASES.get(word).map(|&e| Decomposition::new(build(e)))
}

/// 어간 예외 조회
pub fn compound(stem: &str) -> Option<Vec<MorphemeComponent>> {
    COMPOUND_STEMS.get(stem).map(|&e| build(e))
}
