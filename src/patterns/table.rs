//! 삽입 순서를 보존하는 패턴 테이블
//!
//! 접사 매칭은 "먼저 정의된 항목 우선"이라 테이블 순서가 결과에 영향을 줍니다.
//! 따라서 `HashMap` 대신 정의 순서를 기억하는 [`OrderedMap`]을 씁니다.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::segment::{strip_marker, MorphemeComponent, MorphemeKind};

use super::data::{BUILTIN_PREFIXES, BUILTIN_ROOTS, BUILTIN_SUFFIXES};

/// 문자열 키 -> 값, 삽입 순서 유지
///
/// 이미 있는 키를 다시 넣으면 값만 바뀌고 위치는 그대로입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// 값 삽입. 기존 값이 있으면 덮어쓰고 이전 값을 반환
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        if let Some(&i) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[i].1, value));
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// 키가 없으면 `make`로 만든 값을 끝에 추가하고, 값의 가변 참조 반환
    pub fn get_or_insert_with(&mut self, key: &str, make: impl FnOnce() -> V) -> &mut V {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), make()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[i].1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 정의 순서대로 순회
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// 다른 맵의 항목을 덮어쓰며 병합 (충돌 시 `other` 우선)
    pub fn merge(&mut self, other: OrderedMap<V>) {
        for (k, v) in other.entries {
            self.insert(k, v);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = OrderedMap::new();
                while let Some((k, v)) = access.next_entry::<String, V>()? {
                    map.insert(k, v);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// 어근 부분 문자열 검색 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootMatch<'a> {
    /// 어간 안에서 처음 나타나는 바이트 위치
    pub start: usize,
    pub root: &'a str,
    pub gloss: &'a str,
}

impl RootMatch<'_> {
    pub fn end(&self) -> usize {
        self.start + self.root.len()
    }
}

/// 접두사/접미사/어근 테이블 묶음
///
/// 접두사 키는 끝에(`un-`), 접미사 키는 앞에(`-ness`) 하이픈 표시가 붙습니다.
/// 테이블이 없거나 `null`이면 빈 테이블로 읽습니다.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PatternTables {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub prefixes: OrderedMap<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub suffixes: OrderedMap<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub roots: OrderedMap<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OrderedMap<String>, D::Error> {
    Ok(Option::<OrderedMap<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn to_table(entries: &[(&str, &str)]) -> OrderedMap<String> {
    entries.iter().map(|&(k, v)| (k, v.to_string())).collect()
}

impl PatternTables {
    /// 내장 데이터로 초기화
    pub fn builtin() -> Self {
        Self {
            prefixes: to_table(BUILTIN_PREFIXES),
            suffixes: to_table(BUILTIN_SUFFIXES),
            roots: to_table(BUILTIN_ROOTS),
        }
    }

    /// 빈 테이블 (주로 테스트용)
    pub fn empty() -> Self {
        Self {
            prefixes: OrderedMap::new(),
            suffixes: OrderedMap::new(),
            roots: OrderedMap::new(),
        }
    }

    /// 정의 순서상 첫 번째로 맞는 접두사를 떼어냄
    ///
    /// 접두사가 단어 전체를 차지하면 매칭하지 않습니다 (최소 한 글자 남김).
    pub fn lookup_prefix<'w>(&self, word: &'w str) -> Option<(MorphemeComponent, &'w str)> {
        for (prefix, gloss) in self.prefixes.iter() {
            let clean = strip_marker(prefix);
            if clean.is_empty() {
                continue;
            }
            if word.len() > clean.len() && word.starts_with(clean) {
                let component = MorphemeComponent::new(prefix, gloss.as_str(), MorphemeKind::Prefix);
                return Some((component, &word[clean.len()..]));
            }
        }
        None
    }

    /// 정의 순서상 첫 번째로 맞는 접미사를 떼어냄
    pub fn lookup_suffix<'w>(&self, word: &'w str) -> Option<(MorphemeComponent, &'w str)> {
        for (suffix, gloss) in self.suffixes.iter() {
            let clean = strip_marker(suffix);
            if clean.is_empty() {
                continue;
            }
            if word.len() > clean.len() && word.ends_with(clean) {
                let component = MorphemeComponent::new(suffix, gloss.as_str(), MorphemeKind::Suffix);
                return Some((component, &word[..word.len() - clean.len()]));
            }
        }
        None
    }

    /// 어근 정확 일치 조회
    pub fn lookup_root(&self, text: &str) -> Option<&str> {
        self.roots.get(text).map(String::as_str)
    }

    /// 어간에 부분 문자열로 들어 있는 어근 중 가장 긴 것
    ///
    /// 길이가 같으면 테이블에서 먼저 나온 어근이 이깁니다.
    pub fn longest_root_in(&self, stem: &str) -> Option<RootMatch<'_>> {
        let mut best: Option<RootMatch<'_>> = None;
        for (root, gloss) in self.roots.iter() {
            if root.is_empty() {
                continue;
            }
            let longer = best.map_or(true, |b| root.len() > b.root.len());
            if !longer {
                continue;
            }
            if let Some(start) = stem.find(root) {
                best = Some(RootMatch {
                    start,
                    root,
                    gloss: gloss.as_str(),
                });
            }
        }
        best
    }

    /// 어근 추가/덮어쓰기
    pub fn insert_root(&mut self, text: impl Into<String>, gloss: impl Into<String>) {
        self.roots.insert(text, gloss.into());
    }

    /// 다른 테이블 항목을 병합 (충돌 시 `other` 우선)
    pub fn merge(&mut self, other: PatternTables) {
        self.prefixes.merge(other.prefixes);
        self.suffixes.merge(other.suffixes);
        self.roots.merge(other.roots);
    }
}
