//! 학습 데이터 저장소
//!
//! 엔진은 고정 키(`learningData`, `rootPatterns`)로 문자열 blob을 읽고 씁니다.
//! 실제 저장 매체는 [`Storage`] 구현이 결정합니다.

use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::error::Result;

/// 학습 저장소 키
pub const LEARNING_KEY: &str = "learningData";
/// 패턴 테이블 키
pub const PATTERNS_KEY: &str = "rootPatterns";

/// 키-값 저장소
pub trait Storage {
    /// 키에 해당하는 blob. 없으면 `None`
    fn load(&self, key: &str) -> Result<Option<String>>;
    /// blob 저장 (기존 값 덮어씀)
    fn save(&mut self, key: &str, blob: &str) -> Result<()>;
}

/// 디렉토리 안에 `<key>.json` 파일로 저장
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        // 같은 디렉토리의 임시 파일에 쓴 뒤 rename
        let mut temp_file = NamedTempFile::new_in(&self.dir)?;
        temp_file.write_all(blob.as_bytes())?;
        temp_file.flush()?;
        temp_file.persist(self.path_for(key))?;
        Ok(())
    }
}

/// 메모리 저장소 (테스트, 임시 세션용)
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Storage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<()> {
        self.entries.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
