//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::Result;
use crate::learning::DEFAULT_TOP_ROOTS;
use crate::segment::{SegmenterConfig, DEFAULT_FRAGMENT_THRESHOLD};

/// morphroot 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MorphConfig {
    /// 어근이 없는 어간을 이등분하지 않는 최대 길이
    #[serde(default = "default_fragment_threshold")]
    pub fragment_threshold: usize,
    /// 통계에 표시할 상위 형태소 수
    #[serde(default = "default_top_roots_limit")]
    pub top_roots_limit: usize,
    /// 학습 데이터 디렉토리 (없으면 설정 디렉토리 아래 `data`)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_fragment_threshold() -> usize {
    DEFAULT_FRAGMENT_THRESHOLD
}

fn default_top_roots_limit() -> usize {
    DEFAULT_TOP_ROOTS
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            fragment_threshold: default_fragment_threshold(),
            top_roots_limit: default_top_roots_limit(),
            data_dir: None,
        }
    }
}

impl MorphConfig {
    /// 분해기 설정으로 변환
    pub fn segmenter(&self) -> SegmenterConfig {
        SegmenterConfig::new().with_fragment_threshold(self.fragment_threshold)
    }

    /// 학습 데이터 디렉토리
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| config_dir().join("data"))
    }
}

/// 설정 디렉토리: $MORPHROOT_HOME 또는 ~/.config/morphroot
pub fn config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("MORPHROOT_HOME").map(PathBuf::from) {
        if dir.is_absolute() {
            return dir;
        }
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir());
    match home {
        Some(home) => home.join(".config").join("morphroot"),
        // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
        None => PathBuf::from("/var/tmp").join("morphroot"),
    }
}

/// 설정 파일 경로
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> MorphConfig {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> MorphConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            MorphConfig::default()
        }),
        Err(_) => MorphConfig::default(),
    }
}

/// 설정 파일 저장, 저장한 경로 반환
pub fn save_config(config: &MorphConfig) -> Result<PathBuf> {
    let path = config_path();
    save_config_to(&path, config)?;
    Ok(path)
}

/// 임시 파일에 쓴 뒤 `path`로 교체
pub fn save_config_to(path: &Path, config: &MorphConfig) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let json = serde_json::to_string_pretty(config)?;
    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(json.as_bytes())?;
    temp_file.persist(path)?;
    log::info!("설정 저장: {}", path.display());
    Ok(())
}
