//! 분해기 설정

/// 이등분 폴백을 하지 않는 최대 어간 길이 기본값
pub const DEFAULT_FRAGMENT_THRESHOLD: usize = 4;

/// 분해 알고리즘 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmenterConfig {
    /// 어떤 어근과도 맞지 않는 어간이 이 길이 이하면 통째로 "unknown root",
    /// 더 길면 가운데에서 둘로 나눔
    pub fragment_threshold: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            fragment_threshold: DEFAULT_FRAGMENT_THRESHOLD,
        }
    }
}

impl SegmenterConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 이등분 임계 길이 설정
    pub fn with_fragment_threshold(mut self, threshold: usize) -> Self {
        self.fragment_threshold = threshold;
        self
    }
}
