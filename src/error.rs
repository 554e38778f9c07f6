//! 에러 타입 정의

/// morphroot 전용 Result 타입
pub type Result<T, E = MorphError> = std::result::Result<T, E>;

/// 엔진/저장소에서 발생할 수 있는 에러
#[derive(Debug, thiserror::Error)]
pub enum MorphError {
    /// 스냅샷(가져오기 데이터) 형식 오류
    #[error("파일 형식 오류: {0}")]
    Format(String),

    /// JSON 직렬화/역직렬화 실패
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// 파일 입출력 실패
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// 임시 파일을 최종 경로로 옮기지 못함
    #[error(transparent)]
    Persist(#[from] tempfile::PersistError),
}

impl MorphError {
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        MorphError::Format(msg.into())
    }
}
