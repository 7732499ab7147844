//! 에러 타입 정의
//!
//! 점수 계산 자체는 실패하지 않으며, 설정/사전/입력 파일 처리에서만 사용됩니다.

use thiserror::Error;

/// 공통 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dictionary error: {0}")]
    Dictionary(String),
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, Error>;
