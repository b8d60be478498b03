//! 오류 타입 정의

use thiserror::Error;

/// 일괄 변환 과정에서 발생하는 오류
///
/// 주소 분류 자체는 실패하지 않으며, 오류는 드라이버의
/// 입출력과 JSON 해석에서만 생긴다.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// 입출력 실패
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON 해석/직렬화 실패
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
