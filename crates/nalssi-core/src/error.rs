//! NALSSI 핵심 에러 타입.
//!
//! 모든 어댑터 crate는 자체 에러 대신 `CoreError`를 그대로 반환한다.

use thiserror::Error;

/// 코어 레이어 에러.
/// 네트워크, 응답 디코딩, 설정 등 도메인 공통 에러를 정의한다.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 네트워크 에러 (연결 실패, 타임아웃, 비정상 HTTP 상태)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 응답 본문 디코딩 실패
    #[error("응답 디코딩 실패: {0}")]
    Decode(String),

    /// 인증 실패 (API 키 거부)
    #[error("인증 에러: {0}")]
    Auth(String),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),

    /// 내부 에러 (예상치 못한 상황)
    #[error("내부 에러: {0}")]
    Internal(String),
}
