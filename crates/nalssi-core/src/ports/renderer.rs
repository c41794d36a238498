//! 제안 표시 포트.
//!
//! 구현: UI 레이어 (datalist/드롭다운 갱신)

use async_trait::async_trait;

use crate::error::CoreError;

/// 제안 목록 표시 인터페이스
///
/// 파이프라인이 만든 표시용 문자열 목록을 순서 그대로 수신한다.
/// 빈 목록은 기존 제안을 지우라는 의미이다.
#[async_trait]
pub trait SuggestionRenderer: Send + Sync {
    /// 제안 목록 갱신
    async fn render(&self, suggestions: &[String]) -> Result<(), CoreError>;
}
