//! 진단 싱크 포트.
//!
//! 사용자에게 노출하지 않는 실패를 기록한다. fire-and-forget.

use crate::error::CoreError;

/// 진단 기록 인터페이스
///
/// 파이프라인 내부에서 삼켜지는 에러(전송 실패, 디코딩 실패)를
/// 받아 기록한다. 기록 실패는 호출자에게 전파되지 않는다.
pub trait DiagnosticSink: Send + Sync {
    /// 에러 기록
    fn record(&self, error: &CoreError);
}

/// tracing 로그로 기록하는 기본 구현
#[derive(Debug, Default)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn record(&self, error: &CoreError) {
        tracing::warn!("제안 조회 실패: {error}");
    }
}
