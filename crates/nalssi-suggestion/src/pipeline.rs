//! 제안 파이프라인.
//!
//! 고빈도 키 입력 → 디바운스 → 지오코딩 조회 → 저빈도 제안 목록 방출.
//! 타이머 취소는 세대(epoch) 비교로, 늦은 응답 폐기는 시퀀스 비교로 처리한다.

use nalssi_core::config::SuggestionConfig;
use nalssi_core::ports::diagnostics::DiagnosticSink;
use nalssi_core::ports::geocoder::Geocoder;
use nalssi_core::ports::renderer::SuggestionRenderer;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::presenter;

/// 파이프라인 내부 상태
///
/// 입력 필드 attach 동안 유지되며, detach 시에만 초기화된다.
#[derive(Debug, Default)]
struct PipelineState {
    /// 디바운스 타이머 세대 — 키 입력마다 증가하며, 발행 전 타이머를 무효화한다
    schedule_epoch: u64,
    /// 마지막으로 발행된 조회 시퀀스
    next_sequence: u64,
    /// 마지막으로 UI에 적용된 조회 시퀀스
    last_applied: u64,
}

/// 제안 파이프라인
///
/// 입력 필드 하나당 인스턴스 하나를 생성한다. 모든 실패는 내부에서
/// 처리되며 `on_input` 호출자에게 전파되지 않는다.
pub struct SuggestionPipeline {
    inner: Arc<PipelineInner>,
}

struct PipelineInner {
    geocoder: Arc<dyn Geocoder>,
    renderer: Arc<dyn SuggestionRenderer>,
    diagnostics: Option<Arc<dyn DiagnosticSink>>,
    config: SuggestionConfig,
    state: Mutex<PipelineState>,
}

impl SuggestionPipeline {
    /// 새 파이프라인 생성
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        renderer: Arc<dyn SuggestionRenderer>,
        diagnostics: Option<Arc<dyn DiagnosticSink>>,
        config: SuggestionConfig,
    ) -> Self {
        Self {
            inner: Arc::new(PipelineInner {
                geocoder,
                renderer,
                diagnostics,
                config,
                state: Mutex::new(PipelineState::default()),
            }),
        }
    }

    /// 입력 값 변경 처리
    ///
    /// trim 후 최소 글자 수 미만이면 예약된 조회를 취소하고 즉시 빈 목록을
    /// 방출한다. 그 외에는 디바운스 타이머를 재시작한다 — 창 안의 마지막
    /// 키 입력만 조회를 발행한다.
    pub async fn on_input(&self, text: &str) {
        let trimmed = text.trim();

        let epoch = {
            let mut state = self.inner.state.lock().await;
            // 예약된(아직 발행 전) 타이머 취소
            state.schedule_epoch += 1;
            state.schedule_epoch
        };

        if trimmed.chars().count() < self.inner.config.min_query_chars {
            if let Err(e) = self.inner.renderer.render(&[]).await {
                warn!("제안 목록 갱신 실패: {e}");
            }
            return;
        }

        let inner = Arc::clone(&self.inner);
        let query = trimmed.to_string();
        tokio::spawn(async move {
            inner.debounced_lookup(epoch, query).await;
        });
    }

    /// 입력 필드 detach
    ///
    /// 예약된 타이머를 취소하고 시퀀스 상태를 초기화한다. 아직 도착하지
    /// 않은 응답은 시퀀스가 `next_sequence`를 넘어서므로 적용되지 않는다.
    pub async fn detach(&self) {
        let mut state = self.inner.state.lock().await;
        state.schedule_epoch += 1;
        state.next_sequence = 0;
        state.last_applied = 0;
        debug!("파이프라인 detach — 상태 초기화");
    }
}

impl PipelineInner {
    /// 디바운스 후 조회 발행 및 응답 적용
    async fn debounced_lookup(self: Arc<Self>, epoch: u64, query: String) {
        tokio::time::sleep(self.config.debounce()).await;

        // 대기 중 새 키 입력이 있었으면 이 타이머는 무효 — 조회하지 않는다
        let sequence = {
            let mut state = self.state.lock().await;
            if state.schedule_epoch != epoch {
                debug!("디바운스 타이머 취소됨: {query}");
                return;
            }
            state.next_sequence += 1;
            state.next_sequence
        };

        debug!("제안 조회 발행 (seq {sequence}): {query}");

        match self.geocoder.search(&query, self.config.max_results).await {
            Ok(places) => {
                // 적용과 방출을 락 아래에서 함께 수행해 방출 순서를 보장한다
                let mut state = self.state.lock().await;
                if sequence < state.last_applied || sequence > state.next_sequence {
                    debug!(
                        "오래된 응답 폐기 (seq {sequence}, last_applied {})",
                        state.last_applied
                    );
                    return;
                }
                state.last_applied = sequence;

                let labels = presenter::display_labels(&places);
                if let Err(e) = self.renderer.render(&labels).await {
                    warn!("제안 목록 갱신 실패: {e}");
                }
            }
            Err(e) => {
                // 사용자에게는 노출하지 않는다 — 기존 제안 유지
                warn!("제안 조회 실패 (seq {sequence}): {e}");
                if let Some(diagnostics) = &self.diagnostics {
                    diagnostics.record(&e);
                }
            }
        }
    }
}
