//! 지오코딩 포트.
//!
//! 구현: `nalssi-network` crate (reqwest)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::place::GeoPlace;

/// 지오코딩 클라이언트
///
/// 장소 이름 → 장소 목록(정방향), 좌표 → 장소(역방향) 조회.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// 장소 이름으로 후보 장소 목록 조회
    ///
    /// 업스트림이 반환한 순서를 그대로 보존한다. 쿼리 문자열은
    /// 검증 없이 그대로 쿼리 파라미터로 전달된다.
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<GeoPlace>, CoreError>;

    /// 좌표에서 가장 가까운 장소 조회
    ///
    /// 해당 좌표에 장소가 없으면 `None`.
    async fn reverse(&self, lat: f64, lon: f64) -> Result<Option<GeoPlace>, CoreError>;
}
