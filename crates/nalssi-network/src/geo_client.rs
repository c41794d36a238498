//! 지오코딩 HTTP 클라이언트.
//!
//! `Geocoder` 포트 구현. 업스트림 geo/1.0 API에 GET 요청을 보낸다.

use async_trait::async_trait;
use nalssi_core::config::NetworkConfig;
use nalssi_core::error::CoreError;
use nalssi_core::models::place::GeoPlace;
use nalssi_core::ports::geocoder::Geocoder;
use std::time::Duration;
use tracing::debug;

/// 정방향 지오코딩 경로 (장소 이름 → 장소 목록)
const DIRECT_PATH: &str = "/geo/1.0/direct";

/// 역방향 지오코딩 경로 (좌표 → 장소)
const REVERSE_PATH: &str = "/geo/1.0/reverse";

/// 지오코딩 API 클라이언트 — `Geocoder` 포트 구현
///
/// 재시도 없음 — 제안 조회는 다음 키 입력으로 대체된다.
pub struct GeoApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeoApiClient {
    /// 새 지오코딩 클라이언트 생성
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Network(format!("HTTP 클라이언트 빌드 실패: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// 네트워크 설정에서 클라이언트 생성
    pub fn from_config(config: &NetworkConfig) -> Result<Self, CoreError> {
        Self::new(&config.geocoding_base_url, &config.api_key, config.timeout())
    }

    /// 응답 상태 코드 확인 및 에러 매핑
    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, CoreError> {
        let status = resp.status();

        if status.is_success() {
            return Ok(resp);
        }

        let text = resp.text().await.unwrap_or_else(|e| {
            tracing::warn!("응답 본문 읽기 실패: {e}");
            String::new()
        });

        match status.as_u16() {
            401 => Err(CoreError::Auth(format!("API 키 거부됨: {text}"))),
            _ => Err(CoreError::Network(format!("지오코딩 API 에러 ({status}): {text}"))),
        }
    }

    /// GET 요청 실행 및 장소 목록 디코딩
    ///
    /// 쿼리 파라미터는 받은 값 그대로 전달한다 (URL 인코딩 외 가공 없음).
    async fn fetch_places(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<GeoPlace>, CoreError> {
        let url = format!("{}{}", self.base_url, path);

        let resp = self
            .client
            .get(&url)
            .query(params)
            .query(&[("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| CoreError::Network(format!("지오코딩 요청 실패: {e}")))?;

        let resp = Self::check_response(resp).await?;

        resp.json::<Vec<GeoPlace>>()
            .await
            .map_err(|e| CoreError::Decode(format!("지오코딩 응답 파싱 실패: {e}")))
    }
}

#[async_trait]
impl Geocoder for GeoApiClient {
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<GeoPlace>, CoreError> {
        debug!("장소 검색: {query} (limit {limit})");

        let limit = limit.to_string();
        let places = self
            .fetch_places(DIRECT_PATH, &[("q", query), ("limit", limit.as_str())])
            .await?;

        debug!("장소 검색 결과: {}건", places.len());
        Ok(places)
    }

    async fn reverse(&self, lat: f64, lon: f64) -> Result<Option<GeoPlace>, CoreError> {
        debug!("역방향 조회: ({lat}, {lon})");

        let lat = lat.to_string();
        let lon = lon.to_string();
        let places = self
            .fetch_places(
                REVERSE_PATH,
                &[("lat", lat.as_str()), ("lon", lon.as_str()), ("limit", "1")],
            )
            .await?;

        Ok(places.into_iter().next())
    }
}
