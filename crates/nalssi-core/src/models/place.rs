//! 장소 모델.
//!
//! 지오코딩 API에서 수신하는 장소 데이터 구조체.

use serde::{Deserialize, Serialize};

/// 지오코딩 결과 장소 (업스트림 API → 클라이언트)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPlace {
    /// 장소 이름 (도시명)
    pub name: String,
    /// 행정 구역 (주/도) — 업스트림 API의 `state` 필드
    #[serde(rename = "state", default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// ISO 3166 국가 코드
    pub country: String,
    /// 위도
    pub lat: f64,
    /// 경도
    pub lon: f64,
}

impl GeoPlace {
    /// 행정 구역 반환 — 빈 문자열은 없음으로 취급
    ///
    /// 일부 업스트림 응답이 `state: ""`를 내려보낸다.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref().filter(|r| !r.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_region_is_absent() {
        let place = GeoPlace {
            name: "Paris".to_string(),
            region: Some(String::new()),
            country: "FR".to_string(),
            lat: 48.8589,
            lon: 2.3200,
        };
        assert!(place.region().is_none());
    }

    #[test]
    fn missing_state_field_deserializes() {
        let json = r#"{"name":"Paris","lat":48.8589,"lon":2.32,"country":"FR"}"#;
        let place: GeoPlace = serde_json::from_str(json).unwrap();
        assert!(place.region().is_none());
    }
}
