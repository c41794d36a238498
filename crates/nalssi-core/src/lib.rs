//! # nalssi-core
//!
//! NALSSI 도메인 모델, 포트(trait) 정의, 에러 타입.
//! 모든 크레이트가 공유하는 핵심 타입과 인터페이스를 제공한다.
//!
//! ## 구조
//!
//! - [`models`] — 도메인 데이터 구조체 (serde Serialize/Deserialize)
//! - [`ports`] — Hexagonal Architecture 포트 인터페이스 (async_trait)
//! - [`error`] — 핵심 에러 타입 (thiserror)
//! - [`config`] — 애플리케이션 설정 구조체
//! - [`config_manager`] — 설정 파일 관리 (로드/저장)

pub mod config;
pub mod config_manager;
pub mod error;
pub mod models;
pub mod ports;

#[cfg(test)]
mod tests {
    use crate::models::place::GeoPlace;

    #[test]
    fn place_serde_roundtrip() {
        let place = GeoPlace {
            name: "Seoul".to_string(),
            region: None,
            country: "KR".to_string(),
            lat: 37.5667,
            lon: 126.9783,
        };

        let json = serde_json::to_string(&place).unwrap();
        let deserialized: GeoPlace = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.name, "Seoul");
        assert_eq!(deserialized.country, "KR");
        assert!(deserialized.region.is_none());
    }

    #[test]
    fn place_decodes_state_field() {
        // 업스트림 지오코딩 API는 지역을 `state` 필드로 내려준다
        let json = r#"{"name":"Paris","lat":33.6617,"lon":-95.5555,"country":"US","state":"Texas"}"#;
        let place: GeoPlace = serde_json::from_str(json).unwrap();

        assert_eq!(place.name, "Paris");
        assert_eq!(place.region.as_deref(), Some("Texas"));
        assert_eq!(place.country, "US");
    }

    #[test]
    fn config_defaults() {
        let config = crate::config::AppConfig::default_config();
        assert_eq!(config.suggestion.debounce_ms, 300);
        assert_eq!(config.suggestion.min_query_chars, 3);
        assert_eq!(config.suggestion.max_results, 5);
        assert_eq!(config.network.timeout_ms, 10_000);
        assert_eq!(config.network.geocoding_base_url, "https://api.openweathermap.org");
    }
}
