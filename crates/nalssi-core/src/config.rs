//! 애플리케이션 설정 구조체.
//!
//! 지오코딩 API 연결, 제안 파이프라인 동작(디바운스 주기, 최소 글자 수,
//! 최대 결과 수) 등 런타임 설정을 정의한다. JSON 파일에서 로드.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// 지오코딩 API 연결 설정
    #[serde(default)]
    pub network: NetworkConfig,
    /// 제안 파이프라인 설정
    #[serde(default)]
    pub suggestion: SuggestionConfig,
}

impl AppConfig {
    /// 기본 설정 생성
    pub fn default_config() -> Self {
        Self {
            network: NetworkConfig::default(),
            suggestion: SuggestionConfig::default(),
        }
    }
}

// ============================================================
// 네트워크 설정
// ============================================================

/// 지오코딩 API 연결 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// 지오코딩 API 베이스 URL
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
    /// 업스트림 API 키 (`appid` 쿼리 파라미터)
    #[serde(default)]
    pub api_key: String,
    /// 요청 타임아웃 (밀리초)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl NetworkConfig {
    /// 요청 타임아웃을 `Duration`으로 반환
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            api_key: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_geocoding_base_url() -> String {
    "https://api.openweathermap.org".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

// ============================================================
// 제안 파이프라인 설정
// ============================================================

/// 제안 파이프라인 설정 — 디바운스 주기, 최소 글자 수, 최대 결과 수
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// 디바운스 대기 시간 (밀리초) — 마지막 키 입력 후 이 시간이
    /// 지나야 조회가 발행된다
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// 조회를 발행하는 최소 쿼리 글자 수 (trim 후)
    #[serde(default = "default_min_query_chars")]
    pub min_query_chars: usize,
    /// 한 번에 요청하는 최대 제안 수
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

impl SuggestionConfig {
    /// 디바운스 대기 시간을 `Duration`으로 반환
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            min_query_chars: default_min_query_chars(),
            max_results: default_max_results(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_min_query_chars() -> usize {
    3
}

fn default_max_results() -> u32 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_fills_defaults() {
        // 파일에 network 섹션만 있어도 나머지는 기본값으로 채워진다
        let json = r#"{"network":{"api_key":"abc123"}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.network.api_key, "abc123");
        assert_eq!(config.network.geocoding_base_url, "https://api.openweathermap.org");
        assert_eq!(config.suggestion.debounce_ms, 300);
        assert_eq!(config.suggestion.max_results, 5);
    }

    #[test]
    fn durations() {
        let config = AppConfig::default_config();
        assert_eq!(config.suggestion.debounce(), Duration::from_millis(300));
        assert_eq!(config.network.timeout(), Duration::from_secs(10));
    }
}
