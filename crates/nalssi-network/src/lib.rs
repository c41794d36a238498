//! # nalssi-network
//!
//! 지오코딩 HTTP 네트워크 어댑터.
//! 업스트림 지오코딩 API(OpenWeatherMap geo/1.0)와의 REST 통신을 담당한다.
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use nalssi_network::geo_client::GeoApiClient;
//!
//! let client = GeoApiClient::from_config(&config.network)?;
//! let places = client.search("paris", 5).await?;
//! ```

pub mod geo_client;
