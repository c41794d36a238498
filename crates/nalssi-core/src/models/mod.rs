//! NALSSI 도메인 모델.
//!
//! 지오코딩 응답으로 수신하는 핵심 데이터 구조체를 정의한다.
//! 모든 모델은 `serde` Serialize/Deserialize를 구현한다.

pub mod place;
