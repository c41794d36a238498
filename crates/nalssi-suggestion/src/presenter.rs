//! 제안 프레젠터.
//!
//! GeoPlace → UI 표시용 문자열 변환.

use nalssi_core::models::place::GeoPlace;

/// GeoPlace → 표시용 문자열 변환
///
/// `"이름, 지역, 국가"` 형식. 지역이 없으면(빈 문자열 포함) 생략한다.
pub fn display_label(place: &GeoPlace) -> String {
    match place.region() {
        Some(region) => format!("{}, {}, {}", place.name, region, place.country),
        None => format!("{}, {}", place.name, place.country),
    }
}

/// 여러 장소 일괄 변환 — 입력 순서 보존
pub fn display_labels(places: &[GeoPlace]) -> Vec<String> {
    places.iter().map(display_label).collect()
}
