// ==========================================
// 편의점 발주 추천 시스템 - 날씨 계층
// ==========================================
// 책임: 지역명 → 좌표 → 대상일 예보 → DemandContext
// 실패는 전부 이 계층에서 흡수된다 (기본 컨텍스트로 열화)
// ==========================================

pub mod context;
pub mod forecast;
pub mod geocode;

pub use context::resolve_context;
pub use forecast::{ForecastProvider, OpenMeteoForecast};
pub use geocode::{GeoPoint, Geocoder, OpenMeteoGeocoder};
