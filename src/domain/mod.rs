// ==========================================
// 편의점 발주 추천 시스템 - 도메인 계층
// ==========================================
// 근거: 발주 로직 정의서 v0.2
// ==========================================

pub mod product;
pub mod types;

pub use product::{IngestReport, ProductRecord, RecommendationRecord, UNCATEGORIZED};
pub use types::{DemandContext, StoreType, WeatherSnapshot, RAINY_THRESHOLD_MM};
