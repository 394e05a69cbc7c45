// ==========================================
// 편의점 발주 추천 시스템 - 엔진 계층
// ==========================================
// 책임: 수요 산식과 추천 테이블 구성 (순수 로직, I/O 없음)
// ==========================================

pub mod demand;
pub mod recommendation;
pub mod weights;

pub use demand::{recommend, OrderParams};
pub use recommendation::RecommendationTable;
pub use weights::DemandWeights;
