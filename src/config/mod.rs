// ==========================================
// 편의점 발주 추천 시스템 - 설정 계층
// ==========================================
// 책임: 설정 파일 로드 + 제약 검증 (실행 전 1회)
// ==========================================

pub mod settings;

pub use settings::Settings;
