// ==========================================
// 편의점 발주 추천 시스템 - 핵심 라이브러리
// ==========================================
// 시스템 성격: 단일 운영자 의사결정 지원 도구 (최종 결정권은 사람)
// 파이프라인: 수집 → 정규화 → 컨텍스트 → 수식 → 추천 테이블 → 내보내기
// ==========================================

// ==========================================
// 모듈 선언
// ==========================================

// 도메인 계층 - 엔티티와 타입
pub mod domain;

// 수집 계층 - 외부 POS 반출 파일
pub mod importer;

// 엔진 계층 - 수요 산식과 추천 테이블
pub mod engine;

// 날씨 계층 - 외부 조회 + 컨텍스트 해석
pub mod weather;

// 설정 계층
pub mod config;

// 내보내기
pub mod export;

// 로그 시스템
pub mod logging;

// ==========================================
// 핵심 타입 재노출
// ==========================================

pub use config::Settings;
pub use domain::{
    DemandContext, IngestReport, ProductRecord, RecommendationRecord, StoreType, WeatherSnapshot,
};
pub use engine::{recommend, DemandWeights, OrderParams, RecommendationTable};
pub use importer::{ingest_file, AliasTable, ColumnResolver, ImportError, UniversalFileParser};
pub use weather::{resolve_context, ForecastProvider, Geocoder};

// ==========================================
// 상수 정의
// ==========================================

// 시스템 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 시스템 이름
pub const APP_NAME: &str = "편의점 발주 추천 시스템";
