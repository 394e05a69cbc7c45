// ==========================================
// 편의점 발주 추천 시스템 - 도메인 타입 정의
// ==========================================
// 근거: 발주 로직 정의서 v0.2 - 상권/날씨 가중치 체계
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 상권 유형 (Store Type)
// ==========================================
// 고정 열거형. 가중치 규칙이 붙는 것은 현재 Office 뿐이며
// 나머지는 선택 가능한 컨텍스트로만 존재한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreType {
    Office,      // 오피스가
    Residential, // 주택가
    Campus,      // 대학가
    Tourist,     // 관광지
}

impl Default for StoreType {
    fn default() -> Self {
        StoreType::Residential
    }
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreType::Office => write!(f, "오피스가"),
            StoreType::Residential => write!(f, "주택가"),
            StoreType::Campus => write!(f, "대학가"),
            StoreType::Tourist => write!(f, "관광지"),
        }
    }
}

impl FromStr for StoreType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "office" | "오피스가" => Ok(StoreType::Office),
            "residential" | "주택가" => Ok(StoreType::Residential),
            "campus" | "대학가" => Ok(StoreType::Campus),
            "tourist" | "관광지" => Ok(StoreType::Tourist),
            other => Err(format!("알 수 없는 상권 유형: {}", other)),
        }
    }
}

// ==========================================
// 날씨 스냅샷 (Weather Snapshot)
// ==========================================
// 외부 조회 결과를 파이프라인이 소비하는 형태로 축약한 것.
// 조회 실패 시 default()가 그대로 기본 컨텍스트가 된다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64, // 대상일 최고기온 (°C)
    pub rainfall_mm: f64, // 대상일 강수량 합계 (mm)
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self {
            temperature: 25.0,
            rainfall_mm: 0.0,
        }
    }
}

// ==========================================
// 강수 판정 기준
// ==========================================
// "비 오는 날"의 도메인 정의. 가중치 테이블과 달리 조정 대상이 아니다.
pub const RAINY_THRESHOLD_MM: f64 = 5.0;

// ==========================================
// 수요 컨텍스트 (Demand Context)
// ==========================================
// 실행마다 새로 조립되는 일시 객체. 수식 엔진은 이 값만 읽고
// 전역 상태를 일절 참조하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DemandContext {
    pub store_type: StoreType,
    pub temperature: f64,
    pub rainfall_mm: f64,
    pub is_rainy: bool,
}

impl DemandContext {
    /// 상권 선택 + 날씨 스냅샷을 병합한다.
    /// is_rainy는 독립 입력이 아니라 강수량에서 파생된다.
    pub fn new(store_type: StoreType, weather: WeatherSnapshot) -> Self {
        Self {
            store_type,
            temperature: weather.temperature,
            rainfall_mm: weather.rainfall_mm,
            is_rainy: weather.rainfall_mm > RAINY_THRESHOLD_MM,
        }
    }

    /// 조회 실패 시의 고정 기본 컨텍스트 {25°C, 0mm, 맑음}.
    pub fn fallback(store_type: StoreType) -> Self {
        Self::new(store_type, WeatherSnapshot::default())
    }
}
