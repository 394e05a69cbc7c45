// ==========================================
// 편의점 발주 추천 시스템 - 수요 가중치 테이블
// ==========================================
// 근거: 발주 로직 정의서 v0.2 - 가중치 규칙 전집
// ==========================================
// 모든 부스트 크기와 키워드 목록은 이름 붙은 설정값이다.
// 규칙 크기 조정은 설정 파일 [weights] 테이블 수정으로 끝나며
// 수식 엔진의 제어 흐름은 건드리지 않는다.
// 운영 점포마다 우산 부스트를 3.0으로 낮춰 쓰는 변형이 있어
// 기본값 4.0 역시 고정 상수가 아니라 조정 가능한 기본값이다.
// ==========================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemandWeights {
    // ===== 상권 규칙 =====
    pub office_boost: f64,              // 오피스가 × 오피스 지향 카테고리
    pub office_categories: Vec<String>, // 오피스 지향 카테고리 목록

    // ===== 더위 규칙 =====
    // 카테고리 부스트와 아이스 키워드 부스트는 독립 가산 (중첩 적용)
    pub heat_threshold_c: f64,        // 더위 판정 최고기온 (이상)
    pub heat_boost: f64,              // 음료/빙과 계열 부스트
    pub heat_keywords: Vec<String>,   // 카테고리·상품명 공통 매칭 키워드
    pub ice_boost: f64,               // 상품명 아이스 키워드 추가 부스트
    pub ice_keywords: Vec<String>,

    // ===== 강수 규칙 =====
    pub rain_umbrella_boost: f64,        // 시스템 최대 단일 부스트
    pub umbrella_keywords: Vec<String>,  // 상품명 매칭
    pub rain_noodle_boost: f64,          // 면류/국물 계열
    pub noodle_categories: Vec<String>,  // 카테고리 매칭
    pub soup_keywords: Vec<String>,      // 상품명 매칭
    pub rain_side_boost: f64,            // 주류/안주 계열
    pub rain_side_categories: Vec<String>,

    // ===== 행사 규칙 =====
    // 상호 배타: 1+1 을 먼저 검사하고, 일치하면 2+1 은 보지 않는다
    pub promo_one_plus_one_boost: f64,
    pub promo_two_plus_one_boost: f64,
}

impl Default for DemandWeights {
    fn default() -> Self {
        Self {
            office_boost: 0.3,
            office_categories: vec!["도시락".into(), "컵커피".into(), "삼각김밥".into()],

            heat_threshold_c: 28.0,
            heat_boost: 0.3,
            heat_keywords: vec![
                "음료".into(),
                "빙과".into(),
                "아이스크림".into(),
                "냉동".into(),
            ],
            ice_boost: 0.5,
            ice_keywords: vec!["아이스".into(), "얼음".into()],

            rain_umbrella_boost: 4.0,
            umbrella_keywords: vec!["우산".into(), "우비".into()],
            rain_noodle_boost: 0.2,
            noodle_categories: vec!["면류".into(), "분식".into()],
            soup_keywords: vec!["국물".into(), "탕".into(), "스프".into()],
            rain_side_boost: 0.15,
            rain_side_categories: vec!["주류".into(), "안주".into()],

            promo_one_plus_one_boost: 0.5,
            promo_two_plus_one_boost: 0.3,
        }
    }
}
