// ==========================================
// 편의점 발주 추천 시스템 - 상품 도메인 모델
// ==========================================
// 근거: 발주 로직 정의서 v0.2 - 정규화 레코드 스키마
// 근거: POS 반출 필드 대응표 v0.1
// ==========================================

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 카테고리 누락 시의 기본값
pub const UNCATEGORIZED: &str = "미분류";

// ==========================================
// ProductRecord - 정규화 상품 레코드
// ==========================================
// 컬럼 해석 단계에서 한 번에 채워지며 이후 불변.
// 하위 단계는 선택 필드 존재 여부를 다시 검사하지 않는다.
// 불변식: period_sales / current_stock 은 항상 0 이상의 수치
//         (셀 강제 변환 실패는 0으로 흡수, 에러로 전파되지 않음)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,         // 상품명 (비어 있지 않음; 빈 행은 해석 단계에서 제거)
    pub category: String,     // 카테고리 (누락 시 "미분류")
    pub period_sales: f64,    // 조회 기간 판매량 합계
    pub current_stock: f64,   // 현재 재고
    pub promotion: String,    // 행사 라벨 원문 (누락 시 빈 문자열)
}

// ==========================================
// RecommendationRecord - 발주 추천 레코드
// ==========================================
// 업로드당 한 번 파생되며, 확정 수량만 운영자가 수정할 수 있다.
// 내보내기는 수식 결과가 아니라 마지막으로 설정된 확정 수량을 따른다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    #[serde(flatten)]
    pub product: ProductRecord,
    pub recommended_qty: u32, // 수식 엔진 산출값 (읽기 전용)
    pub confirmed_qty: u32,   // 확정 발주 수량 (초기값 = 추천값, 수정 가능)
}

impl RecommendationRecord {
    pub fn new(product: ProductRecord, recommended_qty: u32) -> Self {
        Self {
            product,
            recommended_qty,
            confirmed_qty: recommended_qty,
        }
    }
}

// ==========================================
// IngestReport - 업로드 배치 요약
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReport {
    pub batch_id: Uuid,      // 업로드 배치 식별자
    pub header_row: usize,   // 헤더로 채택된 행 번호 (0 또는 1)
    pub total_rows: usize,   // 헤더 이후 데이터 행 수
    pub dropped_rows: usize, // 상품명 없음으로 제거된 행 수 (소계/푸터)
}

impl IngestReport {
    pub fn new(header_row: usize, total_rows: usize, dropped_rows: usize) -> Self {
        Self {
            batch_id: Uuid::new_v4(),
            header_row,
            total_rows,
            dropped_rows,
        }
    }
}
