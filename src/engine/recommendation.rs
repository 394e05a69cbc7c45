// ==========================================
// 편의점 발주 추천 시스템 - 추천 테이블 빌더
// ==========================================
// 근거: 발주 로직 정의서 v0.2 - 검토 그리드/내보내기 규칙
// ==========================================
// 전체 집합(0 포함)은 항상 유지하고, 화면용 필터/정렬과
// 내보내기용 확정 수량 선별은 별도 투영으로 제공한다.
// ==========================================

use crate::domain::product::{ProductRecord, RecommendationRecord};
use crate::domain::types::DemandContext;
use crate::engine::demand::{recommend, OrderParams};
use crate::engine::weights::DemandWeights;

// ==========================================
// RecommendationTable - 추천 레코드 집합
// ==========================================
pub struct RecommendationTable {
    records: Vec<RecommendationRecord>,
}

impl RecommendationTable {
    /// 모든 정규화 레코드에 수식을 적용해 테이블을 만든다.
    /// 입력 순서를 보존한다 — 정렬은 투영 시점에만.
    pub fn build(
        products: Vec<ProductRecord>,
        ctx: &DemandContext,
        params: &OrderParams,
        weights: &DemandWeights,
    ) -> Self {
        let records = products
            .into_iter()
            .map(|product| {
                let qty = recommend(&product, ctx, params, weights);
                RecommendationRecord::new(product, qty)
            })
            .collect();

        Self { records }
    }

    /// 전체 집합 (추천량 0 포함, 입력 순서)
    pub fn all(&self) -> &[RecommendationRecord] {
        &self.records
    }

    /// 운영자 검토용 기본 화면: 추천량 양수만, 추천량 내림차순.
    /// 동률은 상품명 오름차순으로 고정해 실행마다 순서가 흔들리지 않게 한다.
    pub fn visible(&self) -> Vec<&RecommendationRecord> {
        let mut rows: Vec<&RecommendationRecord> = self
            .records
            .iter()
            .filter(|r| r.recommended_qty > 0)
            .collect();
        rows.sort_by(|a, b| {
            b.recommended_qty
                .cmp(&a.recommended_qty)
                .then_with(|| a.product.name.cmp(&b.product.name))
        });
        rows
    }

    /// 확정 수량 덮어쓰기 (전체 집합 기준 인덱스).
    /// 수식과의 정합성은 보장하지 않는다 — 내보내기는 마지막 설정값을 따른다.
    pub fn set_confirmed_qty(&mut self, index: usize, qty: u32) -> bool {
        match self.records.get_mut(index) {
            Some(record) => {
                record.confirmed_qty = qty;
                true
            }
            None => false,
        }
    }

    /// 내보내기 집합: 확정 수량이 양수인 행만, 확정 수량 내림차순.
    pub fn export_rows(&self) -> Vec<&RecommendationRecord> {
        let mut rows: Vec<&RecommendationRecord> = self
            .records
            .iter()
            .filter(|r| r.confirmed_qty > 0)
            .collect();
        rows.sort_by(|a, b| {
            b.confirmed_qty
                .cmp(&a.confirmed_qty)
                .then_with(|| a.product.name.cmp(&b.product.name))
        });
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{StoreType, WeatherSnapshot};

    fn product(name: &str, category: &str, sales: f64, stock: f64) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            category: category.to_string(),
            period_sales: sales,
            current_stock: stock,
            promotion: String::new(),
        }
    }

    fn rainy_ctx() -> DemandContext {
        DemandContext::new(
            StoreType::Residential,
            WeatherSnapshot {
                temperature: 20.0,
                rainfall_mm: 10.0,
            },
        )
    }

    fn build_sample() -> RecommendationTable {
        RecommendationTable::build(
            vec![
                product("우산", "잡화", 14.0, 2.0),   // → 23
                product("생수", "음료", 7.0, 100.0),   // → 0
                product("컵라면", "면류", 14.0, 0.0),  // → 6
            ],
            &rainy_ctx(),
            &OrderParams::default(),
            &DemandWeights::default(),
        )
    }

    #[test]
    fn test_all_keeps_zeros_and_input_order() {
        let table = build_sample();
        let all = table.all();

        assert_eq!(all.len(), 3);
        assert_eq!(all[1].product.name, "생수");
        assert_eq!(all[1].recommended_qty, 0);
    }

    #[test]
    fn test_visible_filters_and_sorts_descending() {
        let table = build_sample();
        let visible = table.visible();

        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].product.name, "우산");
        assert_eq!(visible[0].recommended_qty, 23);
        assert_eq!(visible[1].product.name, "컵라면");
    }

    #[test]
    fn test_confirmed_qty_override_flows_to_export() {
        let mut table = build_sample();

        // 운영자가 우산 23 → 10 으로 수정, 생수 0 → 3 추가
        assert!(table.set_confirmed_qty(0, 10));
        assert!(table.set_confirmed_qty(1, 3));
        assert!(!table.set_confirmed_qty(99, 1));

        let export = table.export_rows();
        assert_eq!(export.len(), 3);
        assert_eq!(export[0].product.name, "우산");
        assert_eq!(export[0].confirmed_qty, 10);
        // 수식 산출값은 그대로 남는다
        assert_eq!(export[0].recommended_qty, 23);
        assert!(export.iter().any(|r| r.product.name == "생수" && r.confirmed_qty == 3));
    }

    #[test]
    fn test_export_drops_zeroed_rows() {
        let mut table = build_sample();

        // 우산을 0 으로 내리면 내보내기에서 빠진다
        table.set_confirmed_qty(0, 0);

        let export = table.export_rows();
        assert_eq!(export.len(), 1);
        assert_eq!(export[0].product.name, "컵라면");
    }
}
