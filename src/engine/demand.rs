// ==========================================
// 편의점 발주 추천 시스템 - 수요 수식 엔진
// ==========================================
// 근거: 발주 로직 정의서 v0.2 - 발주량 산식
// ==========================================
// 순수 함수. 레코드 + 컨텍스트 + 파라미터 외에는 아무것도 읽지 않는다.
// 가중치는 1.0 기점의 가산 누적 — 규칙이 전부 독립 가산이므로
// 적용 순서는 결과에 영향을 주지 않는다.
// ==========================================

use crate::domain::product::ProductRecord;
use crate::domain::types::{DemandContext, StoreType};
use crate::engine::weights::DemandWeights;
use serde::{Deserialize, Serialize};

// ==========================================
// OrderParams - 산식 파라미터
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderParams {
    pub lookback_days: u32,     // 판매 이력 조회 기간 (일, > 0 은 설정 계층이 보장)
    pub target_stock_days: f64, // 목표 재고 일수
}

impl Default for OrderParams {
    fn default() -> Self {
        Self {
            lookback_days: 7,
            target_stock_days: 2.5,
        }
    }
}

/// 정규화 레코드 1건의 추천 발주 수량을 계산한다.
///
/// 산식 (고정 순서):
///   daily_rate = period_sales / lookback_days
///   target     = daily_rate × target_stock_days
///   weight     = 1.0 + Σ(일치 규칙 부스트)
///   needed     = target × weight − current_stock
///   결과       = max(0, floor(needed))
///
/// floor 절삭(반올림 아님)은 의도된 하향 편향 — 과발주보다 낫다.
/// 판매량 0 인 상품은 target 이 0 이므로 재고와 무관하게 항상 0.
pub fn recommend(
    record: &ProductRecord,
    ctx: &DemandContext,
    params: &OrderParams,
    weights: &DemandWeights,
) -> u32 {
    let daily_rate = record.period_sales / f64::from(params.lookback_days);
    let target = daily_rate * params.target_stock_days;
    let weight = 1.0 + boost_sum(record, ctx, weights);

    let needed = target * weight - record.current_stock;
    if needed <= 0.0 {
        0
    } else {
        needed.floor() as u32
    }
}

/// 일치하는 규칙들의 부스트 합. 규칙은 전부 독립이며 가산 결합한다.
fn boost_sum(record: &ProductRecord, ctx: &DemandContext, w: &DemandWeights) -> f64 {
    let mut sum = 0.0;

    // 상권 규칙: 오피스가 × 오피스 지향 카테고리
    if ctx.store_type == StoreType::Office
        && contains_any(&record.category, &w.office_categories)
    {
        sum += w.office_boost;
    }

    // 더위 규칙: 카테고리 부스트와 아이스 키워드 부스트는 중첩된다
    if ctx.temperature >= w.heat_threshold_c {
        if contains_any(&record.category, &w.heat_keywords)
            || contains_any(&record.name, &w.heat_keywords)
        {
            sum += w.heat_boost;
        }
        if contains_any(&record.name, &w.ice_keywords) {
            sum += w.ice_boost;
        }
    }

    // 강수 규칙
    if ctx.is_rainy {
        if contains_any(&record.name, &w.umbrella_keywords) {
            sum += w.rain_umbrella_boost;
        }
        if contains_any(&record.category, &w.noodle_categories)
            || contains_any(&record.name, &w.soup_keywords)
        {
            sum += w.rain_noodle_boost;
        }
        if contains_any(&record.category, &w.rain_side_categories) {
            sum += w.rain_side_boost;
        }
    }

    // 행사 규칙: 1+1 우선, 상호 배타
    if record.promotion.contains("1+1") {
        sum += w.promo_one_plus_one_boost;
    } else if record.promotion.contains("2+1") {
        sum += w.promo_two_plus_one_boost;
    }

    sum
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|kw| text.contains(kw.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{StoreType, WeatherSnapshot};

    fn record(name: &str, category: &str, sales: f64, stock: f64, promo: &str) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            category: category.to_string(),
            period_sales: sales,
            current_stock: stock,
            promotion: promo.to_string(),
        }
    }

    fn ctx(store_type: StoreType, temperature: f64, rainfall_mm: f64) -> DemandContext {
        DemandContext::new(
            store_type,
            WeatherSnapshot {
                temperature,
                rainfall_mm,
            },
        )
    }

    fn calm_ctx() -> DemandContext {
        ctx(StoreType::Residential, 20.0, 0.0)
    }

    #[test]
    fn test_umbrella_rainy_day_end_to_end() {
        // daily_rate=2, target=5, weight=1+4=5, needed=25-2=23
        let rec = record("우산", "잡화", 14.0, 2.0, "");
        let rainy = ctx(StoreType::Residential, 20.0, 12.0);

        let qty = recommend(&rec, &rainy, &OrderParams::default(), &DemandWeights::default());
        assert_eq!(qty, 23);
    }

    #[test]
    fn test_dead_item_always_zero() {
        // 판매량 0 → 어떤 컨텍스트에서도 발주 0
        let rec = record("삼각김밥", "도시락", 0.0, 5.0, "1+1");
        let rainy_office = ctx(StoreType::Office, 35.0, 20.0);

        let qty = recommend(
            &rec,
            &rainy_office,
            &OrderParams::default(),
            &DemandWeights::default(),
        );
        assert_eq!(qty, 0);
    }

    #[test]
    fn test_overstocked_item_zero() {
        let rec = record("생수", "음료", 7.0, 100.0, "");
        let qty = recommend(&rec, &calm_ctx(), &OrderParams::default(), &DemandWeights::default());
        assert_eq!(qty, 0);
    }

    #[test]
    fn test_floor_not_round() {
        // daily_rate=1, target=2.5, weight=1.0, needed=2.5-0=2.5 → 2 (반올림이면 3)
        let rec = record("생수", "음료", 7.0, 0.0, "");
        let qty = recommend(&rec, &calm_ctx(), &OrderParams::default(), &DemandWeights::default());
        assert_eq!(qty, 2);
    }

    #[test]
    fn test_office_category_boost() {
        let rec = record("참치김밥도시락", "도시락", 14.0, 0.0, "");
        let office = ctx(StoreType::Office, 20.0, 0.0);
        let residential = calm_ctx();
        let params = OrderParams::default();
        let weights = DemandWeights::default();

        // target=5: 오피스가 5×1.3=6.5→6, 주택가 5×1.0=5
        assert_eq!(recommend(&rec, &office, &params, &weights), 6);
        assert_eq!(recommend(&rec, &residential, &params, &weights), 5);
    }

    #[test]
    fn test_heat_boosts_stack() {
        // 빙과 카테고리(+0.3)와 아이스 키워드(+0.5)는 중첩 가산
        let rec = record("아이스바", "빙과", 14.0, 0.0, "");
        let hot = ctx(StoreType::Residential, 30.0, 0.0);

        // target=5, weight=1.8 → 9.0 → 9
        let qty = recommend(&rec, &hot, &OrderParams::default(), &DemandWeights::default());
        assert_eq!(qty, 9);
    }

    #[test]
    fn test_heat_threshold_inclusive() {
        let rec = record("콜라", "음료", 14.0, 0.0, "");
        let params = OrderParams::default();
        let weights = DemandWeights::default();

        // 28.0°C 정확히 → 더위 규칙 적용 (target=5 × 1.3 = 6.5 → 6)
        let at_threshold = ctx(StoreType::Residential, 28.0, 0.0);
        assert_eq!(recommend(&rec, &at_threshold, &params, &weights), 6);

        let below = ctx(StoreType::Residential, 27.9, 0.0);
        assert_eq!(recommend(&rec, &below, &params, &weights), 5);
    }

    #[test]
    fn test_rain_noodle_and_side_boosts() {
        let rainy = ctx(StoreType::Residential, 20.0, 10.0);
        let params = OrderParams::default();
        let weights = DemandWeights::default();

        // 면류: target=5 × 1.2 = 6.0 → 6
        let noodle = record("컵라면", "면류", 14.0, 0.0, "");
        assert_eq!(recommend(&noodle, &rainy, &params, &weights), 6);

        // 주류: target=5 × 1.15 = 5.75 → 5
        let beer = record("맥주", "주류", 14.0, 0.0, "");
        assert_eq!(recommend(&beer, &rainy, &params, &weights), 5);
    }

    #[test]
    fn test_promotion_exclusive_one_plus_one_wins() {
        // "1+1" 과 "2+1" 이 모두 포함된 라벨은 1+1 가중치만
        let rec = record("음료수", "음료", 14.0, 0.0, "행사 1+1/2+1");
        let qty = recommend(&rec, &calm_ctx(), &OrderParams::default(), &DemandWeights::default());

        // target=5 × 1.5 = 7.5 → 7 (2+1 이 겹쳐 더해지면 9)
        assert_eq!(qty, 7);
    }

    #[test]
    fn test_promotion_two_plus_one() {
        let rec = record("과자", "스낵", 14.0, 0.0, "2+1");
        let qty = recommend(&rec, &calm_ctx(), &OrderParams::default(), &DemandWeights::default());
        // target=5 × 1.3 = 6.5 → 6
        assert_eq!(qty, 6);
    }

    #[test]
    fn test_monotonic_in_stock() {
        let params = OrderParams::default();
        let weights = DemandWeights::default();
        let base = record("우산", "잡화", 50.0, 0.0, "");
        let rainy = ctx(StoreType::Residential, 20.0, 10.0);

        let mut prev = u32::MAX;
        for stock in 0..80 {
            let rec = ProductRecord {
                current_stock: f64::from(stock),
                ..base.clone()
            };
            let qty = recommend(&rec, &rainy, &params, &weights);
            assert!(qty <= prev, "재고 증가가 추천량을 늘림: stock={}", stock);
            prev = qty;
        }
    }

    #[test]
    fn test_monotonic_in_sales() {
        let params = OrderParams::default();
        let weights = DemandWeights::default();
        let rainy = ctx(StoreType::Residential, 20.0, 10.0);

        let mut prev = 0u32;
        for sales in 0..100 {
            let rec = record("컵라면", "면류", f64::from(sales), 10.0, "");
            let qty = recommend(&rec, &rainy, &params, &weights);
            assert!(qty >= prev, "판매량 증가가 추천량을 줄임: sales={}", sales);
            prev = qty;
        }
    }

    #[test]
    fn test_custom_weight_table_changes_magnitude_only() {
        let rec = record("우산", "잡화", 14.0, 2.0, "");
        let rainy = ctx(StoreType::Residential, 20.0, 10.0);
        let params = OrderParams::default();

        // 우산 부스트 3.0 변형 점포: target=5 × 4.0 = 20 − 2 = 18
        let weights = DemandWeights {
            rain_umbrella_boost: 3.0,
            ..DemandWeights::default()
        };
        assert_eq!(recommend(&rec, &rainy, &params, &weights), 18);
    }
}
