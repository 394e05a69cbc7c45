// ==========================================
// 편의점 발주 추천 시스템 - 컨텍스트 해석기
// ==========================================
// 근거: 발주 로직 정의서 v0.2 - 날씨 열화 정책
// ==========================================
// 외부 협력자 경계를 여기서 완전히 흡수한다. 지오코딩/예보의
// 어떤 실패도 수식 계층으로 넘어가지 않는다 — 기본 컨텍스트
// {25°C, 0mm, 맑음} 으로 열화하고 warn 한 줄만 남긴다.
// 재시도/백오프 없음: 단일 운영자 대화형 도구의 수용된 한계.
// ==========================================

use crate::domain::types::{DemandContext, StoreType};
use crate::weather::forecast::ForecastProvider;
use crate::weather::geocode::Geocoder;

/// 실행당 하나의 DemandContext 를 만든다.
///
/// - region 미지정 → 조회 없이 기본 컨텍스트
/// - 지오코딩 실패 / 예보 실패 → 기본 컨텍스트 (정보성 경고만)
pub async fn resolve_context(
    geocoder: &dyn Geocoder,
    forecast: &dyn ForecastProvider,
    store_type: StoreType,
    region: Option<&str>,
    day_offset: u8,
) -> DemandContext {
    let region = match region {
        Some(r) if !r.trim().is_empty() => r.trim(),
        _ => {
            tracing::info!("지역 미지정, 기본 날씨 컨텍스트 사용");
            return DemandContext::fallback(store_type);
        }
    };

    let point = match geocoder.lookup(region).await {
        Ok(point) => point,
        Err(err) => {
            tracing::warn!(region, %err, "지오코딩 실패, 기본 날씨 컨텍스트로 열화");
            return DemandContext::fallback(store_type);
        }
    };

    match forecast
        .daily(point.latitude, point.longitude, day_offset)
        .await
    {
        Ok(snapshot) => {
            tracing::info!(
                region = %point.display_name,
                day_offset,
                temperature = snapshot.temperature,
                rainfall_mm = snapshot.rainfall_mm,
                "날씨 컨텍스트 확보"
            );
            DemandContext::new(store_type, snapshot)
        }
        Err(err) => {
            tracing::warn!(region = %point.display_name, %err, "예보 조회 실패, 기본 날씨 컨텍스트로 열화");
            DemandContext::fallback(store_type)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::WeatherSnapshot;
    use crate::weather::geocode::GeoPoint;
    use anyhow::anyhow;
    use async_trait::async_trait;

    struct FixedGeocoder;

    #[async_trait]
    impl Geocoder for FixedGeocoder {
        async fn lookup(&self, _region: &str) -> anyhow::Result<GeoPoint> {
            Ok(GeoPoint {
                latitude: 37.57,
                longitude: 126.98,
                display_name: "서울".to_string(),
            })
        }
    }

    struct FailingGeocoder;

    #[async_trait]
    impl Geocoder for FailingGeocoder {
        async fn lookup(&self, _region: &str) -> anyhow::Result<GeoPoint> {
            Err(anyhow!("connection refused"))
        }
    }

    struct FixedForecast(WeatherSnapshot);

    #[async_trait]
    impl ForecastProvider for FixedForecast {
        async fn daily(&self, _lat: f64, _lon: f64, _offset: u8) -> anyhow::Result<WeatherSnapshot> {
            Ok(self.0)
        }
    }

    struct FailingForecast;

    #[async_trait]
    impl ForecastProvider for FailingForecast {
        async fn daily(&self, _lat: f64, _lon: f64, _offset: u8) -> anyhow::Result<WeatherSnapshot> {
            Err(anyhow!("timeout"))
        }
    }

    #[tokio::test]
    async fn test_resolved_weather_flows_into_context() {
        let snapshot = WeatherSnapshot {
            temperature: 31.0,
            rainfall_mm: 8.0,
        };
        let ctx = resolve_context(
            &FixedGeocoder,
            &FixedForecast(snapshot),
            StoreType::Office,
            Some("서울"),
            1,
        )
        .await;

        assert_eq!(ctx.temperature, 31.0);
        assert!(ctx.is_rainy);
        assert_eq!(ctx.store_type, StoreType::Office);
    }

    #[tokio::test]
    async fn test_geocode_failure_degrades_to_default() {
        let ctx = resolve_context(
            &FailingGeocoder,
            &FailingForecast,
            StoreType::Residential,
            Some("서울"),
            1,
        )
        .await;

        assert_eq!(ctx, DemandContext::fallback(StoreType::Residential));
    }

    #[tokio::test]
    async fn test_forecast_failure_degrades_to_default() {
        let ctx = resolve_context(
            &FixedGeocoder,
            &FailingForecast,
            StoreType::Residential,
            Some("서울"),
            2,
        )
        .await;

        assert_eq!(ctx, DemandContext::fallback(StoreType::Residential));
    }

    #[tokio::test]
    async fn test_no_region_skips_lookup() {
        let ctx = resolve_context(
            &FailingGeocoder,
            &FailingForecast,
            StoreType::Campus,
            None,
            1,
        )
        .await;

        assert_eq!(ctx, DemandContext::fallback(StoreType::Campus));
    }
}
