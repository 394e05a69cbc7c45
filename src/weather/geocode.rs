// ==========================================
// 편의점 발주 추천 시스템 - 지오코딩 클라이언트
// ==========================================
// 외부 협력자: Open-Meteo Geocoding API
// ==========================================
// 점포/지역 자유 텍스트 → 좌표. 국내 점포 전용 도구이므로
// 결과는 KR 로 한정해 필터링한다.
// ==========================================

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use serde::Deserialize;

const GEOCODING_ENDPOINT: &str = "https://geocoding-api.open-meteo.com/v1/search";

// ==========================================
// GeoPoint - 지오코딩 결과
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

// ==========================================
// Geocoder trait - 테스트 주입 지점
// ==========================================
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// 지역명을 좌표로 해석한다. 미발견/네트워크 오류는 Err —
    /// 치명 여부 판단은 호출자(컨텍스트 해석기)의 몫이다.
    async fn lookup(&self, region: &str) -> anyhow::Result<GeoPoint>;
}

// ==========================================
// Open-Meteo 구현
// ==========================================
pub struct OpenMeteoGeocoder {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
    name: String,
    #[serde(default)]
    country_code: Option<String>,
}

impl OpenMeteoGeocoder {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: GEOCODING_ENDPOINT.to_string(),
        }
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn lookup(&self, region: &str) -> anyhow::Result<GeoPoint> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("name", region), ("count", "5"), ("language", "ko")])
            .send()
            .await
            .context("지오코딩 요청 실패")?
            .error_for_status()
            .context("지오코딩 응답 상태 오류")?;

        let body: GeocodingResponse = response.json().await.context("지오코딩 응답 해석 실패")?;

        // KR 결과만 인정 (동명 해외 지역 배제)
        let hit = body
            .results
            .into_iter()
            .find(|r| r.country_code.as_deref() == Some("KR"))
            .ok_or_else(|| anyhow!("지역 미발견: {}", region))?;

        Ok(GeoPoint {
            latitude: hit.latitude,
            longitude: hit.longitude,
            display_name: hit.name,
        })
    }
}
