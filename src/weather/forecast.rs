// ==========================================
// 편의점 발주 추천 시스템 - 날씨 예보 클라이언트
// ==========================================
// 외부 협력자: Open-Meteo Forecast API
// ==========================================

use crate::domain::types::WeatherSnapshot;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use serde::Deserialize;

const FORECAST_ENDPOINT: &str = "https://api.open-meteo.com/v1/forecast";

// ==========================================
// ForecastProvider trait - 테스트 주입 지점
// ==========================================
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    /// 좌표 + 대상일 오프셋(1=내일, 2=모레)의 일별 예보를 가져온다.
    /// 짧은 응답(요청 오프셋 미포함)도 Err 로 취급한다.
    async fn daily(
        &self,
        latitude: f64,
        longitude: f64,
        day_offset: u8,
    ) -> anyhow::Result<WeatherSnapshot>;
}

// ==========================================
// Open-Meteo 구현
// ==========================================
pub struct OpenMeteoForecast {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    temperature_2m_max: Vec<f64>,
    precipitation_sum: Vec<f64>,
}

impl OpenMeteoForecast {
    pub fn new(client: reqwest::Client) -> Self {
        Self {
            client,
            endpoint: FORECAST_ENDPOINT.to_string(),
        }
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoForecast {
    async fn daily(
        &self,
        latitude: f64,
        longitude: f64,
        day_offset: u8,
    ) -> anyhow::Result<WeatherSnapshot> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("daily", "temperature_2m_max,precipitation_sum".to_string()),
                ("timezone", "Asia/Seoul".to_string()),
                ("forecast_days", "3".to_string()),
            ])
            .send()
            .await
            .context("예보 요청 실패")?
            .error_for_status()
            .context("예보 응답 상태 오류")?;

        let body: ForecastResponse = response.json().await.context("예보 응답 해석 실패")?;

        let idx = usize::from(day_offset);
        let temperature = body
            .daily
            .temperature_2m_max
            .get(idx)
            .copied()
            .ok_or_else(|| anyhow!("예보 응답에 D+{} 최고기온 없음", day_offset))?;
        let rainfall_mm = body
            .daily
            .precipitation_sum
            .get(idx)
            .copied()
            .ok_or_else(|| anyhow!("예보 응답에 D+{} 강수량 없음", day_offset))?;

        Ok(WeatherSnapshot {
            temperature,
            rainfall_mm,
        })
    }
}
