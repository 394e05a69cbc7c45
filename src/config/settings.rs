// ==========================================
// 편의점 발주 추천 시스템 - 설정 계층
// ==========================================
// 근거: 발주 로직 정의서 v0.2 - 인식 옵션 전집
// 로드 순서: --config 경로 > 기본 경로 > 내장 기본값
// ==========================================
// 검증은 로드 시점에 끝낸다. lookback_days > 0 은 여기서
// 보장되므로 수식 엔진은 0 나눗셈을 걱정하지 않는다.
// ==========================================

use crate::domain::types::StoreType;
use crate::engine::weights::DemandWeights;
use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub store_type: StoreType,
    pub lookback_days: u32,     // 판매 이력 조회 기간 (기본 7일)
    pub target_stock_days: f64, // 목표 재고 일수 (기본 2.5일)
    pub target_day_offset: u8,  // 발주 대상일 (1=내일, 2=모레)
    pub region: Option<String>, // 날씨 조회용 지역명 (없으면 기본 컨텍스트)
    pub weights: DemandWeights, // [weights] 테이블로 부분 덮어쓰기 가능
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_type: StoreType::default(),
            lookback_days: 7,
            target_stock_days: 2.5,
            target_day_offset: 1,
            region: None,
            weights: DemandWeights::default(),
        }
    }
}

impl Settings {
    /// 설정 파일 로드. 명시 경로가 없으면 기본 경로를 찾아보고,
    /// 그것도 없으면 내장 기본값을 쓴다. 로드 후 즉시 검증.
    pub fn load(explicit_path: Option<&Path>) -> ImportResult<Self> {
        let path = match explicit_path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_path().filter(|p| p.exists()),
        };

        let settings = match path {
            Some(path) => {
                let raw = fs::read_to_string(&path).map_err(|e| {
                    ImportError::FileReadError(format!("{}: {}", path.display(), e))
                })?;
                let parsed: Settings =
                    toml::from_str(&raw).map_err(|e| ImportError::ConfigValueError {
                        key: path.display().to_string(),
                        message: e.to_string(),
                    })?;
                tracing::debug!(path = %path.display(), "설정 파일 로드");
                parsed
            }
            None => Settings::default(),
        };

        settings.validate()?;
        Ok(settings)
    }

    /// 기본 설정 파일 경로: <config_dir>/cvs-restock-advisor/config.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cvs-restock-advisor").join("config.toml"))
    }

    /// 설정값 제약 검증. 위반 키와 제약을 그대로 에러에 싣는다.
    pub fn validate(&self) -> ImportResult<()> {
        if self.lookback_days == 0 {
            return Err(ImportError::ConfigValueError {
                key: "lookback_days".to_string(),
                message: "0 보다 커야 함".to_string(),
            });
        }
        if !(self.target_stock_days > 0.0) {
            return Err(ImportError::ConfigValueError {
                key: "target_stock_days".to_string(),
                message: "0 보다 커야 함".to_string(),
            });
        }
        if !matches!(self.target_day_offset, 1 | 2) {
            return Err(ImportError::ConfigValueError {
                key: "target_day_offset".to_string(),
                message: "1 (내일) 또는 2 (모레) 만 허용".to_string(),
            });
        }
        Ok(())
    }
}
