use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::input::{Assumptions, CalculationInput};

pub const DEFAULT_CONFIG_FILE: &str = "heatpump.toml";

/// 실행 설정: 계산 시나리오, 설계 상수, 연료표 경로.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 외부 연료표(CSV/TOML). 없으면 내장 표를 사용한다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_db: Option<PathBuf>,
    #[serde(default)]
    pub assumptions: Assumptions,
    #[serde(default)]
    pub scenario: CalculationInput,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
