use thiserror::Error;

use crate::steam::SteamTableError;

/// 물리적으로 의미 없는 입력으로 계산을 진행할 수 없을 때의 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("COP must be greater than zero (got {0})")]
    NonPositiveCop(f64),
    #[error(
        "condensing temperature {cond_temp_c} °C must be above evaporating temperature {evap_temp_c} °C"
    )]
    ZeroTemperatureLift { evap_temp_c: f64, cond_temp_c: f64 },
    #[error("calorific value must be greater than zero (got {0} kcal/kg)")]
    NonPositiveCalorificValue(f64),
    #[error("boiler efficiency must be greater than zero (got {0})")]
    NonPositiveEfficiency(f64),
}

/// 비교 계산 전체에서 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("steam enthalpy lookup failed: {0}")]
    Steam(#[from] SteamTableError),
    #[error("fuel '{0}' is not in the fuel table")]
    UnknownFuel(String),
}
