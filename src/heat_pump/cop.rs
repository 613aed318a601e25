use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::CELSIUS_TO_KELVIN;
use crate::error::DomainError;

/// COP를 어떻게 결정할지 나타낸다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum CopSpec {
    /// 열원/온수 온도로 이상 COP를 구하고 보정계수를 곱한다.
    /// `actual_cop`가 있으면 그 값을 그대로 사용한다.
    FromTemperatures {
        /// 열원 온도 [°C]
        source_temp_c: f64,
        /// 요구 온수 온도 [°C]
        hot_water_temp_c: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        actual_cop: Option<f64>,
    },
    /// COP 직접 지정
    Direct { cop: f64 },
}

/// COP 결정에 쓰이는 설계 상수.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CopAssumptions {
    pub evaporator_approach_c: f64,
    pub condenser_approach_c: f64,
    pub derating: f64,
}

/// COP 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedCop {
    /// 증발 온도 [°C]
    pub evap_temp_c: Option<f64>,
    /// 응축 온도 [°C]
    pub cond_temp_c: Option<f64>,
    /// 역카르노 이상 COP (소수 둘째 자리 반올림)
    pub ideal: Option<f64>,
    /// 이후 계산에 사용하는 COP
    pub actual: f64,
}

/// 증발/응축 온도로 역카르노 COP를 계산한다.
pub fn ideal_cop(evap_temp_c: f64, cond_temp_c: f64) -> Result<f64, DomainError> {
    let t_cond = cond_temp_c + CELSIUS_TO_KELVIN;
    let lift = t_cond - (evap_temp_c + CELSIUS_TO_KELVIN);
    if lift <= 0.0 {
        return Err(DomainError::ZeroTemperatureLift {
            evap_temp_c,
            cond_temp_c,
        });
    }
    Ok(t_cond / lift)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// COP 입력을 해석해 실제 사용할 COP를 결정한다.
pub fn resolve(spec: &CopSpec, assumptions: CopAssumptions) -> Result<ResolvedCop, DomainError> {
    let resolved = match *spec {
        CopSpec::FromTemperatures {
            source_temp_c,
            hot_water_temp_c,
            actual_cop,
        } => {
            let evap = source_temp_c - assumptions.evaporator_approach_c;
            let cond = hot_water_temp_c + assumptions.condenser_approach_c;
            let ideal = round2(ideal_cop(evap, cond)?);
            ResolvedCop {
                evap_temp_c: Some(evap),
                cond_temp_c: Some(cond),
                ideal: Some(ideal),
                actual: actual_cop.unwrap_or(ideal * assumptions.derating),
            }
        }
        CopSpec::Direct { cop } => ResolvedCop {
            evap_temp_c: None,
            cond_temp_c: None,
            ideal: None,
            actual: cop,
        },
    };
    if resolved.actual <= 0.0 || resolved.actual.is_nan() {
        return Err(DomainError::NonPositiveCop(resolved.actual));
    }
    debug!(ideal = ?resolved.ideal, actual = resolved.actual, "COP resolved");
    Ok(resolved)
}
