//! 여러 측정 방식의 입력을 하나의 난방 용량(kW)으로 환산한다.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{KCAL_PER_KWH, SECONDS_PER_HOUR, WATER_CP_KJ_PER_KGK};
use crate::steam::{self, SteamEnthalpyPolicy, SteamTableError};

/// 난방 용량 입력 방식. 한 번의 계산에는 하나의 방식만 사용한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method")]
pub enum ThermalInput {
    /// 증기 유량 기준
    SteamFlow {
        /// 증기 유량 [kg/h]
        flow_kg_per_h: f64,
        /// 증기 입구 압력 [bar abs]
        pressure_bar_abs: f64,
        /// 응축수 온도 [°C]
        condensate_temp_c: f64,
    },
    /// 난방 용량 직접 입력 [kW]
    DirectCapacity { kw: f64 },
    /// 전기 히터 정격 [kW]
    ElectricHeater { kw: f64 },
    /// 보일러 용량 [kcal/h]
    BoilerCapacity { kcal_per_h: f64 },
}

impl ThermalInput {
    /// 화면/보고서 표시용 방식 이름.
    pub fn label(&self) -> &'static str {
        match self {
            ThermalInput::SteamFlow { .. } => "Steam Flow Rate",
            ThermalInput::DirectCapacity { .. } => "Heating Capacity (kW)",
            ThermalInput::ElectricHeater { .. } => "Electric Heater (kW)",
            ThermalInput::BoilerCapacity { .. } => "Boiler Capacity (kcal/hr)",
        }
    }
}

/// 증기 유량 방식일 때의 중간 계산값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SteamDetail {
    /// 포화 증기 엔탈피 [kJ/kg]
    pub vapor_enthalpy_kj_per_kg: f64,
    /// 응축수 엔탈피 [kJ/kg]
    pub liquid_enthalpy_kj_per_kg: f64,
    /// 표 범위 밖이라 가장자리 값을 사용했는지 여부
    pub clamped: bool,
}

/// 난방 용량 환산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatingCapacity {
    pub kw: f64,
    pub steam: Option<SteamDetail>,
}

/// 응축수 온도(°C)로부터 액체 엔탈피(kJ/kg)를 근사한다.
pub fn liquid_enthalpy_kj_per_kg(condensate_temp_c: f64) -> f64 {
    WATER_CP_KJ_PER_KGK * condensate_temp_c
}

/// 입력 방식에 따라 난방 용량(kW)을 계산한다.
pub fn resolve(
    input: &ThermalInput,
    policy: SteamEnthalpyPolicy,
) -> Result<HeatingCapacity, SteamTableError> {
    let capacity = match *input {
        ThermalInput::SteamFlow {
            flow_kg_per_h,
            pressure_bar_abs,
            condensate_temp_c,
        } => {
            let lookup = steam::vapor_enthalpy(policy, pressure_bar_abs)?;
            let h_liquid = liquid_enthalpy_kj_per_kg(condensate_temp_c);
            let kw = flow_kg_per_h * (lookup.enthalpy_kj_per_kg - h_liquid) / SECONDS_PER_HOUR;
            HeatingCapacity {
                kw,
                steam: Some(SteamDetail {
                    vapor_enthalpy_kj_per_kg: lookup.enthalpy_kj_per_kg,
                    liquid_enthalpy_kj_per_kg: h_liquid,
                    clamped: lookup.clamped,
                }),
            }
        }
        ThermalInput::DirectCapacity { kw } | ThermalInput::ElectricHeater { kw } => {
            HeatingCapacity { kw, steam: None }
        }
        ThermalInput::BoilerCapacity { kcal_per_h } => HeatingCapacity {
            kw: kcal_per_h / KCAL_PER_KWH,
            steam: None,
        },
    };
    debug!(method = input.label(), kw = capacity.kw, "heating capacity resolved");
    Ok(capacity)
}
