//! 한 번의 비교 계산에 필요한 입력 묶음. 계산마다 새로 만들어 엔진에 넘긴다.

use serde::{Deserialize, Serialize};

use crate::capacity::ThermalInput;
use crate::constants::{
    CONDENSER_APPROACH_C, COP_DERATING, EVAPORATOR_APPROACH_C, GRID_CO2_KG_PER_KWH,
};
use crate::heat_pump::{CopAssumptions, CopSpec};
use crate::steam::SteamEnthalpyPolicy;

/// 운전 조건.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatingProfile {
    pub hours_per_day: f64,
    pub days_per_year: f64,
    /// 전력 단가 [통화/kWh]
    pub electricity_unit_cost: f64,
}

impl OperatingProfile {
    /// 시간당 양(kW, kg/h 등)을 연간 합계로 환산한다.
    pub fn annual_total(&self, per_hour: f64) -> f64 {
        per_hour * self.hours_per_day * self.days_per_year
    }
}

impl Default for OperatingProfile {
    fn default() -> Self {
        Self {
            hours_per_day: 24.0,
            days_per_year: 330.0,
            electricity_unit_cost: 5.5,
        }
    }
}

/// 비교 대상 연료 선택과 발열량 덮어쓰기 값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelSelection {
    pub name: String,
    /// 이번 계산에만 적용하는 발열량 [kcal/kg]. 연료표는 바꾸지 않는다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calorific_value_override: Option<f64>,
}

/// 보일러 부가 운전비.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoilerExtras {
    /// 보일러 인건비 [통화/일]
    #[serde(default)]
    pub labour_cost_per_day: f64,
    /// 보일러 보조기기 연결부하 [kW]
    #[serde(default)]
    pub connected_load_kw: f64,
}

/// 냉방 편익 계산 옵션.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoolingOption {
    /// 냉동기 효율 [ikW/TR]
    pub chiller_ikw_per_tr: f64,
}

impl Default for CoolingOption {
    fn default() -> Self {
        Self {
            chiller_ikw_per_tr: 0.8,
        }
    }
}

/// 계산 입력 전체.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// 히트펌프 설치비 [통화]. 있으면 단순 회수기간을 계산한다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital_cost: Option<f64>,
    pub thermal: ThermalInput,
    pub cop: CopSpec,
    pub profile: OperatingProfile,
    pub fuel: FuelSelection,
    #[serde(default)]
    pub boiler_extras: BoilerExtras,
    /// `None`이면 냉방 편익을 계산하지 않는다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooling: Option<CoolingOption>,
}

impl Default for CalculationInput {
    fn default() -> Self {
        Self {
            capital_cost: None,
            thermal: ThermalInput::DirectCapacity { kw: 462.0 },
            cop: CopSpec::FromTemperatures {
                source_temp_c: 35.0,
                hot_water_temp_c: 65.0,
                actual_cop: None,
            },
            profile: OperatingProfile::default(),
            fuel: FuelSelection {
                name: "Biomass".into(),
                calorific_value_override: None,
            },
            boiler_extras: BoilerExtras::default(),
            cooling: None,
        }
    }
}

/// 설계 상수. 기본값 이외의 값은 다른 계산 관례를 설정으로 표현하는 용도다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// 전력망 CO2 배출계수 [kg/kWh]
    pub grid_co2_kg_per_kwh: f64,
    pub cop_derating: f64,
    pub evaporator_approach_c: f64,
    pub condenser_approach_c: f64,
    pub steam_enthalpy: SteamEnthalpyPolicy,
    /// 보고서 표기 통화
    pub currency: String,
}

impl Assumptions {
    pub fn cop(&self) -> CopAssumptions {
        CopAssumptions {
            evaporator_approach_c: self.evaporator_approach_c,
            condenser_approach_c: self.condenser_approach_c,
            derating: self.cop_derating,
        }
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            grid_co2_kg_per_kwh: GRID_CO2_KG_PER_KWH,
            cop_derating: COP_DERATING,
            evaporator_approach_c: EVAPORATOR_APPROACH_C,
            condenser_approach_c: CONDENSER_APPROACH_C,
            steam_enthalpy: SteamEnthalpyPolicy::Table,
            currency: "Rs".into(),
        }
    }
}
