use serde::Serialize;
use tracing::debug;

use super::fuel_db::FuelRecord;
use crate::constants::{KCAL_PER_KWH, KJ_PER_KCAL, SECONDS_PER_HOUR};
use crate::error::DomainError;
use crate::input::{BoilerExtras, OperatingProfile};

/// 이번 계산에 적용되는 연료 조건.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoilerFuel {
    pub name: String,
    /// 발열량 [kcal/kg]
    pub calorific_value_kcal_per_kg: f64,
    /// 효율 (0~1)
    pub efficiency: f64,
    /// 연료 단가 [통화/kg]
    pub unit_cost: f64,
    /// CO2 배출계수 [kg CO2/kg]
    pub co2_kg_per_kg: f64,
}

impl BoilerFuel {
    /// 연료표 레코드와 발열량 덮어쓰기 값으로 연료 조건을 만든다.
    ///
    /// 전기 저항 히터는 연료 단가를 전력 단가로, 발열량을 860 kcal/kWh로 고정한다.
    pub fn from_record(
        record: &FuelRecord,
        calorific_value_override: Option<f64>,
        profile: &OperatingProfile,
    ) -> Self {
        if record.is_electric_resistive() {
            return Self {
                name: record.name.clone(),
                calorific_value_kcal_per_kg: KCAL_PER_KWH,
                efficiency: record.efficiency_pct / 100.0,
                unit_cost: profile.electricity_unit_cost,
                co2_kg_per_kg: record.co2_kg_per_kg,
            };
        }
        Self {
            name: record.name.clone(),
            calorific_value_kcal_per_kg: calorific_value_override
                .unwrap_or(record.calorific_value_kcal_per_kg),
            efficiency: record.efficiency_pct / 100.0,
            unit_cost: record.unit_cost,
            co2_kg_per_kg: record.co2_kg_per_kg,
        }
    }
}

/// 보일러 운전비 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoilerCostResult {
    /// 연료 소비량 [kg/h]
    pub fuel_kg_per_h: f64,
    /// 연간 연료 소비량 [kg/년]
    pub fuel_kg_per_year: f64,
    /// 연간 연료비
    pub fuel_cost_per_year: f64,
    /// 연간 인건비
    pub labour_cost_per_year: f64,
    /// 연간 보조기기 전력비
    pub connected_load_cost_per_year: f64,
    /// 연간 총 운전비 (연료비 + 인건비 + 전력비)
    pub operating_cost_per_year: f64,
    /// 연간 CO2 배출량 [kg/년]
    pub co2_kg_per_year: f64,
}

/// 열출력(kW)을 내기 위한 연료 질량 유량 [kg/h].
pub fn fuel_kg_per_h(
    heating_capacity_kw: f64,
    calorific_value_kcal_per_kg: f64,
    efficiency: f64,
) -> Result<f64, DomainError> {
    if calorific_value_kcal_per_kg <= 0.0 || calorific_value_kcal_per_kg.is_nan() {
        return Err(DomainError::NonPositiveCalorificValue(
            calorific_value_kcal_per_kg,
        ));
    }
    if efficiency <= 0.0 || efficiency.is_nan() {
        return Err(DomainError::NonPositiveEfficiency(efficiency));
    }
    Ok((heating_capacity_kw * SECONDS_PER_HOUR)
        / (calorific_value_kcal_per_kg * efficiency * KJ_PER_KCAL))
}

/// 기존 보일러(또는 전기 히터)의 연간 연료 소비·운전비·CO2를 계산한다.
pub fn boiler_cost(
    heating_capacity_kw: f64,
    fuel: &BoilerFuel,
    profile: &OperatingProfile,
    extras: &BoilerExtras,
) -> Result<BoilerCostResult, DomainError> {
    let fuel_kg_per_h = fuel_kg_per_h(
        heating_capacity_kw,
        fuel.calorific_value_kcal_per_kg,
        fuel.efficiency,
    )?;
    let fuel_kg_per_year = profile.annual_total(fuel_kg_per_h);
    let fuel_cost_per_year = fuel_kg_per_year * fuel.unit_cost;
    let labour_cost_per_year = extras.labour_cost_per_day * profile.days_per_year;
    let connected_load_cost_per_year =
        profile.annual_total(extras.connected_load_kw) * profile.electricity_unit_cost;
    let result = BoilerCostResult {
        fuel_kg_per_h,
        fuel_kg_per_year,
        fuel_cost_per_year,
        labour_cost_per_year,
        connected_load_cost_per_year,
        operating_cost_per_year: fuel_cost_per_year
            + labour_cost_per_year
            + connected_load_cost_per_year,
        co2_kg_per_year: fuel_kg_per_year * fuel.co2_kg_per_kg,
    };
    debug!(
        fuel = %fuel.name,
        fuel_kg_per_h = result.fuel_kg_per_h,
        cost = result.operating_cost_per_year,
        "boiler cost computed"
    );
    Ok(result)
}
