//! 보일러와 히트펌프 계산 결과를 모아 연간 절감액과 CO2 저감량을 구한다.

use serde::Serialize;
use tracing::info;

use crate::boiler::{boiler_cost, BoilerCostResult, BoilerFuel, FuelTable};
use crate::capacity::{self, HeatingCapacity};
use crate::cooling::cooling_benefit::{cooling_benefit, CoolingBenefitResult};
use crate::error::CalcError;
use crate::heat_pump::{cop, heat_pump_cost, HeatPumpCostResult, ResolvedCop};
use crate::input::{Assumptions, CalculationInput};

/// 비교 계산 결과. 입력이 바뀌면 전체를 다시 계산한다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    pub heating_capacity: HeatingCapacity,
    pub cop: ResolvedCop,
    pub fuel: BoilerFuel,
    pub boiler: BoilerCostResult,
    pub heat_pump: HeatPumpCostResult,
    /// 냉방 편익 (비활성이면 `None`)
    pub cooling: Option<CoolingBenefitResult>,
    /// 히트펌프 + 냉방 연간 운전비
    pub total_hp_cost_per_year: f64,
    /// 히트펌프 + 냉방 연간 CO2 [kg]
    pub total_hp_co2_kg_per_year: f64,
    /// 보일러 운전비 - 히트펌프 측 운전비
    pub annual_savings: f64,
    /// 연간 CO2 저감량 [kg]
    pub co2_reduction_kg_per_year: f64,
    /// 연료비 / (연료비 - 히트펌프 운전비). 분모가 0 이하면 `None`.
    pub roi_years: Option<f64>,
    /// 설치비 / 연간 절감액. 설치비가 없거나 절감액이 0 이하면 `None`.
    pub simple_payback_years: Option<f64>,
}

/// 연료비 대비 회수 지표. 히트펌프가 연료비보다 비싸면 적용 불가.
pub fn roi_years(fuel_cost_per_year: f64, hp_cost_per_year: f64) -> Option<f64> {
    let denom = fuel_cost_per_year - hp_cost_per_year;
    (denom > 0.0).then(|| fuel_cost_per_year / denom)
}

/// 단순 회수기간 [년].
pub fn simple_payback_years(capital_cost: f64, annual_savings: f64) -> Option<f64> {
    (annual_savings > 0.0).then(|| capital_cost / annual_savings)
}

/// 입력 한 벌에 대해 보일러/히트펌프 비교 계산을 수행한다.
pub fn compare(
    input: &CalculationInput,
    assumptions: &Assumptions,
    fuels: &FuelTable,
) -> Result<ComparisonResult, CalcError> {
    let heating_capacity = capacity::resolve(&input.thermal, assumptions.steam_enthalpy)?;
    let kw = heating_capacity.kw;
    let cop = cop::resolve(&input.cop, assumptions.cop())?;

    let record = fuels
        .find(&input.fuel.name)
        .ok_or_else(|| CalcError::UnknownFuel(input.fuel.name.clone()))?;
    let fuel = BoilerFuel::from_record(record, input.fuel.calorific_value_override, &input.profile);
    let boiler = boiler_cost(kw, &fuel, &input.profile, &input.boiler_extras)?;

    let heat_pump = heat_pump_cost(
        kw,
        cop.actual,
        &input.profile,
        assumptions.grid_co2_kg_per_kwh,
    )?;
    let cooling = input.cooling.as_ref().map(|opt| {
        cooling_benefit(
            kw,
            heat_pump.input_kw,
            opt.chiller_ikw_per_tr,
            &input.profile,
            assumptions.grid_co2_kg_per_kwh,
        )
    });

    let (cooling_cost, cooling_co2) = cooling
        .map(|c| (c.cost_per_year, c.co2_kg_per_year))
        .unwrap_or((0.0, 0.0));
    let total_hp_cost_per_year = heat_pump.cost_per_year + cooling_cost;
    let total_hp_co2_kg_per_year = heat_pump.co2_kg_per_year + cooling_co2;
    let annual_savings = boiler.operating_cost_per_year - total_hp_cost_per_year;
    let co2_reduction_kg_per_year = boiler.co2_kg_per_year - total_hp_co2_kg_per_year;

    let result = ComparisonResult {
        heating_capacity,
        cop,
        fuel,
        boiler,
        heat_pump,
        cooling,
        total_hp_cost_per_year,
        total_hp_co2_kg_per_year,
        annual_savings,
        co2_reduction_kg_per_year,
        roi_years: roi_years(boiler.fuel_cost_per_year, heat_pump.cost_per_year),
        simple_payback_years: input
            .capital_cost
            .and_then(|capex| simple_payback_years(capex, annual_savings)),
    };
    info!(
        heating_kw = kw,
        cop = result.cop.actual,
        savings = result.annual_savings,
        co2_reduction_kg = result.co2_reduction_kg_per_year,
        "comparison complete"
    );
    Ok(result)
}
