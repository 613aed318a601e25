use serde::Serialize;

use crate::error::DomainError;
use crate::input::OperatingProfile;

/// 히트펌프 운전비 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatPumpCostResult {
    /// 히트펌프 소비전력 [kW]
    pub input_kw: f64,
    /// 연간 전력 사용량 [kWh/년]
    pub energy_kwh_per_year: f64,
    /// 연간 운전비 [통화/년]
    pub cost_per_year: f64,
    /// 연간 CO2 배출량 [kg/년]
    pub co2_kg_per_year: f64,
}

/// 히트펌프 소비전력을 계산한다. COP가 0 이하이면 오류.
pub fn input_kw(heating_capacity_kw: f64, cop: f64) -> Result<f64, DomainError> {
    if cop <= 0.0 || cop.is_nan() {
        return Err(DomainError::NonPositiveCop(cop));
    }
    Ok(heating_capacity_kw / cop)
}

/// 히트펌프 연간 운전비와 CO2 배출량을 계산한다.
pub fn heat_pump_cost(
    heating_capacity_kw: f64,
    cop: f64,
    profile: &OperatingProfile,
    grid_co2_kg_per_kwh: f64,
) -> Result<HeatPumpCostResult, DomainError> {
    let input_kw = input_kw(heating_capacity_kw, cop)?;
    let energy = profile.annual_total(input_kw);
    Ok(HeatPumpCostResult {
        input_kw,
        energy_kwh_per_year: energy,
        cost_per_year: energy * profile.electricity_unit_cost,
        co2_kg_per_year: energy * grid_co2_kg_per_kwh,
    })
}
