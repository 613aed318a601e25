use serde::Serialize;

use crate::constants::KW_PER_TR;
use crate::input::OperatingProfile;

/// 히트펌프 증발기 측에서 얻는 부수 냉방 편익.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoolingBenefitResult {
    /// 냉방 용량 [kW]
    pub capacity_kw: f64,
    /// 냉방 용량 [TR]
    pub capacity_tr: f64,
    /// 같은 냉방을 냉동기로 낼 때의 소비전력 [kW]
    pub input_kw: f64,
    /// 연간 냉방 전력비
    pub cost_per_year: f64,
    /// 연간 냉방 CO2 [kg/년]
    pub co2_kg_per_year: f64,
}

/// 회수 가능한 냉방 용량 [kW]. 음수가 되지 않도록 0에서 자른다.
pub fn cooling_capacity_kw(heating_capacity_kw: f64, hp_input_kw: f64) -> f64 {
    (heating_capacity_kw - hp_input_kw).max(0.0)
}

/// 냉방 편익을 계산한다.
pub fn cooling_benefit(
    heating_capacity_kw: f64,
    hp_input_kw: f64,
    chiller_ikw_per_tr: f64,
    profile: &OperatingProfile,
    grid_co2_kg_per_kwh: f64,
) -> CoolingBenefitResult {
    let capacity_kw = cooling_capacity_kw(heating_capacity_kw, hp_input_kw);
    let capacity_tr = capacity_kw / KW_PER_TR;
    let input_kw = capacity_tr * chiller_ikw_per_tr;
    let energy = profile.annual_total(input_kw);
    CoolingBenefitResult {
        capacity_kw,
        capacity_tr,
        input_kw,
        cost_per_year: energy * profile.electricity_unit_cost,
        co2_kg_per_year: energy * grid_co2_kg_per_kwh,
    }
}
