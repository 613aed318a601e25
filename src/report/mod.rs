//! 계산 결과를 요약표/상세표/그래프 데이터로 정리하고 CSV 또는 .xlsx로 내보낸다.

pub mod chart;
pub mod table;
pub mod workbook;

pub use chart::{co2_chart, cost_chart, BarChart};
pub use table::{ReportValue, ResultRow, ResultTable};
pub use workbook::{write_workbook, write_xlsx};

use serde::Serialize;
use thiserror::Error;

use crate::capacity::ThermalInput;
use crate::comparison::ComparisonResult;
use crate::constants::KG_PER_TONNE;
use crate::heat_pump::CopSpec;
use crate::input::{Assumptions, CalculationInput};

pub const NOT_APPLICABLE: &str = "N/A";

/// 보고서 출력 중 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("result table is missing column '{0}'")]
    MissingColumn(&'static str),
}

/// 상단 요약 네 항목. CO2는 톤 단위.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub boiler_operating_cost: f64,
    pub heat_pump_operating_cost: f64,
    pub annual_savings: f64,
    pub co2_reduction_tonnes: f64,
}

pub fn summary(result: &ComparisonResult) -> Summary {
    Summary {
        boiler_operating_cost: result.boiler.operating_cost_per_year,
        heat_pump_operating_cost: result.total_hp_cost_per_year,
        annual_savings: result.annual_savings,
        co2_reduction_tonnes: result.co2_reduction_kg_per_year / KG_PER_TONNE,
    }
}

pub fn summary_table(result: &ComparisonResult, currency: &str) -> ResultTable {
    let s = summary(result);
    let mut t = ResultTable::new();
    t.push(
        format!("Annual Boiler Operating Cost ({currency}/year)"),
        s.boiler_operating_cost,
    );
    t.push(
        format!("Heat Pump Operating Cost ({currency}/year)"),
        s.heat_pump_operating_cost,
    );
    t.push(format!("Annual Savings ({currency}/year)"), s.annual_savings);
    t.push("Annual CO₂ Reduction (ton/year)", s.co2_reduction_tonnes);
    t
}

fn optional(value: Option<f64>) -> ReportValue {
    value.map_or_else(|| NOT_APPLICABLE.into(), ReportValue::Number)
}

/// 상세 결과표. 내보내기 CSV의 Results 시트와 같다.
pub fn detailed_results(result: &ComparisonResult, currency: &str) -> ResultTable {
    let c = currency;
    let mut t = ResultTable::new();
    t.push("Heating Capacity (kW)", result.heating_capacity.kw);
    t.push("Fuel Required (kg/year)", result.boiler.fuel_kg_per_year);
    t.push(format!("Fuel Cost ({c}/year)"), result.boiler.fuel_cost_per_year);
    t.push(
        format!("Boiler Labour Cost ({c}/year)"),
        result.boiler.labour_cost_per_year,
    );
    t.push(
        format!("Boiler Connected Load Electricity Cost ({c}/year)"),
        result.boiler.connected_load_cost_per_year,
    );
    t.push(
        format!("Boiler Operating Cost ({c}/year)"),
        result.boiler.operating_cost_per_year,
    );
    t.push("Actual COP", result.cop.actual);
    t.push("HP Electricity (kW)", result.heat_pump.input_kw);
    t.push(format!("HP Operating Cost ({c}/year)"), result.heat_pump.cost_per_year);
    match result.cooling {
        Some(cooling) => {
            t.push("Cooling Capacity (kW)", cooling.capacity_kw);
            t.push("Cooling Capacity (TR)", cooling.capacity_tr);
            t.push(format!("Cooling Cost ({c}/year)"), cooling.cost_per_year);
        }
        None => t.push("Cooling (Disabled)", NOT_APPLICABLE),
    }
    t.push("Total Operating Cost (HP + Cooling)", result.total_hp_cost_per_year);
    t.push(format!("Annual Savings ({c}/year)"), result.annual_savings);
    t.push(
        "Calorific Value Used (kcal/kg)",
        result.fuel.calorific_value_kcal_per_kg,
    );
    t.push(
        "CO₂ (Fuel - ton/year)",
        result.boiler.co2_kg_per_year / KG_PER_TONNE,
    );
    t.push(
        "CO₂ (HP + Cooling - ton/year)",
        result.total_hp_co2_kg_per_year / KG_PER_TONNE,
    );
    t.push(
        "CO₂ Reduction (ton/year)",
        result.co2_reduction_kg_per_year / KG_PER_TONNE,
    );
    t.push("ROI (years)", optional(result.roi_years));
    t.push("Simple Payback (years)", optional(result.simple_payback_years));
    t
}

/// 입력값 표 (Inputs 시트).
pub fn inputs_table(input: &CalculationInput, currency: &str) -> ResultTable {
    let mut t = ResultTable::new();
    t.push("Heating Method", input.thermal.label());
    match input.thermal {
        ThermalInput::SteamFlow {
            flow_kg_per_h,
            pressure_bar_abs,
            condensate_temp_c,
        } => {
            t.push("Steam Flow (kg/hr)", flow_kg_per_h);
            t.push("Steam Inlet Pressure (bar abs)", pressure_bar_abs);
            t.push("Condensate Temp (°C)", condensate_temp_c);
        }
        ThermalInput::DirectCapacity { kw } => t.push("Heating Capacity (kW)", kw),
        ThermalInput::ElectricHeater { kw } => t.push("Electric Heater Rating (kW)", kw),
        ThermalInput::BoilerCapacity { kcal_per_h } => {
            t.push("Boiler Capacity (kcal/hr)", kcal_per_h)
        }
    }
    match input.cop {
        CopSpec::FromTemperatures {
            source_temp_c,
            hot_water_temp_c,
            actual_cop,
        } => {
            t.push("Source Temperature (°C)", source_temp_c);
            t.push("Required Hot Water Temperature (°C)", hot_water_temp_c);
            t.push("COP Override", optional(actual_cop));
        }
        CopSpec::Direct { cop } => t.push("COP (direct)", cop),
    }
    t.push("Hours/day", input.profile.hours_per_day);
    t.push("Days/year", input.profile.days_per_year);
    t.push(
        format!("Electricity Cost ({currency}/kWh)"),
        input.profile.electricity_unit_cost,
    );
    t.push("Fuel Type", input.fuel.name.as_str());
    t.push(
        "Calorific Value Override (kcal/kg)",
        optional(input.fuel.calorific_value_override),
    );
    t.push(
        format!("Boiler Labour Cost ({currency}/day)"),
        input.boiler_extras.labour_cost_per_day,
    );
    t.push(
        "Boiler Connected Load (kW)",
        input.boiler_extras.connected_load_kw,
    );
    match &input.cooling {
        Some(c) => t.push("Chiller Efficiency (ikW/TR)", c.chiller_ikw_per_tr),
        None => t.push("Cooling Benefit", "Disabled"),
    }
    t.push(format!("Capital Cost ({currency})"), optional(input.capital_cost));
    t
}

/// 설계 상수 표 (Assumptions 시트).
pub fn assumptions_table(assumptions: &Assumptions) -> ResultTable {
    let mut t = ResultTable::new();
    t.push("Grid CO₂ Factor (kg/kWh)", assumptions.grid_co2_kg_per_kwh);
    t.push("COP Derating Factor", assumptions.cop_derating);
    t.push("Evaporator Approach (°C)", assumptions.evaporator_approach_c);
    t.push("Condenser Approach (°C)", assumptions.condenser_approach_c);
    t.push(
        "Steam Enthalpy Source",
        format!("{:?}", assumptions.steam_enthalpy),
    );
    t.push("Currency", assumptions.currency.as_str());
    t
}
