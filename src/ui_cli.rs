use std::io::{self, Write};

use crate::app::AppError;
use crate::boiler::FuelTable;
use crate::capacity::ThermalInput;
use crate::comparison::ComparisonResult;
use crate::heat_pump::CopSpec;
use crate::input::{CalculationInput, CoolingOption};
use crate::report;

/// 입력 방식 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodChoice {
    SteamFlow,
    DirectCapacity,
    ElectricHeater,
    BoilerCapacity,
}

fn current_method(input: &ThermalInput) -> MethodChoice {
    match input {
        ThermalInput::SteamFlow { .. } => MethodChoice::SteamFlow,
        ThermalInput::DirectCapacity { .. } => MethodChoice::DirectCapacity,
        ThermalInput::ElectricHeater { .. } => MethodChoice::ElectricHeater,
        ThermalInput::BoilerCapacity { .. } => MethodChoice::BoilerCapacity,
    }
}

/// 난방 용량 입력 방식을 묻는다. 엔터는 현재 방식 유지.
pub fn method_menu(current: MethodChoice) -> Result<MethodChoice, AppError> {
    println!("\n=== 1) Heating Capacity Input ===");
    println!("1) Steam Flow Rate");
    println!("2) Heating Capacity (kW)");
    println!("3) Electric Heater (kW)");
    println!("4) Boiler Capacity (kcal/hr)");
    loop {
        let sel = read_line(&format!("방식 선택 [현재 {current:?}]: "))?;
        match sel.trim() {
            "" => return Ok(current),
            "1" => return Ok(MethodChoice::SteamFlow),
            "2" => return Ok(MethodChoice::DirectCapacity),
            "3" => return Ok(MethodChoice::ElectricHeater),
            "4" => return Ok(MethodChoice::BoilerCapacity),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 시나리오 전체를 대화형으로 입력받는다. 각 항목에서 엔터를 누르면 기존 값을 유지한다.
pub fn prompt_scenario(
    current: &CalculationInput,
    fuels: &FuelTable,
) -> Result<CalculationInput, AppError> {
    let mut input = current.clone();

    let method = method_menu(current_method(&input.thermal))?;
    input.thermal = match (method, &current.thermal) {
        (MethodChoice::SteamFlow, prev) => {
            let (flow, p, tc) = match prev {
                ThermalInput::SteamFlow {
                    flow_kg_per_h,
                    pressure_bar_abs,
                    condensate_temp_c,
                } => (*flow_kg_per_h, *pressure_bar_abs, *condensate_temp_c),
                _ => (1000.0, 1.0, 95.0),
            };
            ThermalInput::SteamFlow {
                flow_kg_per_h: read_f64_or("Steam flow (kg/hr)", flow)?,
                pressure_bar_abs: read_f64_or("Steam Inlet Pressure (bar abs)", p)?,
                condensate_temp_c: read_f64_or("Condensate temp (°C)", tc)?,
            }
        }
        (MethodChoice::DirectCapacity, prev) => ThermalInput::DirectCapacity {
            kw: read_f64_or("Heating capacity (kW)", previous_kw(prev))?,
        },
        (MethodChoice::ElectricHeater, prev) => ThermalInput::ElectricHeater {
            kw: read_f64_or("Electric heater rating (kW)", previous_kw(prev))?,
        },
        (MethodChoice::BoilerCapacity, prev) => {
            let default = match prev {
                ThermalInput::BoilerCapacity { kcal_per_h } => *kcal_per_h,
                _ => 100_000.0,
            };
            ThermalInput::BoilerCapacity {
                kcal_per_h: read_f64_or("Boiler capacity (kcal/hr)", default)?,
            }
        }
    };

    println!("\n=== 2) Temperature & COP ===");
    let (src, hw, over) = match current.cop {
        CopSpec::FromTemperatures {
            source_temp_c,
            hot_water_temp_c,
            actual_cop,
        } => (source_temp_c, hot_water_temp_c, actual_cop),
        CopSpec::Direct { cop } => (35.0, 65.0, Some(cop)),
    };
    let source_temp_c = read_f64_or("Source Temperature (°C)", src)?;
    let hot_water_temp_c = read_f64_or("Required Hot Water Temperature (°C)", hw)?;
    let actual_cop = read_optional_f64("Actual COP (엔터=온도로 계산)", over)?;
    input.cop = CopSpec::FromTemperatures {
        source_temp_c,
        hot_water_temp_c,
        actual_cop,
    };

    println!("\n=== 3) Operation & Fuel Selection ===");
    input.profile.hours_per_day = read_f64_or("Hours/day", input.profile.hours_per_day)?;
    input.profile.days_per_year = read_f64_or("Days/year", input.profile.days_per_year)?;
    input.profile.electricity_unit_cost = read_f64_or(
        "Electricity Cost (per kWh)",
        input.profile.electricity_unit_cost,
    )?;
    input.fuel.name = read_fuel(fuels, &input.fuel.name)?;
    input.fuel.calorific_value_override = read_optional_f64(
        "Calorific Value (kcal/kg) (엔터=연료표 기본값)",
        input.fuel.calorific_value_override,
    )?;
    input.boiler_extras.labour_cost_per_day = read_f64_or(
        "Boiler Labour Cost (per day)",
        input.boiler_extras.labour_cost_per_day,
    )?;
    input.boiler_extras.connected_load_kw = read_f64_or(
        "Boiler Connected Load (kW)",
        input.boiler_extras.connected_load_kw,
    )?;

    println!("\n=== 4) Cooling Benefit ===");
    let enabled = read_yes_no("Enable Cooling Benefit?", input.cooling.is_some())?;
    input.cooling = if enabled {
        let prev = input.cooling.clone().unwrap_or_default();
        Some(CoolingOption {
            chiller_ikw_per_tr: read_f64_or("Chiller Efficiency (ikW/TR)", prev.chiller_ikw_per_tr)?,
        })
    } else {
        None
    };
    input.capital_cost = read_optional_f64("Heat pump capital cost (엔터=생략)", input.capital_cost)?;
    Ok(input)
}

fn previous_kw(prev: &ThermalInput) -> f64 {
    match prev {
        ThermalInput::DirectCapacity { kw } | ThermalInput::ElectricHeater { kw } => *kw,
        _ => 462.0,
    }
}

fn read_fuel(fuels: &FuelTable, current: &str) -> Result<String, AppError> {
    let names: Vec<&str> = fuels.names().collect();
    for (i, name) in names.iter().enumerate() {
        println!("{}) {name}", i + 1);
    }
    loop {
        let sel = read_line(&format!("Fuel Type [현재 {current}]: "))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(current.to_string());
        }
        if let Ok(n) = sel.parse::<usize>() {
            if let Some(name) = n.checked_sub(1).and_then(|i| names.get(i)) {
                return Ok((*name).to_string());
            }
        }
        if let Some(rec) = fuels.find(sel) {
            return Ok(rec.name.clone());
        }
        println!("연료표에 없는 연료입니다.");
    }
}

/// 요약표, 상세표, 비교 그래프를 출력한다.
pub fn print_report(result: &ComparisonResult, currency: &str) {
    println!("\n-- Summary --");
    print!("{}", report::summary_table(result, currency).render_text());
    if let Some(steam) = result.heating_capacity.steam {
        println!(
            "\nSteam enthalpy: h_g={:.1} kJ/kg, h_f={:.1} kJ/kg{}",
            steam.vapor_enthalpy_kj_per_kg,
            steam.liquid_enthalpy_kj_per_kg,
            if steam.clamped { " (표 범위 밖, 가장자리 값 사용)" } else { "" }
        );
    }
    if let Some(ideal) = result.cop.ideal {
        println!("Ideal COP: {ideal:.2}, Actual COP: {:.2}", result.cop.actual);
    }
    println!("\n-- Detailed Results --");
    print!("{}", report::detailed_results(result, currency).render_text());
    println!();
    print!("{}", report::cost_chart(result, currency).render_text(40));
    println!();
    print!("{}", report::co2_chart(result).render_text(40));
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64_or(prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{prompt} [{default}]: "))?;
        if s.trim().is_empty() {
            return Ok(default);
        }
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}

fn read_optional_f64(prompt: &str, current: Option<f64>) -> Result<Option<f64>, AppError> {
    let shown = current.map_or_else(|| "-".to_string(), |v| v.to_string());
    loop {
        let s = read_line(&format!("{prompt} [{shown}]: "))?;
        match s.trim() {
            "" => return Ok(current),
            "-" => return Ok(None),
            t => match t.parse::<f64>() {
                Ok(v) => return Ok(Some(v)),
                Err(_) => println!("숫자를 입력하세요. ('-' 입력 시 값 제거)"),
            },
        }
    }
}

fn read_yes_no(prompt: &str, default: bool) -> Result<bool, AppError> {
    let hint = if default { "Y/n" } else { "y/N" };
    loop {
        let s = read_line(&format!("{prompt} [{hint}]: "))?;
        match s.trim().to_ascii_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("y 또는 n을 입력하세요."),
        }
    }
}
