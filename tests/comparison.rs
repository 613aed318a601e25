use approx::assert_relative_eq;
use rstest::rstest;

use heatpump_savings::boiler::FuelTable;
use heatpump_savings::capacity::ThermalInput;
use heatpump_savings::comparison::{compare, roi_years, simple_payback_years};
use heatpump_savings::constants::KW_PER_TR;
use heatpump_savings::cooling::cooling_benefit::{cooling_benefit, cooling_capacity_kw};
use heatpump_savings::error::{CalcError, DomainError};
use heatpump_savings::heat_pump::CopSpec;
use heatpump_savings::input::{
    Assumptions, BoilerExtras, CalculationInput, CoolingOption, FuelSelection, OperatingProfile,
};

fn scenario(cooling: Option<CoolingOption>) -> CalculationInput {
    CalculationInput {
        capital_cost: None,
        thermal: ThermalInput::DirectCapacity { kw: 462.0 },
        cop: CopSpec::Direct { cop: 3.5 },
        profile: OperatingProfile {
            hours_per_day: 24.0,
            days_per_year: 330.0,
            electricity_unit_cost: 5.5,
        },
        fuel: FuelSelection {
            name: "Diesel".into(),
            calorific_value_override: None,
        },
        boiler_extras: BoilerExtras::default(),
        cooling,
    }
}

#[test]
fn cooling_disabled_totals_equal_heat_pump_only() {
    let res = compare(&scenario(None), &Assumptions::default(), &FuelTable::builtin())
        .expect("compare");
    assert!(res.cooling.is_none());
    assert_eq!(res.total_hp_cost_per_year, res.heat_pump.cost_per_year);
    assert_eq!(res.total_hp_co2_kg_per_year, res.heat_pump.co2_kg_per_year);
    assert_relative_eq!(res.heat_pump.cost_per_year, 5_748_480.0, max_relative = 1e-12);
    assert_relative_eq!(
        res.annual_savings,
        res.boiler.operating_cost_per_year - 5_748_480.0,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        res.co2_reduction_kg_per_year,
        res.boiler.co2_kg_per_year - res.heat_pump.co2_kg_per_year,
        max_relative = 1e-12
    );
}

#[test]
fn cooling_enabled_adds_chiller_energy() {
    let opt = CoolingOption {
        chiller_ikw_per_tr: 0.8,
    };
    let res = compare(
        &scenario(Some(opt)),
        &Assumptions::default(),
        &FuelTable::builtin(),
    )
    .expect("compare");
    let cooling = res.cooling.expect("cooling");
    assert_relative_eq!(cooling.capacity_kw, 330.0, max_relative = 1e-12);
    assert_relative_eq!(cooling.capacity_tr, 330.0 / KW_PER_TR, max_relative = 1e-12);
    assert_relative_eq!(cooling.input_kw, 330.0 / KW_PER_TR * 0.8, max_relative = 1e-12);
    assert_relative_eq!(
        res.total_hp_cost_per_year,
        res.heat_pump.cost_per_year + cooling.cost_per_year,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        res.total_hp_co2_kg_per_year,
        res.heat_pump.co2_kg_per_year + cooling.co2_kg_per_year,
        max_relative = 1e-12
    );
}

#[rstest]
#[case(462.0, 132.0, 330.0)]
#[case(462.0, 924.0, 0.0)]
#[case(0.0, 10.0, 0.0)]
fn cooling_capacity_is_never_negative(
    #[case] heating: f64,
    #[case] hp_input: f64,
    #[case] expected: f64,
) {
    assert_eq!(cooling_capacity_kw(heating, hp_input), expected);
    let profile = OperatingProfile::default();
    let res = cooling_benefit(heating, hp_input, 0.8, &profile, 0.82);
    assert!(res.capacity_kw >= 0.0);
    assert!(res.cost_per_year >= 0.0);
}

#[test]
fn roi_is_not_applicable_without_savings() {
    assert_relative_eq!(roi_years(100.0, 40.0).expect("roi"), 100.0 / 60.0);
    assert_eq!(roi_years(40.0, 100.0), None);
    assert_eq!(roi_years(50.0, 50.0), None);
}

#[test]
fn simple_payback_needs_positive_savings() {
    assert_eq!(simple_payback_years(1_000_000.0, 250_000.0), Some(4.0));
    assert_eq!(simple_payback_years(1_000_000.0, 0.0), None);
    assert_eq!(simple_payback_years(1_000_000.0, -5.0), None);
}

#[test]
fn capital_cost_produces_payback() {
    let mut input = scenario(None);
    input.capital_cost = Some(2_000_000.0);
    let res = compare(&input, &Assumptions::default(), &FuelTable::builtin()).expect("compare");
    assert!(res.annual_savings > 0.0);
    assert_relative_eq!(
        res.simple_payback_years.expect("payback"),
        2_000_000.0 / res.annual_savings,
        max_relative = 1e-12
    );
}

#[test]
fn unknown_fuel_is_reported() {
    let mut input = scenario(None);
    input.fuel.name = "Hydrogen".into();
    let err = compare(&input, &Assumptions::default(), &FuelTable::builtin()).unwrap_err();
    assert_eq!(err, CalcError::UnknownFuel("Hydrogen".into()));
}

#[test]
fn zero_cop_fails_instead_of_infinite_cost() {
    let mut input = scenario(None);
    input.cop = CopSpec::Direct { cop: 0.0 };
    let err = compare(&input, &Assumptions::default(), &FuelTable::builtin()).unwrap_err();
    assert_eq!(err, CalcError::Domain(DomainError::NonPositiveCop(0.0)));
}

#[test]
fn custom_grid_factor_changes_heat_pump_co2() {
    let assumptions = Assumptions {
        grid_co2_kg_per_kwh: 0.5,
        ..Assumptions::default()
    };
    let res = compare(&scenario(None), &assumptions, &FuelTable::builtin()).expect("compare");
    assert_relative_eq!(
        res.heat_pump.co2_kg_per_year,
        132.0 * 24.0 * 330.0 * 0.5,
        max_relative = 1e-12
    );
}
