//! 증기표 보간과 난방 용량 환산 회귀 테스트.
use approx::assert_relative_eq;
use rstest::rstest;

use heatpump_savings::capacity::{self, ThermalInput};
use heatpump_savings::constants::{KCAL_PER_KWH, WATER_CP_KJ_PER_KGK};
use heatpump_savings::steam::{
    saturated_vapor_enthalpy, table_knots, table_pressure_range, vapor_enthalpy,
    SteamEnthalpyPolicy,
};

#[rstest]
#[case(1.0, 2674.9)]
#[case(5.0, 2748.1)]
#[case(11.0, 2780.6)]
fn knots_are_returned_exactly(#[case] p: f64, #[case] h: f64) {
    let lookup = saturated_vapor_enthalpy(p);
    assert_relative_eq!(lookup.enthalpy_kj_per_kg, h, max_relative = 1e-12);
    assert!(!lookup.clamped);
}

#[test]
fn midpoint_interpolates_linearly() {
    let lookup = saturated_vapor_enthalpy(1.25);
    assert_relative_eq!(lookup.enthalpy_kj_per_kg, 2684.0, max_relative = 1e-12);
}

#[test]
fn interpolation_stays_between_bracketing_knots() {
    let knots: Vec<(f64, f64)> = table_knots().collect();
    for pair in knots.windows(2) {
        let (p0, h0) = pair[0];
        let (p1, h1) = pair[1];
        for step in 1..10 {
            let p = p0 + (p1 - p0) * step as f64 / 10.0;
            let h = saturated_vapor_enthalpy(p).enthalpy_kj_per_kg;
            assert!(h >= h0 && h <= h1, "p={p} h={h} not in [{h0}, {h1}]");
        }
    }
}

#[rstest]
#[case(0.5, 2674.9)]
#[case(25.0, 2780.6)]
fn out_of_table_pressure_is_clamped(#[case] p: f64, #[case] edge: f64) {
    let lookup = saturated_vapor_enthalpy(p);
    assert!(lookup.clamped);
    assert_relative_eq!(lookup.enthalpy_kj_per_kg, edge);
    let (lo, hi) = table_pressure_range();
    assert!(p < lo || p > hi);
}

#[rstest]
#[case(1.0, 2674.9)]
#[case(5.0, 2748.1)]
#[case(10.0, 2777.1)]
fn if97_policy_agrees_with_table(#[case] p: f64, #[case] table_h: f64) {
    let lookup = vapor_enthalpy(SteamEnthalpyPolicy::If97, p).expect("if97");
    assert!(
        (lookup.enthalpy_kj_per_kg - table_h).abs() < 2.0,
        "IF97 h={} table h={table_h}",
        lookup.enthalpy_kj_per_kg
    );
}

#[test]
fn if97_policy_rejects_non_positive_pressure() {
    assert!(vapor_enthalpy(SteamEnthalpyPolicy::If97, 0.0).is_err());
}

#[test]
fn steam_flow_capacity() {
    let input = ThermalInput::SteamFlow {
        flow_kg_per_h: 1000.0,
        pressure_bar_abs: 1.0,
        condensate_temp_c: 95.0,
    };
    let cap = capacity::resolve(&input, SteamEnthalpyPolicy::Table).expect("capacity");
    let expected = 1000.0 * (2674.9 - WATER_CP_KJ_PER_KGK * 95.0) / 3600.0;
    assert_relative_eq!(cap.kw, expected, max_relative = 1e-12);
    let steam = cap.steam.expect("steam detail");
    assert_relative_eq!(steam.liquid_enthalpy_kj_per_kg, 397.67, max_relative = 1e-12);
}

#[rstest]
#[case(ThermalInput::DirectCapacity { kw: 462.0 }, 462.0)]
#[case(ThermalInput::ElectricHeater { kw: 250.0 }, 250.0)]
#[case(ThermalInput::BoilerCapacity { kcal_per_h: 100_000.0 }, 100_000.0 / KCAL_PER_KWH)]
fn non_steam_methods(#[case] input: ThermalInput, #[case] kw: f64) {
    let cap = capacity::resolve(&input, SteamEnthalpyPolicy::Table).expect("capacity");
    assert_relative_eq!(cap.kw, kw, max_relative = 1e-12);
    assert!(cap.steam.is_none());
}

#[test]
fn if97_saturation_temperature_at_one_atmosphere() {
    let t = heatpump_savings::steam::if97::saturation_temp_c_from_pressure_bar_abs(1.01325)
        .expect("tsat");
    assert!((t - 100.0).abs() < 0.05, "tsat={t}");
}
