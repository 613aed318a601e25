use std::fs;

use calamine::{open_workbook_auto, Data, Reader};
use heatpump_savings::boiler::FuelTable;
use heatpump_savings::comparison::compare;
use heatpump_savings::config::Config;
use heatpump_savings::input::{Assumptions, CalculationInput, CoolingOption};
use heatpump_savings::report::{
    self, co2_chart, cost_chart, detailed_results, ReportValue, ResultTable,
};

fn default_run(cooling: bool) -> (CalculationInput, heatpump_savings::ComparisonResult) {
    let mut input = CalculationInput::default();
    if cooling {
        input.cooling = Some(CoolingOption::default());
    }
    let res = compare(&input, &Assumptions::default(), &FuelTable::builtin()).expect("compare");
    (input, res)
}

#[test]
fn csv_round_trip_keeps_names_and_values() {
    let (_, res) = default_run(true);
    let table = detailed_results(&res, "Rs");
    let mut buf = Vec::new();
    table.write_csv(&mut buf).expect("write");

    let text = String::from_utf8(buf.clone()).expect("utf8");
    assert!(text.starts_with("Parameter,Value\n"));

    let parsed = ResultTable::read_csv(buf.as_slice()).expect("read");
    assert_eq!(parsed.len(), table.len());
    for (orig, back) in table.rows.iter().zip(&parsed.rows) {
        assert_eq!(orig.parameter, back.parameter);
        match (&orig.value, &back.value) {
            (ReportValue::Number(a), ReportValue::Number(b)) => {
                assert!((a - b).abs() <= 0.005 + 1e-6, "{}: {a} vs {b}", orig.parameter)
            }
            (a, b) => assert_eq!(a, b),
        }
    }
}

#[test]
fn disabled_cooling_is_marked_not_applicable() {
    let (_, res) = default_run(false);
    let table = detailed_results(&res, "Rs");
    assert_eq!(
        table.get("Cooling (Disabled)"),
        Some(&ReportValue::Text("N/A".into()))
    );
    assert!(table.get("Cooling Capacity (kW)").is_none());
}

#[test]
fn summary_reports_co2_in_tonnes() {
    let (_, res) = default_run(false);
    let s = report::summary(&res);
    assert_eq!(s.co2_reduction_tonnes, res.co2_reduction_kg_per_year / 1000.0);
    assert_eq!(s.annual_savings, res.annual_savings);
    let table = report::summary_table(&res, "Rs");
    assert_eq!(table.len(), 4);
    assert!(table.get("Annual Savings (Rs/year)").is_some());
}

#[test]
fn charts_compare_boiler_and_heat_pump() {
    let (_, res) = default_run(true);
    let cost = cost_chart(&res, "Rs");
    assert_eq!(cost.bars.len(), 2);
    assert_eq!(cost.bars[0].1, res.boiler.operating_cost_per_year);
    assert_eq!(cost.bars[1].1, res.total_hp_cost_per_year);
    let co2 = co2_chart(&res);
    assert_eq!(co2.bars[1].1, res.total_hp_co2_kg_per_year);
    let text = cost.render_text(20);
    assert!(text.contains("Fuel Boiler"));
    assert!(text.contains("Heat Pump"));
}

#[test]
fn workbook_writes_three_sheets() {
    let (input, res) = default_run(false);
    let dir = std::env::temp_dir().join(format!("heatpump_wb_{}", std::process::id()));
    let files =
        report::write_workbook(&dir, &input, &Assumptions::default(), &res).expect("workbook");
    assert_eq!(files.len(), 3);
    for f in &files {
        assert!(f.exists(), "{}", f.display());
    }
    let results = fs::read(dir.join("Results.csv")).expect("results sheet");
    let table = ResultTable::read_csv(results.as_slice()).expect("parse");
    assert_eq!(table.len(), detailed_results(&res, "Rs").len());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn xlsx_workbook_has_three_named_sheets() {
    let (input, res) = default_run(true);
    let path = std::env::temp_dir().join(format!("heatpump_wb_{}.xlsx", std::process::id()));
    report::write_xlsx(&path, &input, &Assumptions::default(), &res).expect("xlsx");

    let mut wb = open_workbook_auto(&path).expect("open");
    assert_eq!(wb.sheet_names(), ["Inputs", "Assumptions", "Results"]);
    let range = wb.worksheet_range("Results").expect("results sheet");
    let _ = fs::remove_file(&path);

    let expected = detailed_results(&res, "Rs");
    assert_eq!(range.height(), expected.len() + 1);
    assert_eq!(range.get_value((0, 0)), Some(&Data::String("Parameter".into())));
    for (row, entry) in (1u32..).zip(&expected.rows) {
        assert_eq!(
            range.get_value((row, 0)),
            Some(&Data::String(entry.parameter.clone()))
        );
        match &entry.value {
            ReportValue::Number(v) => assert_eq!(range.get_value((row, 1)), Some(&Data::Float(*v))),
            ReportValue::Text(t) => {
                assert_eq!(range.get_value((row, 1)), Some(&Data::String(t.clone())))
            }
        }
    }
}

#[test]
fn default_config_survives_toml_round_trip() {
    let cfg = Config::default();
    let text = toml::to_string_pretty(&cfg).expect("serialize");
    let back: Config = toml::from_str(&text).expect("parse");
    assert_eq!(back, cfg);
}
